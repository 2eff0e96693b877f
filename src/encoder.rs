//! Fitted label encoders for categorical fields.

use serde::{Deserialize, Serialize};

/// A categorical string→code mapping fitted at training time.
///
/// Codes are positions in the fitted class list, matching the encoders
/// the training pipeline serialized into the artifact bundle. The
/// vocabulary is closed: values outside it are rejected upstream, never
/// defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Build an encoder over an ordered class list.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Integer code for `value`, if it belongs to the fitted vocabulary.
    pub fn code(&self, value: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == value)
    }

    /// Class string for `code`, if in range.
    pub fn class(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// The fitted vocabulary, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of fitted classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
