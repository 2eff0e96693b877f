//! Feature schema and vector assembly for model input.
//!
//! The trained artifact dictates the exact set and order of feature
//! columns; normalization must reproduce that order exactly. The schema
//! is a runtime value supplied by the artifact, never a constant in the
//! input surface.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{PipelineError, Result};

/// Authoritative ordered column list fitted at training time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Create a schema from an ordered column list.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Column names in model order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of features the model expects.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema lists no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether `name` is one of the schema columns.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

/// A single-row feature vector ordered exactly per its schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Feature values in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Value for a named feature, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i])
    }

    /// Number of features in the vector.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector holds no features.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Assemble a name→value map into a vector ordered per `schema`.
///
/// The schema is strict in both directions: a schema column absent from
/// `values`, or a value name absent from the schema, fails with
/// `SchemaMismatch`. Nothing is defaulted here.
pub fn assemble(values: &HashMap<String, f64>, schema: &FeatureSchema) -> Result<FeatureVector> {
    let missing: Vec<String> = schema
        .columns()
        .iter()
        .filter(|c| !values.contains_key(*c))
        .cloned()
        .collect();

    let mut unexpected: Vec<String> = values
        .keys()
        .filter(|k| !schema.contains(k))
        .cloned()
        .collect();
    unexpected.sort();

    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(PipelineError::SchemaMismatch {
            missing,
            unexpected,
        });
    }

    let ordered = schema.columns().iter().map(|c| values[c]).collect();

    Ok(FeatureVector {
        columns: schema.columns().to_vec(),
        values: ordered,
    })
}
