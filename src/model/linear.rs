//! Linear regression backend restored from serialized artifacts.

use serde::{Deserialize, Serialize};

use crate::model::Regressor;
use crate::schema::FeatureVector;
use crate::{PipelineError, Result};

/// A linear regressor with one weight per schema column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Model name
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Per-feature weights, in schema column order
    pub weights: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
}

fn default_model_name() -> String {
    "linear_regression".to_string()
}

impl LinearModel {
    /// Create a model from weights and an intercept.
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self {
            model_name: default_model_name(),
            weights,
            intercept,
        }
    }

    /// Number of features the model expects.
    pub fn arity(&self) -> usize {
        self.weights.len()
    }
}

impl Regressor for LinearModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    /// Weighted sum of the feature values plus the intercept.
    ///
    /// The vector must match the model arity and hold only finite
    /// values; anything else is rejected before touching the weights.
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let values = features.values();

        if values.len() != self.weights.len() {
            return Err(PipelineError::Inference(format!(
                "model expects {} features, got {}",
                self.weights.len(),
                values.len()
            )));
        }

        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(PipelineError::Inference(format!(
                "non-finite value for feature {:?}",
                features.columns()[idx]
            )));
        }

        let weighted: f64 = self.weights.iter().zip(values).map(|(w, x)| w * x).sum();
        Ok(weighted + self.intercept)
    }
}
