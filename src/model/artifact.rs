//! Trained artifact bundle loading.
//!
//! The bundle is the unit of deployment produced by the training
//! pipeline: the fitted model, the label encoders keyed by field name,
//! the authoritative column order, and an optional country→status
//! suggestion table. Everything the runtime needs to reproduce training
//! semantics travels inside it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::encoder::LabelEncoder;
use crate::model::LinearModel;
use crate::schema::FeatureSchema;
use crate::{PipelineError, Result};

/// Status assumed for countries absent from the suggestion table.
pub const DEFAULT_STATUS: &str = "Developing";

/// A serialized training bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// The trained regressor
    pub model: LinearModel,
    /// Fitted label encoders keyed by field name
    pub encoders: HashMap<String, LabelEncoder>,
    /// Authoritative ordered column list
    pub columns: FeatureSchema,
    /// Static country→status suggestion table
    #[serde(default)]
    pub country_status_map: HashMap<String, String>,
}

impl ModelArtifact {
    /// Load an artifact bundle from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;

        info!(
            path = %path.display(),
            model = %artifact.model.model_name,
            columns = artifact.columns.len(),
            encoders = artifact.encoders.len(),
            "Model artifact loaded"
        );

        Ok(artifact)
    }

    /// Fitted encoder for `field`.
    pub fn encoder(&self, field: &str) -> Result<&LabelEncoder> {
        self.encoders
            .get(field)
            .ok_or_else(|| PipelineError::MissingEncoder(field.to_string()))
    }

    /// Suggested status for `country`, falling back to "Developing".
    pub fn suggested_status(&self, country: &str) -> &str {
        self.country_status_map
            .get(country)
            .map(String::as_str)
            .unwrap_or(DEFAULT_STATUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_artifact_json() -> &'static str {
        r#"{
            "model": {
                "model_name": "survey_ols",
                "weights": [1.0, -0.5],
                "intercept": 60.0
            },
            "encoders": {
                "Status": ["Developed", "Developing"]
            },
            "columns": ["Status_encoded", "Schooling"],
            "country_status_map": {
                "Norway": "Developed"
            }
        }"#
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_artifact_json().as_bytes()).unwrap();

        let artifact = ModelArtifact::load(file.path()).unwrap();
        assert_eq!(artifact.model.model_name, "survey_ols");
        assert_eq!(artifact.columns.len(), 2);
        assert_eq!(artifact.encoder("Status").unwrap().code("Developing"), Some(1));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ModelArtifact::load("no/such/artifact.json").unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_load_malformed_bundle_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"model\": 42}").unwrap();

        let err = ModelArtifact::load(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));
    }

    #[test]
    fn test_missing_encoder_is_reported_by_field() {
        let artifact: ModelArtifact = serde_json::from_str(sample_artifact_json()).unwrap();
        let err = artifact.encoder("Country").unwrap_err();
        match err {
            PipelineError::MissingEncoder(field) => assert_eq!(field, "Country"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_suggested_status_falls_back_to_developing() {
        let artifact: ModelArtifact = serde_json::from_str(sample_artifact_json()).unwrap();
        assert_eq!(artifact.suggested_status("Norway"), "Developed");
        assert_eq!(artifact.suggested_status("Atlantis"), "Developing");
    }

    #[test]
    fn test_suggestion_table_is_optional() {
        let json = r#"{
            "model": {"weights": [0.0], "intercept": 70.0},
            "encoders": {"Status": ["Developed", "Developing"]},
            "columns": ["Status_encoded"]
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert!(artifact.country_status_map.is_empty());
        assert_eq!(artifact.suggested_status("Anywhere"), "Developing");
    }
}
