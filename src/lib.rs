//! Life Expectancy Prediction Pipeline Library
//!
//! Normalizes raw health and socio-economic indicators into the exact
//! feature vector a pre-trained regression artifact was fitted on, runs
//! the model, and bands the predicted years into a health stage report.

pub mod assets;
pub mod buckets;
pub mod config;
pub mod encoder;
pub mod metrics;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod schema;
pub mod types;

pub use assets::AssetCatalog;
pub use config::{AppConfig, PipelineVariant};
pub use encoder::LabelEncoder;
pub use model::{LinearModel, ModelArtifact, Regressor};
pub use pipeline::PredictionPipeline;
pub use schema::{FeatureSchema, FeatureVector};
pub use types::{
    report::{HealthStage, PredictionReport},
    request::{BucketedRequest, ContinuousRequest},
};

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors surfaced by the prediction pipeline.
///
/// Input problems are never defaulted away; each variant names the
/// offending field or label.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A categorical value outside the fitted vocabulary
    #[error("unknown {field} value {value:?}: not in the fitted vocabulary")]
    UnknownCategory { field: String, value: String },

    /// A bucket label outside the feature's lookup table
    #[error("unknown {feature} bucket label {label:?}")]
    UnknownBucket { feature: String, label: String },

    /// Normalized features disagree with the artifact schema
    #[error("features do not match the model schema (missing: {missing:?}, unexpected: {unexpected:?})")]
    SchemaMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// The model rejected the assembled vector or misfired
    #[error("inference failed: {0}")]
    Inference(String),

    /// The artifact bundle lacks an encoder the variant needs
    #[error("artifact has no fitted encoder for {0:?}")]
    MissingEncoder(String),

    /// Artifact or request I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in an artifact or request
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
