//! Prediction pipeline orchestration: normalize, infer, classify.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{AppConfig, PipelineVariant};
use crate::encoder::LabelEncoder;
use crate::model::{ModelArtifact, Regressor};
use crate::normalizer;
use crate::schema::{FeatureSchema, FeatureVector};
use crate::types::report::{PredictionReport, SummaryRow};
use crate::types::request::{BucketedRequest, ContinuousRequest};
use crate::{PipelineError, Result};

/// One-pass prediction pipeline over an immutable trained artifact.
///
/// Built once at startup and read-only afterwards. Each run is a full
/// normalize→infer→classify pass that either completes with a report or
/// fails without side effects; there is no partial outcome.
pub struct PredictionPipeline {
    model: Box<dyn Regressor>,
    encoders: HashMap<String, LabelEncoder>,
    schema: FeatureSchema,
    status_suggestions: HashMap<String, String>,
    variant: PipelineVariant,
}

impl PredictionPipeline {
    /// Assemble a pipeline from its parts.
    ///
    /// Fails at construction when the encoders the variant needs are
    /// absent, rather than on the first request.
    pub fn new(
        variant: PipelineVariant,
        model: Box<dyn Regressor>,
        encoders: HashMap<String, LabelEncoder>,
        schema: FeatureSchema,
        status_suggestions: HashMap<String, String>,
    ) -> Result<Self> {
        let required: &[&str] = match variant {
            PipelineVariant::Continuous => &["Country", "Status"],
            PipelineVariant::Bucketed => &["Status"],
        };
        for field in required {
            if !encoders.contains_key(*field) {
                return Err(PipelineError::MissingEncoder(field.to_string()));
            }
        }

        Ok(Self {
            model,
            encoders,
            schema,
            status_suggestions,
            variant,
        })
    }

    /// Build the pipeline from a loaded artifact bundle.
    pub fn from_artifact(artifact: ModelArtifact, variant: PipelineVariant) -> Result<Self> {
        if artifact.model.arity() != artifact.columns.len() {
            return Err(PipelineError::Inference(format!(
                "model expects {} features but the schema lists {} columns",
                artifact.model.arity(),
                artifact.columns.len()
            )));
        }

        Self::new(
            variant,
            Box::new(artifact.model),
            artifact.encoders,
            artifact.columns,
            artifact.country_status_map,
        )
    }

    /// Load the artifact named by `config` and build the pipeline.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let artifact = ModelArtifact::load(Path::new(&config.artifact.path))?;
        let pipeline = Self::from_artifact(artifact, config.pipeline.variant)?;

        info!(
            variant = ?pipeline.variant,
            model = %pipeline.model.name(),
            features = pipeline.schema.len(),
            "Prediction pipeline initialized"
        );

        Ok(pipeline)
    }

    /// The input variant this pipeline serves.
    pub fn variant(&self) -> PipelineVariant {
        self.variant
    }

    /// The artifact's authoritative feature schema.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Run one pass for a full-detail request.
    pub fn run_continuous(&self, request: &ContinuousRequest) -> Result<PredictionReport> {
        let country_encoder = self.encoder("Country")?;
        let status_encoder = self.encoder("Status")?;

        // One resolution feeds both the encoded feature and the summary.
        let status = normalizer::resolve_status(
            request.status.as_deref(),
            &request.country,
            &self.status_suggestions,
        );
        let features = normalizer::normalize_continuous(
            request,
            country_encoder,
            status_encoder,
            &status,
            &self.schema,
        )?;

        self.finish(&features, request.summary_rows(&status))
    }

    /// Run one pass for a survey-style request.
    pub fn run_bucketed(&self, request: &BucketedRequest) -> Result<PredictionReport> {
        let status_encoder = self.encoder("Status")?;
        let features = normalizer::normalize_bucketed(request, status_encoder, &self.schema)?;

        self.finish(&features, request.summary_rows())
    }

    /// Parse one JSON request for the configured variant and run it.
    pub fn run_json(&self, raw: &str) -> Result<PredictionReport> {
        match self.variant {
            PipelineVariant::Continuous => {
                let request: ContinuousRequest = serde_json::from_str(raw)?;
                self.run_continuous(&request)
            }
            PipelineVariant::Bucketed => {
                let request: BucketedRequest = serde_json::from_str(raw)?;
                self.run_bucketed(&request)
            }
        }
    }

    fn encoder(&self, field: &str) -> Result<&LabelEncoder> {
        self.encoders
            .get(field)
            .ok_or_else(|| PipelineError::MissingEncoder(field.to_string()))
    }

    fn finish(
        &self,
        features: &FeatureVector,
        summary: Vec<SummaryRow>,
    ) -> Result<PredictionReport> {
        let predicted_years = self.model.predict(features)?;
        if !predicted_years.is_finite() {
            return Err(PipelineError::Inference(format!(
                "model produced a non-finite prediction: {predicted_years}"
            )));
        }

        debug!(
            model = %self.model.name(),
            predicted_years = predicted_years,
            "Model inference complete"
        );

        Ok(PredictionReport::new(self.variant, predicted_years).with_summary(summary))
    }
}
