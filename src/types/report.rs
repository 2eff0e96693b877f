//! Outcome report type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PipelineVariant;

/// Health stage band for a predicted life expectancy.
///
/// The four bands partition the whole prediction range; each boundary
/// value belongs to the band below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStage {
    #[serde(rename = "Critical")]
    Critical,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
    #[serde(rename = "Healthy")]
    Healthy,
}

impl HealthStage {
    /// Band a predicted life expectancy, in years.
    ///
    /// Callers must reject non-finite predictions before classifying;
    /// every finite value lands in exactly one band.
    pub fn from_prediction(years: f64) -> Self {
        if years <= 45.0 {
            HealthStage::Critical
        } else if years <= 55.0 {
            HealthStage::AtRisk
        } else if years <= 70.0 {
            HealthStage::Unhealthy
        } else {
            HealthStage::Healthy
        }
    }

    /// Display label for the stage.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStage::Critical => "Critical",
            HealthStage::AtRisk => "At Risk",
            HealthStage::Unhealthy => "Unhealthy",
            HealthStage::Healthy => "Healthy",
        }
    }

    /// Key of the illustrative image asset for the stage.
    pub fn asset_key(&self) -> &'static str {
        match self {
            HealthStage::Critical => "critical_image",
            HealthStage::AtRisk => "at_risk_image",
            HealthStage::Unhealthy => "unhealthy_image",
            HealthStage::Healthy => "healthy_image",
        }
    }
}

impl std::fmt::Display for HealthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the input selection summary echoed back in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Factor name as shown to the user
    pub factor: String,
    /// The value or label the user selected
    pub selection: String,
}

impl SummaryRow {
    /// Create a summary row.
    pub fn new(factor: impl Into<String>, selection: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            selection: selection.into(),
        }
    }
}

/// Outcome report produced for each completed prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Unique report identifier
    pub report_id: String,
    /// Input variant that produced the prediction
    pub variant: PipelineVariant,
    /// Predicted life expectancy in years
    pub predicted_years: f64,
    /// Health stage band for the prediction
    pub stage: HealthStage,
    /// Key of the stage's illustrative image asset
    pub asset_key: String,
    /// Input selection summary
    pub summary: Vec<SummaryRow>,
    /// Report generation timestamp
    pub timestamp: DateTime<Utc>,
}

impl PredictionReport {
    /// Create a report for a prediction, banding it into a health stage.
    pub fn new(variant: PipelineVariant, predicted_years: f64) -> Self {
        let stage = HealthStage::from_prediction(predicted_years);

        Self {
            report_id: Uuid::new_v4().to_string(),
            variant,
            predicted_years,
            stage,
            asset_key: stage.asset_key().to_string(),
            summary: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Attach the input selection summary.
    pub fn with_summary(mut self, summary: Vec<SummaryRow>) -> Self {
        self.summary = summary;
        self
    }
}
