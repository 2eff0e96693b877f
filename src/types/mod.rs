//! Type definitions for the prediction pipeline

pub mod report;
pub mod request;

pub use report::{HealthStage, PredictionReport, SummaryRow};
pub use request::{BucketedRequest, ContinuousRequest};
