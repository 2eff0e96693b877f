//! Model artifact loading and inference

pub mod artifact;
pub mod linear;

pub use artifact::ModelArtifact;
pub use linear::LinearModel;

use crate::schema::FeatureVector;
use crate::Result;

/// The prediction capability supplied by a trained artifact.
///
/// The pipeline depends only on this contract and treats the model as
/// opaque: it never inspects weights or training provenance, it only
/// hands over an assembled feature vector and takes back a number.
pub trait Regressor: Send + Sync {
    /// Model name for logs and diagnostics.
    fn name(&self) -> &str;

    /// Predict life expectancy in years for an assembled feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<f64>;
}
