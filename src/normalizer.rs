//! Feature normalization from raw request values.
//!
//! Each variant turns its request into a name→value map using the
//! training pipeline's exact column spellings, whitespace included, then
//! assembles the map against the artifact schema. Column order comes
//! from the schema alone; this module never hardcodes it.

use std::collections::HashMap;

use crate::buckets::{
    self, ADULT_MORTALITY_BUCKETS, ALCOHOL_BUCKETS, EXPENDITURE_BUCKETS,
};
use crate::encoder::LabelEncoder;
use crate::model::artifact::DEFAULT_STATUS;
use crate::schema::{self, FeatureSchema, FeatureVector};
use crate::types::request::{BucketedRequest, ContinuousRequest};
use crate::{PipelineError, Result};

/// Encode a categorical value through a fitted encoder.
///
/// Values outside the fitted vocabulary are rejected, never defaulted.
pub fn encode_categorical(field: &str, value: &str, encoder: &LabelEncoder) -> Result<usize> {
    encoder
        .code(value)
        .ok_or_else(|| PipelineError::UnknownCategory {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Resolve the effective status for a continuous request.
///
/// An explicit status always wins; otherwise the artifact's suggestion
/// table is consulted, falling back to "Developing".
pub fn resolve_status(
    explicit: Option<&str>,
    country: &str,
    suggestions: &HashMap<String, String>,
) -> String {
    match explicit {
        Some(status) => status.to_string(),
        None => suggestions
            .get(country)
            .cloned()
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    }
}

/// Normalize a full-detail request into a model-ready vector.
///
/// Country and the already-resolved `status` are label-encoded; the
/// twelve indicators pass through as-is under their training column
/// names. Status resolution happens in the caller, once per request.
pub fn normalize_continuous(
    request: &ContinuousRequest,
    country_encoder: &LabelEncoder,
    status_encoder: &LabelEncoder,
    status: &str,
    schema: &FeatureSchema,
) -> Result<FeatureVector> {
    let country_code = encode_categorical("Country", &request.country, country_encoder)?;
    let status_code = encode_categorical("Status", status, status_encoder)?;

    let mut values = HashMap::with_capacity(schema.len());
    values.insert("Country_encoded".to_string(), country_code as f64);
    values.insert("Status_encoded".to_string(), status_code as f64);
    values.insert("Adult Mortality".to_string(), request.adult_mortality);
    values.insert("Alcohol".to_string(), request.alcohol);
    values.insert(
        "percentage expenditure".to_string(),
        request.percentage_expenditure,
    );
    values.insert(" BMI ".to_string(), request.bmi);
    values.insert("under-five deaths ".to_string(), request.under_five_deaths);
    values.insert("Total expenditure".to_string(), request.total_expenditure);
    values.insert(" HIV/AIDS".to_string(), request.hiv_aids);
    values.insert("GDP".to_string(), request.gdp);
    values.insert(
        "Income composition of resources".to_string(),
        request.income_composition,
    );
    values.insert("Schooling".to_string(), request.schooling);
    values.insert("Immunization".to_string(), request.immunization);
    values.insert("thinness_mean".to_string(), request.thinness_mean);

    schema::assemble(&values, schema)
}

/// Normalize a survey-style request into a model-ready vector.
///
/// Status is label-encoded, the three bucketed indicators go through
/// their lookup tables, and the nine continuous indicators pass through
/// as-is. There is no country feature in this variant.
pub fn normalize_bucketed(
    request: &BucketedRequest,
    status_encoder: &LabelEncoder,
    schema: &FeatureSchema,
) -> Result<FeatureVector> {
    let status_code = encode_categorical("Status", &request.status, status_encoder)?;
    let adult_mortality = buckets::map_bucket(&request.adult_mortality, &ADULT_MORTALITY_BUCKETS)?;
    let alcohol = buckets::map_bucket(&request.alcohol, &ALCOHOL_BUCKETS)?;
    let expenditure = buckets::map_bucket(&request.percentage_expenditure, &EXPENDITURE_BUCKETS)?;

    let mut values = HashMap::with_capacity(schema.len());
    values.insert("Status_encoded".to_string(), status_code as f64);
    values.insert("Adult Mortality".to_string(), adult_mortality);
    values.insert("Alcohol".to_string(), alcohol);
    values.insert("percentage expenditure".to_string(), expenditure);
    values.insert(" BMI ".to_string(), request.bmi);
    values.insert("under-five deaths ".to_string(), request.under_five_deaths);
    values.insert("Total expenditure".to_string(), request.total_expenditure);
    values.insert(" HIV/AIDS".to_string(), request.hiv_aids);
    values.insert("GDP".to_string(), request.gdp);
    values.insert(
        "Income composition of resources".to_string(),
        request.income_composition,
    );
    values.insert("Schooling".to_string(), request.schooling);
    values.insert("Immunization".to_string(), request.immunization);
    values.insert("thinness_mean".to_string(), request.thinness_mean);

    schema::assemble(&values, schema)
}
