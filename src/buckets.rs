//! Bucket lookup tables for the survey-style coarse inputs.
//!
//! The survey variant collects three indicators as qualitative bucket
//! labels rather than numbers. Each label maps to a fixed proxy value on
//! the indicator's continuous scale; the tables are fixed at build time
//! and never derived from data.

use crate::{PipelineError, Result};

/// A closed label→proxy-value table for one bucketed feature.
#[derive(Debug, Clone, Copy)]
pub struct BucketTable {
    /// Feature name used in error reports.
    pub feature: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl BucketTable {
    /// Bucket labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// Number of buckets in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no buckets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Adult mortality, deaths per 1000 adults aged 15-60.
pub const ADULT_MORTALITY_BUCKETS: BucketTable = BucketTable {
    feature: "Adult Mortality",
    entries: &[
        ("Very Low (<50)", 25.0),
        ("Low (<150)", 100.0),
        ("Medium (150-250)", 200.0),
        ("High (>250)", 300.0),
    ],
};

/// Alcohol consumption, litres of pure alcohol per capita.
pub const ALCOHOL_BUCKETS: BucketTable = BucketTable {
    feature: "Alcohol",
    entries: &[
        ("None (0)", 0.0),
        ("Light (<2)", 1.0),
        ("Moderate (2-5)", 3.0),
        ("Heavy (>5)", 8.0),
    ],
};

/// Health expenditure as a share of GDP.
pub const EXPENDITURE_BUCKETS: BucketTable = BucketTable {
    feature: "percentage expenditure",
    entries: &[
        ("Low (<5%)", 2.0),
        ("Medium (5-10%)", 7.0),
        ("High (10-20%)", 15.0),
        ("Very High (>20%)", 25.0),
    ],
};

/// Translate a bucket label into its numeric proxy value.
///
/// Labels are matched exactly; unknown labels are rejected, never
/// defaulted.
pub fn map_bucket(label: &str, table: &BucketTable) -> Result<f64> {
    table
        .entries
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, value)| *value)
        .ok_or_else(|| PipelineError::UnknownBucket {
            feature: table.feature.to_string(),
            label: label.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adult_mortality_proxy_values() {
        assert_eq!(
            map_bucket("Very Low (<50)", &ADULT_MORTALITY_BUCKETS).unwrap(),
            25.0
        );
        assert_eq!(
            map_bucket("Low (<150)", &ADULT_MORTALITY_BUCKETS).unwrap(),
            100.0
        );
        assert_eq!(
            map_bucket("Medium (150-250)", &ADULT_MORTALITY_BUCKETS).unwrap(),
            200.0
        );
        assert_eq!(
            map_bucket("High (>250)", &ADULT_MORTALITY_BUCKETS).unwrap(),
            300.0
        );
    }

    #[test]
    fn test_alcohol_proxy_values() {
        assert_eq!(map_bucket("None (0)", &ALCOHOL_BUCKETS).unwrap(), 0.0);
        assert_eq!(map_bucket("Light (<2)", &ALCOHOL_BUCKETS).unwrap(), 1.0);
        assert_eq!(map_bucket("Moderate (2-5)", &ALCOHOL_BUCKETS).unwrap(), 3.0);
        assert_eq!(map_bucket("Heavy (>5)", &ALCOHOL_BUCKETS).unwrap(), 8.0);
    }

    #[test]
    fn test_expenditure_proxy_values() {
        assert_eq!(map_bucket("Low (<5%)", &EXPENDITURE_BUCKETS).unwrap(), 2.0);
        assert_eq!(
            map_bucket("Medium (5-10%)", &EXPENDITURE_BUCKETS).unwrap(),
            7.0
        );
        assert_eq!(
            map_bucket("High (10-20%)", &EXPENDITURE_BUCKETS).unwrap(),
            15.0
        );
        assert_eq!(
            map_bucket("Very High (>20%)", &EXPENDITURE_BUCKETS).unwrap(),
            25.0
        );
    }

    #[test]
    fn test_each_table_offers_four_buckets() {
        assert_eq!(ADULT_MORTALITY_BUCKETS.len(), 4);
        assert_eq!(ALCOHOL_BUCKETS.len(), 4);
        assert_eq!(EXPENDITURE_BUCKETS.len(), 4);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = map_bucket("Extreme (>500)", &ADULT_MORTALITY_BUCKETS).unwrap_err();
        match err {
            PipelineError::UnknownBucket { feature, label } => {
                assert_eq!(feature, "Adult Mortality");
                assert_eq!(label, "Extreme (>500)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_label_matching_is_exact() {
        assert!(map_bucket("Low (<150) ", &ADULT_MORTALITY_BUCKETS).is_err());
        assert!(map_bucket("low (<150)", &ADULT_MORTALITY_BUCKETS).is_err());
        assert!(map_bucket("Low", &ADULT_MORTALITY_BUCKETS).is_err());
    }

    #[test]
    fn test_labels_iterate_in_display_order() {
        let labels: Vec<&str> = ALCOHOL_BUCKETS.labels().collect();
        assert_eq!(
            labels,
            vec!["None (0)", "Light (<2)", "Moderate (2-5)", "Heavy (>5)"]
        );
    }
}
