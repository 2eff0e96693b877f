//! Prediction request type definitions for the two input variants.
//!
//! Serde aliases accept the training dataset's raw column spellings
//! (leading/trailing spaces included) alongside the snake_case field
//! names, so requests exported straight from the dataset parse as-is.

use serde::{Deserialize, Serialize};

use crate::types::report::SummaryRow;

/// Full-detail request: every indicator arrives as a continuous value
/// and the geographic context is a country plus, optionally, its status.
///
/// Field defaults let a sparse request still assemble a complete
/// feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinuousRequest {
    /// Country name, must belong to the artifact's fitted vocabulary
    #[serde(alias = "Country")]
    pub country: String,

    /// Country status; looked up from the artifact's suggestion table
    /// when omitted
    #[serde(default, alias = "Status")]
    pub status: Option<String>,

    /// Adult mortality, deaths per 1000 adults aged 15-60
    #[serde(default = "default_adult_mortality", alias = "Adult Mortality")]
    pub adult_mortality: f64,

    /// Alcohol consumption, litres of pure alcohol per capita
    #[serde(default = "default_alcohol", alias = "Alcohol")]
    pub alcohol: f64,

    /// Health expenditure as a share of GDP
    #[serde(
        default = "default_percentage_expenditure",
        alias = "percentage expenditure"
    )]
    pub percentage_expenditure: f64,

    /// Average body mass index
    #[serde(default = "default_bmi", alias = " BMI ", alias = "BMI")]
    pub bmi: f64,

    /// Under-five deaths per 1000 live births
    #[serde(
        default = "default_under_five_deaths",
        alias = "under-five deaths ",
        alias = "under-five deaths"
    )]
    pub under_five_deaths: f64,

    /// Government health spending as a share of total spending
    #[serde(default = "default_total_expenditure", alias = "Total expenditure")]
    pub total_expenditure: f64,

    /// HIV/AIDS deaths per 1000 live births
    #[serde(default = "default_hiv_aids", alias = " HIV/AIDS", alias = "HIV/AIDS")]
    pub hiv_aids: f64,

    /// GDP per capita in USD
    #[serde(default = "default_gdp", alias = "GDP")]
    pub gdp: f64,

    /// Income composition of resources index, 0 to 1
    #[serde(
        default = "default_income_composition",
        alias = "Income composition of resources"
    )]
    pub income_composition: f64,

    /// Average years of schooling
    #[serde(default = "default_schooling", alias = "Schooling")]
    pub schooling: f64,

    /// Combined immunization coverage index, percent
    #[serde(default = "default_immunization", alias = "Immunization")]
    pub immunization: f64,

    /// Mean thinness prevalence, ages 5-19
    #[serde(default = "default_thinness_mean")]
    pub thinness_mean: f64,
}

fn default_adult_mortality() -> f64 {
    150.0
}

fn default_alcohol() -> f64 {
    4.0
}

fn default_percentage_expenditure() -> f64 {
    5.0
}

fn default_bmi() -> f64 {
    25.0
}

fn default_under_five_deaths() -> f64 {
    42.0
}

fn default_total_expenditure() -> f64 {
    6.0
}

fn default_hiv_aids() -> f64 {
    0.1
}

fn default_gdp() -> f64 {
    5000.0
}

fn default_income_composition() -> f64 {
    0.6
}

fn default_schooling() -> f64 {
    12.0
}

fn default_immunization() -> f64 {
    95.0
}

fn default_thinness_mean() -> f64 {
    5.0
}

impl ContinuousRequest {
    /// Create a request for `country` with every indicator at its default.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            status: None,
            adult_mortality: default_adult_mortality(),
            alcohol: default_alcohol(),
            percentage_expenditure: default_percentage_expenditure(),
            bmi: default_bmi(),
            under_five_deaths: default_under_five_deaths(),
            total_expenditure: default_total_expenditure(),
            hiv_aids: default_hiv_aids(),
            gdp: default_gdp(),
            income_composition: default_income_composition(),
            schooling: default_schooling(),
            immunization: default_immunization(),
            thinness_mean: default_thinness_mean(),
        }
    }

    /// Input selection summary, with `status` as resolved by the pipeline.
    pub fn summary_rows(&self, status: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Country", self.country.clone()),
            SummaryRow::new("Status", status),
            SummaryRow::new("Adult Mortality", self.adult_mortality.to_string()),
            SummaryRow::new("Alcohol", format!("{} L", self.alcohol)),
            SummaryRow::new(
                "Health Expenditure (%)",
                format!("{}%", self.percentage_expenditure),
            ),
            SummaryRow::new("Average Body Mass", self.bmi.to_string()),
            SummaryRow::new("Under-Five Deaths", self.under_five_deaths.to_string()),
            SummaryRow::new("Government Health Spending", self.total_expenditure.to_string()),
            SummaryRow::new("HIV/AIDS Deaths", self.hiv_aids.to_string()),
            SummaryRow::new("GDP per Capita", format_usd(self.gdp)),
            SummaryRow::new("Income Composition", self.income_composition.to_string()),
            SummaryRow::new("Schooling", format!("{} yrs", self.schooling)),
            SummaryRow::new("Immunization Index", format!("{}%", self.immunization)),
            SummaryRow::new("Thinness Mean", self.thinness_mean.to_string()),
        ]
    }
}

/// Survey-style request: three indicators arrive as coarse bucket labels
/// and the geographic context is a bare status with no country field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketedRequest {
    /// Country status
    #[serde(default = "default_status", alias = "Status")]
    pub status: String,

    /// Adult mortality bucket label
    #[serde(default = "default_mortality_bucket", alias = "Adult Mortality")]
    pub adult_mortality: String,

    /// Alcohol consumption bucket label
    #[serde(default = "default_alcohol_bucket", alias = "Alcohol")]
    pub alcohol: String,

    /// Health expenditure bucket label
    #[serde(
        default = "default_expenditure_bucket",
        alias = "percentage expenditure"
    )]
    pub percentage_expenditure: String,

    /// Average body mass index
    #[serde(default = "default_bmi", alias = " BMI ", alias = "BMI")]
    pub bmi: f64,

    /// Under-five deaths per 1000 live births
    #[serde(
        default = "default_under_five_deaths",
        alias = "under-five deaths ",
        alias = "under-five deaths"
    )]
    pub under_five_deaths: f64,

    /// Government health spending as a share of total spending
    #[serde(default = "default_total_expenditure", alias = "Total expenditure")]
    pub total_expenditure: f64,

    /// HIV/AIDS deaths per 1000 live births
    #[serde(default = "default_hiv_aids", alias = " HIV/AIDS", alias = "HIV/AIDS")]
    pub hiv_aids: f64,

    /// GDP per capita in USD
    #[serde(default = "default_gdp", alias = "GDP")]
    pub gdp: f64,

    /// Income composition of resources index, 0 to 1
    #[serde(
        default = "default_income_composition",
        alias = "Income composition of resources"
    )]
    pub income_composition: f64,

    /// Average years of schooling
    #[serde(default = "default_schooling", alias = "Schooling")]
    pub schooling: f64,

    /// Combined immunization coverage index, percent
    #[serde(default = "default_immunization", alias = "Immunization")]
    pub immunization: f64,

    /// Mean thinness prevalence, ages 5-19
    #[serde(default = "default_thinness_mean")]
    pub thinness_mean: f64,
}

fn default_status() -> String {
    "Developing".to_string()
}

fn default_mortality_bucket() -> String {
    "Medium (150-250)".to_string()
}

fn default_alcohol_bucket() -> String {
    "Moderate (2-5)".to_string()
}

fn default_expenditure_bucket() -> String {
    "Medium (5-10%)".to_string()
}

impl Default for BucketedRequest {
    fn default() -> Self {
        Self {
            status: default_status(),
            adult_mortality: default_mortality_bucket(),
            alcohol: default_alcohol_bucket(),
            percentage_expenditure: default_expenditure_bucket(),
            bmi: default_bmi(),
            under_five_deaths: default_under_five_deaths(),
            total_expenditure: default_total_expenditure(),
            hiv_aids: default_hiv_aids(),
            gdp: default_gdp(),
            income_composition: default_income_composition(),
            schooling: default_schooling(),
            immunization: default_immunization(),
            thinness_mean: default_thinness_mean(),
        }
    }
}

impl BucketedRequest {
    /// Input selection summary; bucket labels are echoed verbatim.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Status", self.status.clone()),
            SummaryRow::new("Adult Mortality", self.adult_mortality.clone()),
            SummaryRow::new("Alcohol", self.alcohol.clone()),
            SummaryRow::new("Health Expenditure (%)", self.percentage_expenditure.clone()),
            SummaryRow::new("Average Body Mass", self.bmi.to_string()),
            SummaryRow::new("Under-Five Deaths", self.under_five_deaths.to_string()),
            SummaryRow::new("Government Health Spending", self.total_expenditure.to_string()),
            SummaryRow::new("HIV/AIDS Deaths", self.hiv_aids.to_string()),
            SummaryRow::new("GDP per Capita", format_usd(self.gdp)),
            SummaryRow::new("Income Composition", self.income_composition.to_string()),
            SummaryRow::new("Schooling", format!("{} yrs", self.schooling)),
            SummaryRow::new("Immunization Index", format!("{}%", self.immunization)),
            SummaryRow::new("Thinness Mean", self.thinness_mean.to_string()),
        ]
    }
}

/// Format a dollar amount with comma thousands grouping, e.g. `$5,000.00`.
fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${grouped}.{fraction:02}")
    } else {
        format!("${grouped}.{fraction:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_defaults_fill_sparse_request() {
        let request: ContinuousRequest = serde_json::from_str(r#"{"country": "Norway"}"#).unwrap();

        assert_eq!(request.country, "Norway");
        assert_eq!(request.status, None);
        assert_eq!(request.schooling, 12.0);
        assert_eq!(request.income_composition, 0.6);
        assert_eq!(request.gdp, 5000.0);
        assert_eq!(request.immunization, 95.0);
        assert_eq!(request.alcohol, 4.0);
        assert_eq!(request.adult_mortality, 150.0);
        assert_eq!(request.hiv_aids, 0.1);
        assert_eq!(request.bmi, 25.0);
        assert_eq!(request.percentage_expenditure, 5.0);
        assert_eq!(request.total_expenditure, 6.0);
        assert_eq!(request.under_five_deaths, 42.0);
        assert_eq!(request.thinness_mean, 5.0);
    }

    #[test]
    fn test_continuous_accepts_dataset_column_spellings() {
        let json = r#"{
            "Country": "Japan",
            "Status": "Developed",
            "Adult Mortality": 60.0,
            " BMI ": 22.5,
            "under-five deaths ": 3.0,
            " HIV/AIDS": 0.1,
            "Income composition of resources": 0.9,
            "percentage expenditure": 10.8
        }"#;
        let request: ContinuousRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.country, "Japan");
        assert_eq!(request.status.as_deref(), Some("Developed"));
        assert_eq!(request.adult_mortality, 60.0);
        assert_eq!(request.bmi, 22.5);
        assert_eq!(request.under_five_deaths, 3.0);
        assert_eq!(request.income_composition, 0.9);
        assert_eq!(request.percentage_expenditure, 10.8);
    }

    #[test]
    fn test_continuous_requires_country() {
        let result = serde_json::from_str::<ContinuousRequest>(r#"{"schooling": 10.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_continuous_summary_lists_every_input() {
        let request = ContinuousRequest::new("Brazil");
        let rows = request.summary_rows("Developing");

        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0], SummaryRow::new("Country", "Brazil"));
        assert_eq!(rows[1], SummaryRow::new("Status", "Developing"));
        assert_eq!(rows[3], SummaryRow::new("Alcohol", "4 L"));
        assert_eq!(rows[4], SummaryRow::new("Health Expenditure (%)", "5%"));
        assert_eq!(rows[7], SummaryRow::new("Government Health Spending", "6"));
        assert_eq!(rows[9], SummaryRow::new("GDP per Capita", "$5,000.00"));
        assert_eq!(rows[11], SummaryRow::new("Schooling", "12 yrs"));
        assert_eq!(rows[12], SummaryRow::new("Immunization Index", "95%"));
        assert_eq!(rows[13], SummaryRow::new("Thinness Mean", "5"));
    }

    #[test]
    fn test_bucketed_defaults_to_middle_buckets() {
        let request: BucketedRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.status, "Developing");
        assert_eq!(request.adult_mortality, "Medium (150-250)");
        assert_eq!(request.alcohol, "Moderate (2-5)");
        assert_eq!(request.percentage_expenditure, "Medium (5-10%)");
        assert_eq!(request.gdp, 5000.0);
    }

    #[test]
    fn test_bucketed_summary_has_no_country_row() {
        let request = BucketedRequest::default();
        let rows = request.summary_rows();

        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0], SummaryRow::new("Status", "Developing"));
        assert!(rows.iter().all(|row| row.factor != "Country"));
        assert_eq!(rows[1].selection, "Medium (150-250)");
        assert_eq!(rows[2], SummaryRow::new("Alcohol", "Moderate (2-5)"));
        assert_eq!(rows[6], SummaryRow::new("Government Health Spending", "6"));
    }

    #[test]
    fn test_request_serialization_round_trip() {
        let mut request = ContinuousRequest::new("France");
        request.status = Some("Developed".to_string());
        request.gdp = 38000.0;

        let json = serde_json::to_string(&request).unwrap();
        let parsed: ContinuousRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.country, "France");
        assert_eq!(parsed.status.as_deref(), Some("Developed"));
        assert_eq!(parsed.gdp, 38000.0);
    }

    #[test]
    fn test_format_usd_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(950.5), "$950.50");
        assert_eq!(format_usd(5000.0), "$5,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }
}
