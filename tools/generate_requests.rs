//! Sample Request Generator
//!
//! Generates random prediction requests as JSON lines on stdout for
//! exercising the pipeline, mixing favorable and adverse health profiles.

use life_expectancy_pipeline::buckets::{
    BucketTable, ADULT_MORTALITY_BUCKETS, ALCOHOL_BUCKETS, EXPENDITURE_BUCKETS,
};
use life_expectancy_pipeline::types::request::{BucketedRequest, ContinuousRequest};
use rand::Rng;
use tracing::info;

/// Countries present in the sample artifact vocabulary
const SAMPLE_COUNTRIES: [&str; 10] = [
    "Afghanistan",
    "Albania",
    "Brazil",
    "Canada",
    "France",
    "Germany",
    "India",
    "Japan",
    "Nigeria",
    "Norway",
];

const SAMPLE_STATUSES: [&str; 2] = ["Developed", "Developing"];

/// Request generator for testing
struct RequestGenerator {
    rng: rand::rngs::ThreadRng,
}

impl RequestGenerator {
    fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    /// Generate a request with a favorable health profile
    fn generate_favorable(&mut self) -> ContinuousRequest {
        let mut request = ContinuousRequest::new(self.random_choice(&SAMPLE_COUNTRIES));
        request.schooling = self.rng.gen_range(12.0..20.0);
        request.income_composition = self.rng.gen_range(0.7..0.95);
        request.gdp = self.rng.gen_range(20000.0..80000.0);
        request.immunization = self.rng.gen_range(90.0..99.0);
        request.alcohol = self.rng.gen_range(0.0..6.0);
        request.adult_mortality = self.rng.gen_range(40.0..120.0);
        request.hiv_aids = self.rng.gen_range(0.1..0.5);
        request.bmi = self.rng.gen_range(20.0..28.0);
        request.percentage_expenditure = self.rng.gen_range(6.0..15.0);
        request.total_expenditure = self.rng.gen_range(6.0..12.0);
        request.under_five_deaths = self.rng.gen_range(2.0..15.0);
        request.thinness_mean = self.rng.gen_range(0.5..4.0);
        request
    }

    /// Generate a request with an adverse health profile
    fn generate_adverse(&mut self) -> ContinuousRequest {
        let mut request = ContinuousRequest::new(self.random_choice(&SAMPLE_COUNTRIES));
        request.schooling = self.rng.gen_range(2.0..9.0); // Little schooling
        request.income_composition = self.rng.gen_range(0.2..0.5);
        request.gdp = self.rng.gen_range(300.0..3000.0); // Low GDP
        request.immunization = self.rng.gen_range(40.0..75.0);
        request.alcohol = self.rng.gen_range(4.0..17.0);
        request.adult_mortality = self.rng.gen_range(250.0..650.0); // High mortality
        request.hiv_aids = self.rng.gen_range(2.0..20.0);
        request.bmi = self.rng.gen_range(14.0..22.0);
        request.percentage_expenditure = self.rng.gen_range(0.5..4.0);
        request.total_expenditure = self.rng.gen_range(1.0..5.0);
        request.under_five_deaths = self.rng.gen_range(60.0..250.0);
        request.thinness_mean = self.rng.gen_range(8.0..27.0);
        request
    }

    /// Generate a survey-style request with random bucket labels
    fn generate_bucketed(&mut self) -> BucketedRequest {
        let mut request = BucketedRequest::default();
        request.status = self.random_choice(&SAMPLE_STATUSES).to_string();
        request.adult_mortality = self.random_label(&ADULT_MORTALITY_BUCKETS);
        request.alcohol = self.random_label(&ALCOHOL_BUCKETS);
        request.percentage_expenditure = self.random_label(&EXPENDITURE_BUCKETS);
        request.schooling = self.rng.gen_range(2.0..20.0);
        request.income_composition = self.rng.gen_range(0.2..0.95);
        request.gdp = self.rng.gen_range(300.0..80000.0);
        request.immunization = self.rng.gen_range(40.0..99.0);
        request.hiv_aids = self.rng.gen_range(0.1..20.0);
        request.bmi = self.rng.gen_range(14.0..32.0);
        request.total_expenditure = self.rng.gen_range(1.0..12.0);
        request.under_five_deaths = self.rng.gen_range(2.0..250.0);
        request.thinness_mean = self.rng.gen_range(0.5..27.0);
        request
    }

    fn random_choice<'a>(&mut self, choices: &[&'a str]) -> &'a str {
        choices[self.rng.gen_range(0..choices.len())]
    }

    fn random_label(&mut self, table: &BucketTable) -> String {
        let labels: Vec<&str> = table.labels().collect();
        labels[self.rng.gen_range(0..labels.len())].to_string()
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("generate_requests=info".parse()?),
        )
        .init();

    info!("Starting Sample Request Generator");

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let variant = args.get(1).map(|s| s.as_str()).unwrap_or("continuous");
    let count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);
    let adverse_rate: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.3);

    info!(
        variant = %variant,
        count = count,
        adverse_rate = adverse_rate,
        "Configuration loaded"
    );

    let mut generator = RequestGenerator::new();
    let mut rng = rand::thread_rng();

    let mut favorable_count = 0;
    let mut adverse_count = 0;

    for _ in 0..count {
        let json = match variant {
            "bucketed" => serde_json::to_string(&generator.generate_bucketed())?,
            _ => {
                if rng.gen_bool(adverse_rate) {
                    adverse_count += 1;
                    serde_json::to_string(&generator.generate_adverse())?
                } else {
                    favorable_count += 1;
                    serde_json::to_string(&generator.generate_favorable())?
                }
            }
        };
        println!("{json}");
    }

    if variant == "bucketed" {
        info!("Completed! Generated {} bucketed requests", count);
    } else {
        info!(
            "Completed! Generated {} requests ({} favorable, {} adverse)",
            count, favorable_count, adverse_count
        );
    }

    Ok(())
}
