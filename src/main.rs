//! Life Expectancy Prediction Pipeline - Main Entry Point
//!
//! Reads prediction requests as JSON lines from a file or stdin, runs one
//! normalize→infer→classify pass per request, and writes outcome reports
//! to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use life_expectancy_pipeline::{
    assets::AssetCatalog, config::AppConfig, metrics::PipelineMetrics,
    pipeline::PredictionPipeline,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "life-expectancy-pipeline",
    about = "Predict life expectancy from health and socio-economic indicators"
)]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "config/config.toml")]
    config: PathBuf,

    /// Requests file, one JSON object per line; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_expectancy_pipeline=info".parse()?),
        )
        .init();

    info!("Starting Life Expectancy Prediction Pipeline");

    // Load configuration
    let config = AppConfig::load_from_path(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;
    info!("Configuration loaded successfully");
    info!(
        "Serving {:?} variant requests against artifact {}",
        config.pipeline.variant, config.artifact.path
    );

    // Initialize metrics
    let metrics = PipelineMetrics::new();

    // Initialize the pipeline from the trained artifact
    let pipeline = PredictionPipeline::from_config(&config)?;
    let catalog = AssetCatalog::new(&config.assets.images_dir);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            info!(input = %path.display(), "Reading requests from file");
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Reading requests from stdin");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    let mut processed: u64 = 0;

    for line in reader.lines() {
        let line = line.context("Failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let start_time = Instant::now();

        match pipeline.run_json(&line) {
            Ok(report) => {
                let processing_time = start_time.elapsed();
                metrics.record_prediction(
                    processing_time,
                    report.predicted_years,
                    report.stage.label(),
                );

                info!(
                    report_id = %report.report_id,
                    predicted_years = format!("{:.2}", report.predicted_years),
                    stage = %report.stage,
                    processing_time_us = processing_time.as_micros(),
                    "Prediction completed"
                );

                // A missing stage image downgrades to a notice; the
                // report itself stands.
                match catalog.resolve(&report.asset_key) {
                    Some(path) => info!(image = %path.display(), "Stage image"),
                    None => info!(asset_key = %report.asset_key, "Stage image not available"),
                }

                println!("{}", serde_json::to_string(&report)?);
            }
            Err(e) => {
                metrics.record_failure();
                error!(error = %e, "Request rejected");
            }
        }

        processed += 1;

        // Log progress every 100 requests
        if processed % 100 == 0 {
            let processing_stats = metrics.get_processing_stats();
            info!(
                processed = processed,
                throughput = format!("{:.1} req/s", metrics.get_throughput()),
                avg_latency_us = processing_stats.mean_us,
                "Processing milestone"
            );
        }
    }

    // Print final summary
    info!("Pipeline shutting down...");
    metrics.print_summary();

    Ok(())
}
