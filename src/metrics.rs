//! Performance metrics and statistics tracking for the prediction pipeline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics collector for pipeline activity
pub struct PipelineMetrics {
    /// Total prediction requests completed
    pub predictions_completed: AtomicU64,
    /// Total requests rejected before producing a report
    pub requests_failed: AtomicU64,
    /// Completed reports by health stage
    stage_counts: RwLock<HashMap<String, u64>>,
    /// Processing times (in microseconds)
    processing_times: RwLock<Vec<u64>>,
    /// Predicted years distribution, decade buckets
    years_buckets: RwLock<[u64; 10]>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl PipelineMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            predictions_completed: AtomicU64::new(0),
            requests_failed: AtomicU64::new(0),
            stage_counts: RwLock::new(HashMap::new()),
            processing_times: RwLock::new(Vec::with_capacity(1000)),
            years_buckets: RwLock::new([0; 10]),
            start_time: Instant::now(),
        }
    }

    /// Record a completed prediction
    pub fn record_prediction(&self, processing_time: Duration, predicted_years: f64, stage: &str) {
        self.predictions_completed.fetch_add(1, Ordering::Relaxed);

        // Record processing time
        if let Ok(mut times) = self.processing_times.write() {
            times.push(processing_time.as_micros() as u64);
            // Keep only last 10000 for memory efficiency
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }

        // Record predicted years bucket
        let bucket = ((predicted_years / 10.0).max(0.0) as usize).min(9);
        if let Ok(mut buckets) = self.years_buckets.write() {
            buckets[bucket] += 1;
        }

        if let Ok(mut counts) = self.stage_counts.write() {
            *counts.entry(stage.to_string()).or_insert(0) += 1;
        }
    }

    /// Record a rejected request
    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get processing time statistics
    pub fn get_processing_stats(&self) -> ProcessingStats {
        let times = self.processing_times.read().unwrap();
        if times.is_empty() {
            return ProcessingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        ProcessingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get current throughput (requests per second)
    pub fn get_throughput(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.predictions_completed.load(Ordering::Relaxed) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Get predicted years distribution
    pub fn get_years_distribution(&self) -> [u64; 10] {
        *self.years_buckets.read().unwrap()
    }

    /// Get completed reports by health stage
    pub fn get_stage_counts(&self) -> HashMap<String, u64> {
        self.stage_counts.read().unwrap().clone()
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let completed = self.predictions_completed.load(Ordering::Relaxed);
        let failed = self.requests_failed.load(Ordering::Relaxed);
        let total = completed + failed;
        let failure_rate = if total > 0 {
            (failed as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        let processing = self.get_processing_stats();
        let throughput = self.get_throughput();
        let stage_counts = self.get_stage_counts();
        let years_dist = self.get_years_distribution();

        info!("╔══════════════════════════════════════════════════════════════╗");
        info!("║        LIFE EXPECTANCY PIPELINE - METRICS SUMMARY            ║");
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!(
            "║ Predictions Completed:  {:>8}  │  Throughput: {:>6.1} req/s ║",
            completed, throughput
        );
        info!(
            "║ Requests Rejected:      {:>8}  │  Reject Rate: {:>6.1}%    ║",
            failed, failure_rate
        );
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!(
            "║ Processing Time (μs): mean={:>5} p50={:>5} p95={:>5} p99={:>5} ║",
            processing.mean_us, processing.p50_us, processing.p95_us, processing.p99_us
        );
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!("║ Reports by Health Stage:                                     ║");
        for (stage, count) in &stage_counts {
            let pct = if completed > 0 {
                (*count as f64 / completed as f64) * 100.0
            } else {
                0.0
            };
            info!("║   {:10}: {:>6} ({:>5.1}%)                                ║", stage, count, pct);
        }
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!("║ Predicted Years Distribution:                                ║");
        let total_reports: u64 = years_dist.iter().sum();
        for (i, &count) in years_dist.iter().enumerate() {
            let pct = if total_reports > 0 {
                (count as f64 / total_reports as f64) * 100.0
            } else {
                0.0
            };
            let bar_len = (pct / 2.0) as usize;
            let bar: String = "█".repeat(bar_len.min(20));
            info!(
                "║   {:>3}-{:<3}: {:>6} ({:>5.1}%) {}",
                i * 10,
                (i + 1) * 10,
                count,
                pct,
                bar
            );
        }
        info!("╚══════════════════════════════════════════════════════════════╝");
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing time statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let metrics = PipelineMetrics::new();

        metrics.record_prediction(Duration::from_micros(100), 52.0, "At Risk");
        metrics.record_prediction(Duration::from_micros(200), 73.4, "Healthy");
        metrics.record_failure();

        assert_eq!(metrics.predictions_completed.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.requests_failed.load(Ordering::Relaxed), 1);

        let stages = metrics.get_stage_counts();
        assert_eq!(stages.get("At Risk"), Some(&1));
        assert_eq!(stages.get("Healthy"), Some(&1));
    }

    #[test]
    fn test_years_distribution_buckets() {
        let metrics = PipelineMetrics::new();

        metrics.record_prediction(Duration::from_micros(50), 52.0, "At Risk");
        metrics.record_prediction(Duration::from_micros(50), 71.0, "Healthy");
        metrics.record_prediction(Duration::from_micros(50), 150.0, "Healthy");
        metrics.record_prediction(Duration::from_micros(50), -3.0, "Critical");

        let dist = metrics.get_years_distribution();
        assert_eq!(dist[5], 1); // 52 years
        assert_eq!(dist[7], 1); // 71 years
        assert_eq!(dist[9], 1); // clamped above 100
        assert_eq!(dist[0], 1); // clamped below 0
    }

    #[test]
    fn test_processing_stats_empty() {
        let metrics = PipelineMetrics::new();
        let stats = metrics.get_processing_stats();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_us, 0);
    }

    #[test]
    fn test_processing_stats_percentiles() {
        let metrics = PipelineMetrics::new();
        for us in 1..=100u64 {
            metrics.record_prediction(Duration::from_micros(us), 60.0, "Unhealthy");
        }

        let stats = metrics.get_processing_stats();
        assert_eq!(stats.count, 100);
        assert_eq!(stats.p50_us, 51);
        assert_eq!(stats.p95_us, 96);
        assert_eq!(stats.max_us, 100);
    }
}
