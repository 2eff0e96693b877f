//! Configuration management for the prediction pipeline

use anyhow::{Context, Result};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input variant a deployment serves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PipelineVariant {
    /// Every indicator is a continuous value; country and status are
    /// label-encoded
    #[default]
    Continuous,
    /// Mortality, alcohol and expenditure arrive as bucket labels;
    /// status only is label-encoded
    Bucketed,
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub artifact: ArtifactConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    pub logging: LoggingConfig,
}

/// Model artifact configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactConfig {
    /// Path to the serialized artifact bundle (JSON)
    pub path: String,
}

/// Pipeline configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PipelineConfig {
    /// Input variant: "continuous" or "bucketed"
    #[serde(default)]
    pub variant: PipelineVariant,
}

/// Display asset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Directory containing the health stage images
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

fn default_images_dir() -> String {
    "images".to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact: ArtifactConfig {
                path: "artifacts/life_expectancy_full.json".to_string(),
            },
            pipeline: PipelineConfig {
                variant: PipelineVariant::Continuous,
            },
            assets: AssetConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.artifact.path, "artifacts/life_expectancy_full.json");
        assert_eq!(config.pipeline.variant, PipelineVariant::Continuous);
        assert_eq!(config.assets.images_dir, "images");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_path_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[artifact]
path = "artifacts/life_expectancy_survey.json"

[pipeline]
variant = "bucketed"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.artifact.path, "artifacts/life_expectancy_survey.json");
        assert_eq!(config.pipeline.variant, PipelineVariant::Bucketed);
        // No [assets] section: the default directory applies.
        assert_eq!(config.assets.images_dir, "images");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_variant_parses_lowercase() {
        let variant: PipelineVariant = serde_json::from_str("\"bucketed\"").unwrap();
        assert_eq!(variant, PipelineVariant::Bucketed);
        assert_eq!(
            serde_json::to_string(&PipelineVariant::Continuous).unwrap(),
            "\"continuous\""
        );
    }

    #[test]
    fn test_variant_defaults_to_continuous() {
        assert_eq!(PipelineVariant::default(), PipelineVariant::Continuous);
        assert_eq!(PipelineConfig::default().variant, PipelineVariant::Continuous);
    }
}
