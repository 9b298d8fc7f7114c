//! Configuration loading utilities

use crate::schema::{ChartSinkKind, Config};
use queuetrend_common::QueueTrendError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "QUEUETREND_CONFIG_PATH";

/// Config files probed in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["queuetrend.yaml", "queuetrend.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParse { var: String, message: String },
}

impl From<ConfigError> for QueueTrendError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        Self::config_with_source(message, err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the environment and, if present, a YAML file.
    ///
    /// Order: `QUEUETREND_CONFIG_PATH`, then `queuetrend.yaml`/`queuetrend.yml`
    /// in the working directory, then built-in defaults. Environment
    /// overrides are applied on top and the result is validated.
    pub fn load() -> queuetrend_common::Result<Config> {
        let explicit = env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
        let file = explicit.or_else(|| {
            DEFAULT_CONFIG_FILES
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
        });

        let mut config = match file {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::parse_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config, |key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific file, without environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> queuetrend_common::Result<Config> {
        let config = Self::parse_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML text into a configuration; missing keys take defaults.
    pub fn parse_str(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content)
    }

    /// Apply environment variable overrides using `lookup` to read variables.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("QUEUETREND_INPUT") {
            config.input.path = PathBuf::from(path);
        }

        if let Some(cutoff) = lookup("QUEUETREND_CUTOFF") {
            config.analysis.cutoff = cutoff.trim().to_string();
        }

        if let Some(sink) = lookup("QUEUETREND_CHART_SINK") {
            config.chart.sink = sink
                .parse::<ChartSinkKind>()
                .map_err(|message| ConfigError::EnvParse {
                    var: "QUEUETREND_CHART_SINK".to_string(),
                    message,
                })?;
        }

        if let Some(output) = lookup("QUEUETREND_CHART_OUTPUT") {
            config.chart.output_path = PathBuf::from(output);
        }

        if let Some(level) = lookup("QUEUETREND_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ConfigLoader::parse_str("").unwrap(), Config::default());
        assert_eq!(ConfigLoader::parse_str("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = ConfigLoader::parse_str(
            "input:\n  path: data/visits.csv\nchart:\n  sink: svg\n  output_path: out/trend.svg\n",
        )
        .unwrap();

        assert_eq!(config.input.path, PathBuf::from("data/visits.csv"));
        assert_eq!(config.input.delimiter, ',');
        assert_eq!(config.chart.sink, ChartSinkKind::Svg);
        assert_eq!(config.chart.output_path, PathBuf::from("out/trend.svg"));
        assert_eq!(config.chart.width, 1200);
        assert_eq!(config.analysis.cutoff, "21:00");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ConfigLoader::parse_str("input: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let lookup = env_of(&[
            ("QUEUETREND_INPUT", "other.csv"),
            ("QUEUETREND_CUTOFF", " 20:30 "),
            ("QUEUETREND_CHART_SINK", "None"),
            ("QUEUETREND_LOG_LEVEL", "debug"),
        ]);

        ConfigLoader::apply_env_overrides(&mut config, lookup).unwrap();

        assert_eq!(config.input.path, PathBuf::from("other.csv"));
        assert_eq!(config.analysis.cutoff, "20:30");
        assert_eq!(config.chart.sink, ChartSinkKind::None);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_override_bad_sink() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_env_overrides(
            &mut config,
            env_of(&[("QUEUETREND_CHART_SINK", "jpeg")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("QUEUETREND_CHART_SINK"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ConfigLoader::load_from_file("/definitely/not/here.yaml").unwrap_err();
        assert_eq!(err.stage(), queuetrend_common::Stage::Config);
    }
}
