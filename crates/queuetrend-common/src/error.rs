//! Error types and utilities for queuetrend

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for queuetrend operations
pub type Result<T> = std::result::Result<T, QueueTrendError>;

/// Pipeline stage an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading and validating configuration.
    Config,
    /// Reading and parsing the input file.
    Load,
    /// Applying the time cutoff.
    Filter,
    /// Grouping filtered records by day.
    Aggregate,
    /// Drawing the chart and handing it to a sink.
    Render,
    /// Producing the JSON report.
    Serialize,
}

impl Stage {
    /// Lowercase stage name as it appears in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Load => "load",
            Self::Filter => "filter",
            Self::Aggregate => "aggregate",
            Self::Render => "render",
            Self::Serialize => "serialize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for queuetrend operations
#[derive(Error, Debug)]
pub enum QueueTrendError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The input file is missing, unreadable, or lacks a required column
    #[error("Failed to load {}: {message}", .path.display())]
    DataLoad {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A row whose value cannot be interpreted
    #[error("Malformed row at line {line}: column '{column}' has value {value:?}: {reason}")]
    MalformedRow {
        line: u64,
        column: String,
        value: String,
        reason: String,
    },

    /// The cutoff is not a fixed-width clock time
    #[error("Invalid cutoff {cutoff:?}: expected a zero-padded HH:MM time")]
    InvalidCutoff { cutoff: String },

    /// Chart drawing or chart output errors
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QueueTrendError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data load error
    pub fn data_load(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::DataLoad {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new data load error with source
    pub fn data_load_with_source(
        path: impl AsRef<Path>,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataLoad {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new malformed row error
    pub fn malformed_row(
        line: u64,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRow {
            line,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid cutoff error
    pub fn invalid_cutoff(cutoff: impl Into<String>) -> Self {
        Self::InvalidCutoff {
            cutoff: cutoff.into(),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The pipeline stage this error belongs to.
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Config { .. } => Stage::Config,
            Self::DataLoad { .. } | Self::MalformedRow { .. } => Stage::Load,
            Self::InvalidCutoff { .. } => Stage::Filter,
            Self::Render { .. } => Stage::Render,
            Self::Serialization(_) | Self::Io(_) => Stage::Serialize,
        }
    }

    /// Check if this is a data loading error
    pub const fn is_load_error(&self) -> bool {
        matches!(self.stage(), Stage::Load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = QueueTrendError::config("missing input path");
        assert!(matches!(err, QueueTrendError::Config { .. }));
        assert_eq!(err.to_string(), "Configuration error: missing input path");

        let err = QueueTrendError::data_load("visits.csv", "missing column 'Time'");
        assert_eq!(
            err.to_string(),
            "Failed to load visits.csv: missing column 'Time'"
        );
    }

    #[test]
    fn test_malformed_row_message() {
        let err = QueueTrendError::malformed_row(7, "Queue_Length", "abc", "not a number");
        assert_eq!(
            err.to_string(),
            "Malformed row at line 7: column 'Queue_Length' has value \"abc\": not a number"
        );
    }

    #[test]
    fn test_stages() {
        assert_eq!(QueueTrendError::config("x").stage(), Stage::Config);
        assert_eq!(QueueTrendError::data_load("a.csv", "x").stage(), Stage::Load);
        assert_eq!(
            QueueTrendError::malformed_row(2, "Time", "x", "y").stage(),
            Stage::Load
        );
        assert_eq!(QueueTrendError::invalid_cutoff("9pm").stage(), Stage::Filter);
        assert_eq!(QueueTrendError::render("x").stage(), Stage::Render);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(QueueTrendError::from(json_err).stage(), Stage::Serialize);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Load.to_string(), "load");
        assert_eq!(Stage::Aggregate.to_string(), "aggregate");
        assert_eq!(Stage::Serialize.to_string(), "serialize");
    }

    #[test]
    fn test_error_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = QueueTrendError::data_load_with_source("visits.csv", "cannot open", io);
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "no such file");
        assert!(err.is_load_error());
    }
}
