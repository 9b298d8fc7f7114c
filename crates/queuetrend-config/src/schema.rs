//! Configuration schema definitions using serde.

use queuetrend_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for queuetrend.
///
/// Every section falls back to its defaults, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input file configuration.
    pub input: InputConfig,
    /// Cutoff and tick subsampling.
    pub analysis: AnalysisConfig,
    /// Chart appearance and destination.
    pub chart: ChartConfig,
    /// JSON report configuration.
    pub output: OutputConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Input file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the queue measurement CSV.
    pub path: PathBuf,
    /// Field delimiter; must be a single ASCII character.
    pub delimiter: char,
}

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Last time of day kept, as zero-padded "HH:MM".
    pub cutoff: String,
    /// Every n-th distinct time becomes an x-axis tick label.
    pub tick_stride: usize,
}

/// Where the rendered chart goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSinkKind {
    /// PNG image file.
    #[default]
    Png,
    /// SVG document file.
    Svg,
    /// Skip rendering.
    None,
}

impl fmt::Display for ChartSinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::None => "none",
        })
    }
}

impl FromStr for ChartSinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "none" | "off" => Ok(Self::None),
            other => Err(format!("unknown chart sink '{other}' (expected png, svg or none)")),
        }
    }
}

/// Chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart destination.
    pub sink: ChartSinkKind,
    /// Output file for the png and svg sinks.
    pub output_path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Chart title.
    pub title: String,
    /// X-axis description.
    pub x_label: String,
    /// Y-axis description.
    pub y_label: String,
    /// Heading drawn above the legend.
    pub legend_title: String,
    /// Whether to draw grid lines.
    pub grid: bool,
    /// One `#RRGGBB` color per day, Monday first.
    pub colors: Vec<String>,
}

/// JSON report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per indentation level.
    pub json_indent: usize,
}
