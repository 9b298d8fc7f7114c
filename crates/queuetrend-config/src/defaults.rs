//! Default values.

use crate::schema::*;
use queuetrend_common::LoggingConfig;

/// Input file read when nothing else is configured.
pub const DEFAULT_INPUT_PATH: &str = "modified_visitor_data.csv";

/// Times after this are dropped.
pub const DEFAULT_CUTOFF: &str = "21:00";

/// Every third distinct time gets a tick label.
pub const DEFAULT_TICK_STRIDE: usize = 3;

/// Indentation of the JSON report.
pub const DEFAULT_JSON_INDENT: usize = 4;

/// Categorical palette, one color per day starting with Monday.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#1f77b4", // Blue
    "#ff7f0e", // Orange
    "#2ca02c", // Green
    "#d62728", // Red
    "#9467bd", // Purple
    "#8c564b", // Brown
    "#e377c2", // Pink
];

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            analysis: AnalysisConfig::default(),
            chart: ChartConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_INPUT_PATH.into(),
            delimiter: ',',
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF.to_string(),
            tick_stride: DEFAULT_TICK_STRIDE,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            sink: ChartSinkKind::Png,
            output_path: "queue_trends.png".into(),
            // 12 x 6 inches at 100 dpi
            width: 1200,
            height: 600,
            title: "Queue Length Trends by Day of the Week (Cutoff at 9 PM)".to_string(),
            x_label: "Time of Day".to_string(),
            y_label: "Queue Length".to_string(),
            legend_title: "Day of Week".to_string(),
            grid: true,
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_indent: DEFAULT_JSON_INDENT,
        }
    }
}
