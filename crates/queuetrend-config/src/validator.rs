//! Configuration validation.

use crate::schema::{ChartSinkKind, Config};
use queuetrend_common::{is_fixed_width_hhmm, QueueTrendError, Result};

/// Largest accepted JSON indentation.
pub const MAX_JSON_INDENT: usize = 16;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &Config) -> Result<()> {
        let problems = Self::problems(config);
        match problems.first() {
            None => Ok(()),
            Some(first) if problems.len() == 1 => Err(QueueTrendError::config(first.clone())),
            Some(_) => Err(QueueTrendError::config(problems.join("; "))),
        }
    }

    /// Every problem in the configuration, in schema order.
    pub fn problems(config: &Config) -> Vec<String> {
        let mut problems = Vec::new();

        if config.input.path.as_os_str().is_empty() {
            problems.push("input.path cannot be empty".to_string());
        }
        if !config.input.delimiter.is_ascii() || config.input.delimiter == '"' {
            problems.push(format!(
                "input.delimiter must be a single ASCII character other than '\"', got {:?}",
                config.input.delimiter
            ));
        }

        if !is_fixed_width_hhmm(&config.analysis.cutoff) {
            problems.push(format!(
                "analysis.cutoff must be a zero-padded HH:MM time, got {:?}",
                config.analysis.cutoff
            ));
        }
        if config.analysis.tick_stride == 0 {
            problems.push("analysis.tick_stride must be at least 1".to_string());
        }

        let chart = &config.chart;
        if chart.sink != ChartSinkKind::None && chart.output_path.as_os_str().is_empty() {
            problems.push(format!(
                "chart.output_path cannot be empty when chart.sink is {}",
                chart.sink
            ));
        }
        if chart.width == 0 || chart.height == 0 {
            problems.push(format!(
                "chart dimensions must be positive, got {}x{}",
                chart.width, chart.height
            ));
        }
        if chart.colors.len() != 7 {
            problems.push(format!(
                "chart.colors needs one color per day (7), got {}",
                chart.colors.len()
            ));
        }
        for color in chart.colors.iter().filter(|c| !is_hex_color(c)) {
            problems.push(format!("chart.colors entry {color:?} is not #RRGGBB"));
        }

        if config.output.json_indent > MAX_JSON_INDENT {
            problems.push(format!(
                "output.json_indent must be at most {MAX_JSON_INDENT}, got {}",
                config.output.json_indent
            ));
        }

        problems
    }
}

/// Whether `color` is a `#RRGGBB` hex color.
pub fn is_hex_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}
