//! Chart model: everything a sink needs to draw the queue trend chart.

use std::collections::HashMap;

use chrono::Weekday;
use queuetrend_common::{day_label, DailySeries};
use queuetrend_config::ChartConfig;

use crate::ticks::{is_tick_index, subsample_ticks};

/// Appearance of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Caption above the plot
    pub title: String,
    /// X-axis description
    pub x_label: String,
    /// Y-axis description
    pub y_label: String,
    /// Heading above the legend
    pub legend_title: String,
    /// Whether to draw grid lines
    pub grid: bool,
    /// `#RRGGBB` colors, one per day in Monday..Sunday order
    pub colors: Vec<String>,
}

impl From<&ChartConfig> for ChartStyle {
    fn from(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            legend_title: config.legend_title.clone(),
            grid: config.grid,
            colors: config.colors.clone(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

/// One day's line.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLine {
    /// Day the line belongs to
    pub day: Weekday,
    /// Legend label
    pub label: &'static str,
    /// `#RRGGBB` line color
    pub color: String,
    /// `(category index, queue length)` in the day's own order
    pub points: Vec<(usize, f64)>,
}

/// The queue trend chart, independent of any drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueTrendChart {
    /// Appearance
    pub style: ChartStyle,
    /// Distinct times; a time's index is its x position
    pub categories: Vec<String>,
    /// Times that get a tick label
    pub ticks: Vec<String>,
    /// Every `tick_stride`-th category is labelled
    pub tick_stride: usize,
    /// Seven lines, Monday first
    pub lines: Vec<DayLine>,
}

impl QueueTrendChart {
    /// Lay out `series` on a categorical x axis built from `distinct_times`.
    pub fn build(
        series: &DailySeries,
        distinct_times: &[String],
        tick_stride: usize,
        style: ChartStyle,
    ) -> Self {
        let position: HashMap<&str, usize> = distinct_times
            .iter()
            .enumerate()
            .map(|(i, time)| (time.as_str(), i))
            .collect();

        let lines = series
            .iter()
            .enumerate()
            .map(|(i, (day, day_series))| DayLine {
                day,
                label: day_label(day),
                color: style.colors.get(i).cloned().unwrap_or_else(|| "#000000".to_string()),
                points: day_series
                    .iter()
                    .filter_map(|(time, value)| position.get(time).map(|&x| (x, value.as_f64())))
                    .collect(),
            })
            .collect();

        Self {
            style,
            categories: distinct_times.to_vec(),
            ticks: subsample_ticks(distinct_times, tick_stride),
            tick_stride,
            lines,
        }
    }

    /// Tick label for the category at `index`, empty for unlabelled ones.
    pub fn tick_label(&self, index: usize) -> &str {
        if is_tick_index(index, self.tick_stride) {
            self.categories.get(index).map_or("", String::as_str)
        } else {
            ""
        }
    }

    /// Y-axis range covering every point, with headroom above.
    ///
    /// Starts at zero unless a value is negative; an empty chart gets `0..1`.
    pub fn y_range(&self) -> (f64, f64) {
        let values = self.lines.iter().flat_map(|line| line.points.iter().map(|p| p.1));
        let (min, max) = values.fold((0.0_f64, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !max.is_finite() || max <= min {
            return (min, min + 1.0);
        }
        (min, max + (max - min) * 0.1)
    }

    /// Total number of plotted points.
    pub fn point_count(&self) -> usize {
        self.lines.iter().map(|line| line.points.len()).sum()
    }
}
