//! Chart destinations.
//!
//! A [`ChartSink`] receives the finished chart model. File sinks draw it with
//! a plotters backend; the other two exist for runs and tests that do not
//! want image output.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use queuetrend_common::{QueueTrendError, Result};
use queuetrend_config::{ChartConfig, ChartSinkKind};
use tracing::{debug, info};

use crate::chart::QueueTrendChart;
use crate::renderer::draw_chart;

/// Something that can present a queue trend chart.
pub trait ChartSink {
    /// Present the chart.
    fn present(&mut self, chart: &QueueTrendChart) -> Result<()>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(|e| {
            QueueTrendError::render_with_source(
                format!("cannot create output directory {}", parent.display()),
                e,
            )
        }),
        _ => Ok(()),
    }
}

/// Writes the chart as a PNG image.
#[derive(Debug, Clone)]
pub struct BitmapFileSink {
    path: PathBuf,
}

impl BitmapFileSink {
    /// Sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartSink for BitmapFileSink {
    fn present(&mut self, chart: &QueueTrendChart) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let size = (chart.style.width, chart.style.height);
        {
            let root = BitMapBackend::new(&self.path, size).into_drawing_area();
            draw_chart(&root, chart)?;
        }
        info!(path = %self.path.display(), width = size.0, height = size.1, "Wrote chart image");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "png"
    }
}

/// Writes the chart as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgFileSink {
    path: PathBuf,
}

impl SvgFileSink {
    /// Sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartSink for SvgFileSink {
    fn present(&mut self, chart: &QueueTrendChart) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        {
            let root = SVGBackend::new(&self.path, (chart.style.width, chart.style.height))
                .into_drawing_area();
            draw_chart(&root, chart)?;
        }
        info!(path = %self.path.display(), "Wrote chart document");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "svg"
    }
}

/// Discards the chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ChartSink for NullSink {
    fn present(&mut self, chart: &QueueTrendChart) -> Result<()> {
        debug!(points = chart.point_count(), "Chart output disabled");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Keeps every chart it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    charts: Vec<QueueTrendChart>,
}

impl RecordingSink {
    /// Empty recorder.
    pub const fn new() -> Self {
        Self { charts: Vec::new() }
    }

    /// Charts received so far, oldest first.
    pub fn charts(&self) -> &[QueueTrendChart] {
        &self.charts
    }

    /// Most recent chart.
    pub fn last(&self) -> Option<&QueueTrendChart> {
        self.charts.last()
    }
}

impl ChartSink for RecordingSink {
    fn present(&mut self, chart: &QueueTrendChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Build the sink selected by `config`.
pub fn sink_for(config: &ChartConfig) -> Box<dyn ChartSink> {
    match config.sink {
        ChartSinkKind::Png => Box::new(BitmapFileSink::new(&config.output_path)),
        ChartSinkKind::Svg => Box::new(SvgFileSink::new(&config.output_path)),
        ChartSinkKind::None => Box::new(NullSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartStyle;
    use chrono::Weekday;
    use queuetrend_common::{DailySeries, QueueLength, Stage};

    fn chart() -> QueueTrendChart {
        let mut series = DailySeries::new();
        series.day_mut(Weekday::Sat).insert("10:00", QueueLength::Count(12));
        QueueTrendChart::build(&series, &["10:00".to_string()], 3, ChartStyle::default())
    }

    #[test]
    fn test_recording_sink_keeps_charts() {
        let mut sink = RecordingSink::new();
        sink.present(&chart()).unwrap();
        sink.present(&chart()).unwrap();
        assert_eq!(sink.charts().len(), 2);
        assert_eq!(sink.last().unwrap().lines[5].points, vec![(0, 12.0)]);
    }

    #[test]
    fn test_null_sink_accepts_anything() {
        let mut sink = NullSink;
        assert!(sink.present(&chart()).is_ok());
        assert_eq!(sink.name(), "none");
    }

    #[test]
    fn test_sink_for_config() {
        let mut config = ChartConfig::default();
        assert_eq!(sink_for(&config).name(), "png");
        config.sink = ChartSinkKind::Svg;
        assert_eq!(sink_for(&config).name(), "svg");
        config.sink = ChartSinkKind::None;
        assert_eq!(sink_for(&config).name(), "none");
    }

    #[test]
    fn test_unwritable_directory_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let mut sink = BitmapFileSink::new(blocker.join("chart.png"));
        let err = sink.present(&chart()).unwrap_err();
        assert_eq!(err.stage(), Stage::Render);
    }
}
