//! One analysis run from input file to chart and JSON.

use std::io::Write;

use queuetrend_analysis::{analyze_file, Aggregate, CsvLoader, TimeCutoff};
use queuetrend_common::{QueueTrendError, Result};
use queuetrend_config::Config;
use queuetrend_graphs::{sink_for, write_json, ChartSink, ChartStyle, QueueTrendChart};
use tracing::{info, info_span};

/// A configured analysis run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Pipeline for an already validated configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Load, filter and group the configured input file.
    pub fn analyze(&self) -> Result<Aggregate> {
        let delimiter = u8::try_from(self.config.input.delimiter).map_err(|_| {
            QueueTrendError::config(format!(
                "input.delimiter {:?} is not a single-byte character",
                self.config.input.delimiter
            ))
        })?;
        let loader = CsvLoader::with_delimiter(delimiter);
        let cutoff = TimeCutoff::new(self.config.analysis.cutoff.as_str())?;
        analyze_file(&self.config.input.path, &loader, &cutoff)
    }

    /// Hand the chart to `sink`, then write the JSON report to `out`.
    ///
    /// A sink failure stops the run before any JSON is written.
    pub fn present(
        &self,
        aggregate: &Aggregate,
        sink: &mut dyn ChartSink,
        out: &mut dyn Write,
    ) -> Result<()> {
        {
            let _span = info_span!("render", sink = sink.name()).entered();
            let chart = QueueTrendChart::build(
                &aggregate.series,
                &aggregate.distinct_times,
                self.config.analysis.tick_stride,
                ChartStyle::from(&self.config.chart),
            );
            sink.present(&chart)?;
        }

        let _span = info_span!("serialize").entered();
        write_json(out, &aggregate.series, self.config.output.json_indent)
    }

    /// Full run with the sink chosen by the configuration.
    pub fn run(&self, out: &mut dyn Write) -> Result<Aggregate> {
        info!(
            input = %self.config.input.path.display(),
            cutoff = %self.config.analysis.cutoff,
            sink = %self.config.chart.sink,
            "Starting queue trend analysis"
        );
        let aggregate = self.analyze()?;
        let mut sink = sink_for(&self.config.chart);
        self.present(&aggregate, sink.as_mut(), out)?;
        Ok(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queuetrend_common::test_utils::CsvFixture;
    use queuetrend_common::Stage;
    use queuetrend_config::ChartSinkKind;
    use queuetrend_graphs::RecordingSink;

    fn config_for(fixture: &CsvFixture) -> Config {
        let mut config = Config::default();
        config.input.path = fixture.path().to_path_buf();
        config.chart.sink = ChartSinkKind::None;
        config
    }

    #[test]
    fn test_present_feeds_sink_then_json() {
        let fixture =
            CsvFixture::from_rows(&[("09:00", 0, "4"), ("21:30", 0, "9"), ("09:00", 3, "2")]);
        let pipeline = Pipeline::new(config_for(&fixture));
        let aggregate = pipeline.analyze().unwrap();

        let mut sink = RecordingSink::new();
        let mut out: Vec<u8> = Vec::new();
        pipeline.present(&aggregate, &mut sink, &mut out).unwrap();

        let chart = sink.last().unwrap();
        assert_eq!(chart.categories, vec!["09:00"]);
        assert_eq!(chart.lines[0].points, vec![(0, 4.0)]);
        assert_eq!(chart.lines[3].points, vec![(0, 2.0)]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n    \"Monday\": {\n        \"09:00\": 4\n    },"));
    }

    #[test]
    fn test_custom_delimiter() {
        let fixture = CsvFixture::new("Time;DayOfWeek;Queue_Length\n10:00;6;3\n");
        let mut config = config_for(&fixture);
        config.input.delimiter = ';';
        let aggregate = Pipeline::new(config).analyze().unwrap();
        assert_eq!(aggregate.series.get("Sunday").unwrap().len(), 1);
    }

    #[test]
    fn test_bad_cutoff_is_filter_error() {
        let fixture = CsvFixture::from_rows(&[("09:00", 0, "4")]);
        let mut config = config_for(&fixture);
        config.analysis.cutoff = "9pm".to_string();
        let err = Pipeline::new(config).analyze().unwrap_err();
        assert_eq!(err.stage(), Stage::Filter);
    }
}
