//! End-to-end tests for the queuetrend pipeline.

use queuetrend::Pipeline;
use queuetrend_common::test_utils::{init_test_logging, sample_week_csv, CsvFixture};
use queuetrend_common::{DailySeries, QueueTrendError, Result, Stage};
use queuetrend_config::{ChartSinkKind, Config};
use queuetrend_graphs::{ChartSink, QueueTrendChart, RecordingSink};

fn config_for(fixture: &CsvFixture, sink: ChartSinkKind) -> Config {
    let mut config = Config::default();
    config.input.path = fixture.path().to_path_buf();
    config.chart.sink = sink;
    config.chart.output_path = fixture.dir().join("charts").join("queue_trends.png");
    config
}

struct FailingSink;

impl ChartSink for FailingSink {
    fn present(&mut self, _chart: &QueueTrendChart) -> Result<()> {
        Err(QueueTrendError::render("display unavailable"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

#[test]
fn test_run_prints_indented_json() {
    init_test_logging();
    let fixture = CsvFixture::new(&sample_week_csv());
    let pipeline = Pipeline::new(config_for(&fixture, ChartSinkKind::None));

    let mut out: Vec<u8> = Vec::new();
    let aggregate = pipeline.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("{\n    \"Monday\": {\n        \"08:00\": 0,\n"));
    assert!(!text.contains("\"21:10\""));
    let parsed: DailySeries = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, aggregate.series);
}

#[test]
fn test_chart_matches_aggregate() {
    let fixture = CsvFixture::new(&sample_week_csv());
    let pipeline = Pipeline::new(config_for(&fixture, ChartSinkKind::None));
    let aggregate = pipeline.analyze().unwrap();

    let mut sink = RecordingSink::new();
    pipeline.present(&aggregate, &mut sink, &mut Vec::<u8>::new()).unwrap();

    let chart = sink.last().unwrap();
    assert_eq!(chart.categories, aggregate.distinct_times);
    assert_eq!(chart.ticks.len(), aggregate.distinct_times.len().div_ceil(3));
    assert_eq!(chart.lines.len(), 7);
    assert_eq!(chart.point_count(), aggregate.series.total_points());
    assert_eq!(chart.style.title, "Queue Length Trends by Day of the Week (Cutoff at 9 PM)");
}

#[test]
fn test_sink_failure_stops_before_json() {
    let fixture = CsvFixture::from_rows(&[("09:00", 0, "4")]);
    let pipeline = Pipeline::new(config_for(&fixture, ChartSinkKind::None));
    let aggregate = pipeline.analyze().unwrap();

    let mut out: Vec<u8> = Vec::new();
    let err = pipeline.present(&aggregate, &mut FailingSink, &mut out).unwrap_err();
    assert_eq!(err.stage(), Stage::Render);
    assert!(out.is_empty());
}

#[test]
fn test_empty_after_cutoff_still_reports_every_day() {
    let fixture = CsvFixture::from_rows(&[("22:00", 0, "9"), ("23:10", 5, "1")]);
    let pipeline = Pipeline::new(config_for(&fixture, ChartSinkKind::None));

    let mut out: Vec<u8> = Vec::new();
    let aggregate = pipeline.run(&mut out).unwrap();
    assert!(aggregate.distinct_times.is_empty());

    let text = String::from_utf8(out).unwrap();
    for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"] {
        assert!(text.contains(&format!("    \"{day}\": {{}}")), "{day} missing");
    }
}

#[test]
fn test_missing_input_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.input.path = dir.path().join("missing.csv");
    config.chart.sink = ChartSinkKind::None;

    let err = Pipeline::new(config).run(&mut Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.stage(), Stage::Load);
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn rows() -> impl Strategy<Value = Vec<(String, i64, String)>> {
        prop::collection::vec(
            ((0u32..24, 0u32..60), 0i64..7, 0i64..200),
            0..60,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|((h, m), day, queue)| (format!("{h:02}:{m:02}"), day, queue.to_string()))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_printed_json_parses_back_to_the_aggregate(rows in rows()) {
            let borrowed: Vec<(&str, i64, &str)> = rows
                .iter()
                .map(|(time, day, queue)| (time.as_str(), *day, queue.as_str()))
                .collect();
            let fixture = CsvFixture::from_rows(&borrowed);
            let pipeline = Pipeline::new(config_for(&fixture, ChartSinkKind::None));

            let mut out: Vec<u8> = Vec::new();
            let aggregate = pipeline.run(&mut out).unwrap();
            let parsed: DailySeries = serde_json::from_slice(&out).unwrap();

            prop_assert_eq!(parsed.total_points(), aggregate.series.total_points());
            prop_assert_eq!(parsed, aggregate.series);
        }
    }
}
