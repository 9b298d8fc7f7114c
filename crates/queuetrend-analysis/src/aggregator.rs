//! Day-of-week grouping.

use std::collections::HashSet;
use std::path::Path;

use queuetrend_common::{day_label, DailySeries, Record, Result};
use tracing::{debug, info, info_span};

use crate::filter::{apply_cutoff, TimeCutoff};
use crate::loader::CsvLoader;

/// Result of grouping the filtered records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    /// Per-day time → queue length mappings.
    pub series: DailySeries,
    /// Distinct times over all kept records, first occurrence first.
    pub distinct_times: Vec<String>,
}

/// Group records by day; within a day a repeated time keeps its last value.
pub fn aggregate<'a, I>(records: I) -> Aggregate
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    let mut series = DailySeries::new();
    for record in &records {
        series
            .day_mut(record.day)
            .insert(record.time.clone(), record.queue_length);
    }
    let distinct_times = distinct_times(records.iter().copied());

    for (day, day_series) in series.iter() {
        debug!(day = day_label(day), points = day_series.len(), "Grouped day");
    }

    Aggregate {
        series,
        distinct_times,
    }
}

/// Distinct times of `records` in first-occurrence order.
pub fn distinct_times<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen = HashSet::new();
    let mut times = Vec::new();
    for record in records {
        if seen.insert(record.time.as_str()) {
            times.push(record.time.clone());
        }
    }
    times
}

/// Load `path`, apply `cutoff`, and group the remaining rows.
pub fn analyze_file(path: &Path, loader: &CsvLoader, cutoff: &TimeCutoff) -> Result<Aggregate> {
    let dataset = {
        let _span = info_span!("load").entered();
        loader.load_path(path)?
    };

    let filtered = {
        let _span = info_span!("filter").entered();
        apply_cutoff(&dataset, cutoff)
    };

    let _span = info_span!("aggregate").entered();
    let result = aggregate(filtered.records().iter().copied());
    info!(
        kept = filtered.len(),
        dropped = filtered.dropped(),
        times = result.distinct_times.len(),
        "Aggregated queue lengths by day"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use queuetrend_common::{Dataset, QueueLength};

    fn rec(time: &str, day: Weekday, queue: i64) -> Record {
        Record::new(time, day, QueueLength::Count(queue))
    }

    #[test]
    fn test_groups_by_day_in_file_order() {
        let records = vec![
            rec("09:00", Weekday::Mon, 4),
            rec("09:00", Weekday::Tue, 1),
            rec("09:10", Weekday::Mon, 5),
            rec("08:50", Weekday::Mon, 2),
        ];
        let result = aggregate(&records);

        let monday: Vec<(&str, QueueLength)> = result.series.day(Weekday::Mon).iter().collect();
        assert_eq!(
            monday,
            vec![
                ("09:00", QueueLength::Count(4)),
                ("09:10", QueueLength::Count(5)),
                ("08:50", QueueLength::Count(2)),
            ]
        );
        assert_eq!(result.series.day(Weekday::Tue).len(), 1);
        assert!(result.series.day(Weekday::Sun).is_empty());
    }

    #[test]
    fn test_duplicate_time_last_wins() {
        let records = vec![rec("09:00", Weekday::Fri, 4), rec("09:00", Weekday::Fri, 7)];
        let result = aggregate(&records);

        let friday = result.series.day(Weekday::Fri);
        assert_eq!(friday.len(), 1);
        assert_eq!(friday.get("09:00"), Some(QueueLength::Count(7)));
    }

    #[test]
    fn test_distinct_times_first_occurrence() {
        let records = vec![
            rec("09:10", Weekday::Mon, 1),
            rec("09:00", Weekday::Tue, 1),
            rec("09:10", Weekday::Wed, 1),
            rec("09:20", Weekday::Mon, 1),
        ];
        let expected = vec!["09:10", "09:00", "09:20"];
        assert_eq!(aggregate(&records).distinct_times, expected);
        assert_eq!(distinct_times(&records), expected);
    }

    #[test]
    fn test_cutoff_scenario() {
        let dataset = Dataset::new(vec![rec("09:00", Weekday::Mon, 4), rec("22:00", Weekday::Mon, 9)]);
        let filtered = apply_cutoff(&dataset, &TimeCutoff::default());
        let result = aggregate(filtered.records().iter().copied());

        let monday = result.series.get("Monday").unwrap();
        assert_eq!(monday.len(), 1);
        assert_eq!(monday.get("09:00"), Some(QueueLength::Count(4)));
        for label in ["Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"] {
            assert!(result.series.get(label).unwrap().is_empty(), "{label} should be empty");
        }
        assert_eq!(result.distinct_times, vec!["09:00"]);
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate(&Vec::<Record>::new());
        assert_eq!(result.series.total_points(), 0);
        assert!(result.distinct_times.is_empty());
    }
}
