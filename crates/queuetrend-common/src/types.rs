//! Domain types: input records and the per-day queue series built from them.

use chrono::Weekday;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Days in reporting order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Day names in reporting order.
pub const DAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Map a day code (0 = Monday, 6 = Sunday) to a weekday.
pub const fn weekday_from_code(code: i64) -> Option<Weekday> {
    match code {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Full English day name used as the report key and legend label.
pub const fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Inverse of [`day_label`].
pub fn weekday_from_label(label: &str) -> Option<Weekday> {
    WEEK.iter().copied().find(|day| day_label(*day) == label)
}

/// A queue length as read from the input.
///
/// Integral values stay integers so the report prints `4`, not `4.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueueLength {
    /// Whole number of people
    Count(i64),
    /// Fractional measurement (e.g. an average)
    Measured(f64),
}

impl QueueLength {
    /// Parse a cell. Returns `None` for empty, non-numeric, or non-finite input.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(count) = raw.parse::<i64>() {
            return Some(Self::Count(count));
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Self::Measured(value)),
            _ => None,
        }
    }

    /// Value as a plot coordinate.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(count) => count as f64,
            Self::Measured(value) => value,
        }
    }
}

impl fmt::Display for QueueLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Measured(value) => write!(f, "{value}"),
        }
    }
}

/// One row of the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Time of day, normalized to its textual form (normally "HH:MM")
    pub time: String,
    /// Day of the week the measurement belongs to
    pub day: Weekday,
    /// Measured queue length
    pub queue_length: QueueLength,
}

impl Record {
    /// Create a record.
    pub fn new(time: impl Into<String>, day: Weekday, queue_length: QueueLength) -> Self {
        Self {
            time: time.into(),
            day,
            queue_length,
        }
    }

    /// Numeric day code, 0 = Monday.
    pub fn day_code(&self) -> u32 {
        self.day.num_days_from_monday()
    }
}

/// All records of one input file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap records read from a file.
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Ordered time-of-day → queue length mapping for a single day.
///
/// Keys keep the position of their first insertion; re-inserting a key
/// replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySeries {
    points: Vec<(String, QueueLength)>,
    index: HashMap<String, usize>,
}

impl DaySeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value at `time`, returning the previous value.
    pub fn insert(&mut self, time: impl Into<String>, value: QueueLength) -> Option<QueueLength> {
        let time = time.into();
        if let Some(&slot) = self.index.get(&time) {
            let previous = self.points[slot].1;
            self.points[slot].1 = value;
            return Some(previous);
        }
        self.index.insert(time.clone(), self.points.len());
        self.points.push((time, value));
        None
    }

    /// Value recorded at `time`.
    pub fn get(&self, time: &str) -> Option<QueueLength> {
        self.index.get(time).map(|&slot| self.points[slot].1)
    }

    /// `(time, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, QueueLength)> + '_ {
        self.points.iter().map(|(time, value)| (time.as_str(), *value))
    }

    /// Times in insertion order.
    pub fn times(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|(time, _)| time.as_str())
    }

    /// Number of distinct times.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no time has been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T: Into<String>> FromIterator<(T, QueueLength)> for DaySeries {
    fn from_iter<I: IntoIterator<Item = (T, QueueLength)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (time, value) in iter {
            series.insert(time, value);
        }
        series
    }
}

impl Serialize for DaySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.points.len()))?;
        for (time, value) in &self.points {
            map.serialize_entry(time, value)?;
        }
        map.end()
    }
}

struct DaySeriesVisitor;

impl<'de> Visitor<'de> for DaySeriesVisitor {
    type Value = DaySeries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of time strings to queue lengths")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut series = DaySeries::new();
        while let Some((time, value)) = access.next_entry::<String, QueueLength>()? {
            series.insert(time, value);
        }
        Ok(series)
    }
}

impl<'de> Deserialize<'de> for DaySeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DaySeriesVisitor)
    }
}

/// Per-day queue series for all seven days.
///
/// Every day is always present, possibly empty, and serializes in
/// Monday..Sunday order keyed by [`day_label`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    days: [DaySeries; 7],
}

impl DailySeries {
    /// Create a series with seven empty days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Series for one day.
    pub fn day(&self, day: Weekday) -> &DaySeries {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Mutable series for one day.
    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySeries {
        &mut self.days[day.num_days_from_monday() as usize]
    }

    /// Series for a day label such as "Monday".
    pub fn get(&self, label: &str) -> Option<&DaySeries> {
        weekday_from_label(label).map(|day| self.day(day))
    }

    /// Days in Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySeries)> + '_ {
        WEEK.iter().copied().zip(self.days.iter())
    }

    /// Total number of points across all days.
    pub fn total_points(&self) -> usize {
        self.days.iter().map(DaySeries::len).sum()
    }
}

impl Serialize for DailySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEK.len()))?;
        for (day, series) in self.iter() {
            map.serialize_entry(day_label(day), series)?;
        }
        map.end()
    }
}

struct DailySeriesVisitor;

impl<'de> Visitor<'de> for DailySeriesVisitor {
    type Value = DailySeries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of day names to time series")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut daily = DailySeries::new();
        while let Some(label) = access.next_key::<String>()? {
            let day = weekday_from_label(&label)
                .ok_or_else(|| de::Error::unknown_variant(&label, &DAY_LABELS))?;
            *daily.day_mut(day) = access.next_value()?;
        }
        Ok(daily)
    }
}

impl<'de> Deserialize<'de> for DailySeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DailySeriesVisitor)
    }
}
