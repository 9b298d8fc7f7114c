//! CSV loading into a [`Dataset`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use queuetrend_common::{
    parse_clock, weekday_from_code, Dataset, QueueLength, QueueTrendError, Record, Result,
};
use tracing::{debug, info};

/// Time-of-day column.
pub const TIME_COLUMN: &str = "Time";
/// Day code column, 0 = Monday.
pub const DAY_COLUMN: &str = "DayOfWeek";
/// Queue length column.
pub const QUEUE_COLUMN: &str = "Queue_Length";

/// Positions of the required columns in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    time: usize,
    day: usize,
    queue: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };

        let missing: Vec<&str> = [TIME_COLUMN, DAY_COLUMN, QUEUE_COLUMN]
            .into_iter()
            .filter(|name| find(name).is_none())
            .collect();

        match (find(TIME_COLUMN), find(DAY_COLUMN), find(QUEUE_COLUMN)) {
            (Some(time), Some(day), Some(queue)) => Ok(Self { time, day, queue }),
            _ => Err(QueueTrendError::data_load(
                path,
                format!("missing required column(s): {}", missing.join(", ")),
            )),
        }
    }
}

/// Reads queue measurement CSV files.
#[derive(Debug, Clone, Copy)]
pub struct CsvLoader {
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    /// Loader for comma separated files.
    pub const fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Loader for a different single-byte delimiter.
    pub const fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read every row of the file at `path`.
    pub fn load_path(&self, path: &Path) -> Result<Dataset> {
        let file = File::open(path)
            .map_err(|e| QueueTrendError::data_load_with_source(path, "cannot open file", e))?;
        self.load_reader(file, path)
    }

    /// Read every row from `reader`; `path` is only used in errors and logs.
    pub fn load_reader<R: Read>(&self, reader: R, path: &Path) -> Result<Dataset> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| QueueTrendError::data_load_with_source(path, "cannot read header row", e))?
            .clone();
        let columns = ColumnIndex::from_headers(&headers, path)?;
        debug!(?columns, "Resolved input columns");

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row.map_err(|e| {
                let line = e.position().map_or(0, csv::Position::line);
                QueueTrendError::data_load_with_source(path, format!("cannot read row at line {line}"), e)
            })?;
            records.push(parse_row(&row, columns)?);
        }

        info!(rows = records.len(), path = %path.display(), "Loaded queue measurements");
        Ok(Dataset::new(records))
    }
}

/// Read the file at `path` with the default comma delimiter.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    CsvLoader::new().load_path(path.as_ref())
}

fn parse_row(row: &StringRecord, columns: ColumnIndex) -> Result<Record> {
    let line = row.position().map_or(0, csv::Position::line);
    let cell = |index: usize| row.get(index).unwrap_or("");

    let raw_time = cell(columns.time);
    let time = normalize_time(raw_time).ok_or_else(|| {
        QueueTrendError::malformed_row(line, TIME_COLUMN, raw_time, "not a time of day")
    })?;

    let raw_day = cell(columns.day);
    let code = raw_day.trim().parse::<i64>().map_err(|_| {
        QueueTrendError::malformed_row(line, DAY_COLUMN, raw_day, "not an integer day code")
    })?;
    let day = weekday_from_code(code).ok_or_else(|| {
        QueueTrendError::malformed_row(line, DAY_COLUMN, raw_day, "day code must be within 0..=6")
    })?;

    let raw_queue = cell(columns.queue);
    let queue_length = QueueLength::parse(raw_queue).ok_or_else(|| {
        QueueTrendError::malformed_row(line, QUEUE_COLUMN, raw_queue, "not a finite number")
    })?;

    Ok(Record::new(time, day, queue_length))
}

/// Normalize a `Time` cell to its string form.
///
/// The text is kept as written (minus surrounding whitespace) so the cutoff
/// compares exactly what the file contains; it must still read as a clock
/// time.
pub fn normalize_time(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    parse_clock(trimmed).map(|_| trimmed.to_string())
}
