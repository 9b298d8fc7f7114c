//! Test utilities and shared fixtures for the queuetrend workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the tests of every other crate.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::types::QueueLength;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Header line of the queue measurement CSV.
pub const CSV_HEADER: &str = "Time,DayOfWeek,Queue_Length";

/// Render `(time, day code, queue length)` rows as CSV text with header.
pub fn csv_text(rows: &[(&str, i64, &str)]) -> String {
    let mut text = String::from(CSV_HEADER);
    text.push('\n');
    for (time, day, queue) in rows {
        let _ = writeln!(text, "{time},{day},{queue}");
    }
    text
}

/// A CSV file inside a temporary directory that is removed on drop.
pub struct CsvFixture {
    dir: tempfile::TempDir,
    path: PathBuf,
}

impl CsvFixture {
    /// Write `contents` verbatim to `visitors.csv` in a fresh temp directory.
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("visitors.csv");
        std::fs::write(&path, contents).expect("Failed to write CSV fixture");
        Self { dir, path }
    }

    /// Write rows in the standard three-column layout.
    pub fn from_rows(rows: &[(&str, i64, &str)]) -> Self {
        Self::new(&csv_text(rows))
    }

    /// Path of the CSV file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Directory holding the fixture, usable for sibling output files.
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// A week of ten-minute samples from 08:00 to 22:50 for every day.
///
/// The queue length is `day * 10 + slot % 7`, so each value is predictable.
pub fn sample_week_rows() -> Vec<(String, i64, String)> {
    let mut rows = Vec::new();
    for day in 0..7_i64 {
        for (slot, hour) in (8..23).flat_map(|h| std::iter::repeat(h).take(6)).enumerate() {
            let minute = (slot % 6) * 10;
            let queue = day * 10 + (slot % 7) as i64;
            rows.push((format!("{hour:02}:{minute:02}"), day, queue.to_string()));
        }
    }
    rows
}

/// [`sample_week_rows`] as CSV text.
pub fn sample_week_csv() -> String {
    let rows = sample_week_rows();
    let borrowed: Vec<(&str, i64, &str)> = rows
        .iter()
        .map(|(time, day, queue)| (time.as_str(), *day, queue.as_str()))
        .collect();
    csv_text(&borrowed)
}

/// Shorthand for an integral queue length.
pub const fn count(n: i64) -> QueueLength {
    QueueLength::Count(n)
}
