//! Time cutoff filtering.
//!
//! Times are compared as strings. That matches clock order only when every
//! value is a zero-padded 24-hour time, which is a precondition on the input
//! rather than something this module repairs; values that break it are
//! reported once each at `warn` level and then compared as-is.

use std::collections::HashSet;

use queuetrend_common::{is_fixed_width_hhmm, is_zero_padded, Dataset, QueueTrendError, Record, Result};
use tracing::{debug, warn};

/// Fixed cutoff of the reference analysis.
pub const DEFAULT_CUTOFF: &str = "21:00";

/// Inclusive upper bound on the time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCutoff(String);

impl TimeCutoff {
    /// Validate a zero-padded `HH:MM` cutoff.
    pub fn new(cutoff: impl Into<String>) -> Result<Self> {
        let cutoff = cutoff.into();
        if is_fixed_width_hhmm(&cutoff) {
            Ok(Self(cutoff))
        } else {
            Err(QueueTrendError::invalid_cutoff(cutoff))
        }
    }

    /// The cutoff text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `time` is at or before the cutoff under string comparison.
    pub fn admits(&self, time: &str) -> bool {
        time <= self.0.as_str()
    }
}

impl Default for TimeCutoff {
    fn default() -> Self {
        Self(DEFAULT_CUTOFF.to_string())
    }
}

/// Records that passed the cutoff, borrowed from their [`Dataset`].
#[derive(Debug, Clone)]
pub struct FilteredRecords<'a> {
    records: Vec<&'a Record>,
    dropped: usize,
}

impl<'a> FilteredRecords<'a> {
    /// Kept records in file order.
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Number of kept records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing passed the cutoff.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records after the cutoff.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Keep the records whose time is at or before `cutoff`, in file order.
pub fn apply_cutoff<'a>(dataset: &'a Dataset, cutoff: &TimeCutoff) -> FilteredRecords<'a> {
    let mut reported = HashSet::new();
    let mut records = Vec::with_capacity(dataset.len());
    let mut dropped = 0;

    for record in dataset {
        if !is_zero_padded(&record.time) && reported.insert(record.time.as_str()) {
            warn!(
                time = %record.time,
                cutoff = %cutoff.as_str(),
                "Time is not zero-padded; string comparison against the cutoff may misorder it"
            );
        }
        if cutoff.admits(&record.time) {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    debug!(kept = records.len(), dropped, cutoff = %cutoff.as_str(), "Applied time cutoff");
    FilteredRecords { records, dropped }
}
