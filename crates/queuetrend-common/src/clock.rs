//! Time-of-day text handling.
//!
//! Times stay strings throughout the pipeline: the cutoff filter compares
//! them lexicographically, which is only meaningful for the fixed-width
//! zero-padded `HH:MM` form. These helpers check that shape without
//! rewriting the text.

use chrono::NaiveTime;

/// Parse `H:MM`, `HH:MM`, `H:MM:SS` or `HH:MM:SS` into a clock time.
///
/// Hours take one or two digits, minutes and seconds exactly two.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    let mut parts = text.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    let seconds = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let hour = digits(hours, 1..=2)?;
    let minute = digits(minutes, 2..=2)?;
    let second = match seconds {
        Some(s) => digits(s, 2..=2)?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

fn digits(field: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Whether `text` is exactly a zero-padded `HH:MM` clock time.
pub fn is_fixed_width_hhmm(text: &str) -> bool {
    text.len() == 5 && text.as_bytes()[2] == b':' && parse_clock(text).is_some()
}

/// Whether `text` sorts correctly against other zero-padded times,
/// i.e. it starts with a two-digit hour.
pub fn is_zero_padded(text: &str) -> bool {
    text.as_bytes().get(2) == Some(&b':') && parse_clock(text).is_some()
}
