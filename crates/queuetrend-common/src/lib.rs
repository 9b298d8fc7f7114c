//! # Queuetrend Common
//!
//! Shared types, errors, and logging for the queuetrend workspace.
//!
//! This crate provides the domain model (records, per-day series) and the
//! error type every other crate in the workspace reports through.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use clock::{is_fixed_width_hhmm, is_zero_padded, parse_clock};
pub use error::{QueueTrendError, Result, Stage};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::*;
