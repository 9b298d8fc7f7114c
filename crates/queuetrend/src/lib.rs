//! # Queuetrend
//!
//! Command-line entry point for the visitor queue analysis. Wires the
//! configuration, the CSV analysis and the chart and JSON outputs into one
//! run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod pipeline;

pub use pipeline::*;
