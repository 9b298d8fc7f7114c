//! # Queuetrend Graphs
//!
//! Presentation of the per-day queue series: a line chart with one series
//! per weekday, drawn with plotters and handed to a [`ChartSink`], and the
//! same data as an indented JSON document.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod renderer;
pub mod report;
pub mod sink;
pub mod ticks;

pub use chart::*;
pub use renderer::*;
pub use report::*;
pub use sink::*;
pub use ticks::*;
