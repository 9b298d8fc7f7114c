//! # Queuetrend Analysis
//!
//! Turns a queue measurement CSV into per-day series.
//!
//! ```text
//!  visitors.csv
//!       │
//!       ▼
//!   ┌────────┐   Dataset (all rows, file order)
//!   │ loader │
//!   └────────┘
//!       │
//!       ▼
//!   ┌────────┐   rows with Time <= cutoff
//!   │ filter │
//!   └────────┘
//!       │
//!       ▼
//!   ┌────────────┐   DailySeries + distinct times
//!   │ aggregator │
//!   └────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod filter;
pub mod loader;

pub use aggregator::*;
pub use filter::*;
pub use loader::*;
