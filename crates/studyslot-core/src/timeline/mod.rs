//! Intervals within a single day.
//!
//! This module provides:
//! - `TimeInterval`, a validated `[start, end)` minute range
//! - Interval merging used to build a day's occupancy

mod interval;
mod merge;

pub use interval::TimeInterval;
pub use merge::merge_intervals;
