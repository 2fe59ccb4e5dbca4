//! Automatic placement of study tasks into free time.
//!
//! This module provides:
//! - Occupancy of a day from class timetables and committed tasks
//! - A forward day-by-day search for the first slot inside the study window
//! - Greedy sequencing of a batch of pending tasks by weight and deadline

mod occupancy;
mod sequencer;
mod slot;

pub use occupancy::OccupancyResolver;
pub use sequencer::{order_pending, FailedTask, FailureReason, SequenceOutcome, TaskSequencer};
pub use slot::{fit_in_day, Slot, SlotFinder, SlotRequest};

use crate::clock::{format_hm, parse_hm, MINUTES_PER_DAY};
use crate::error::ValidationError;

/// Default study window start, 19:00.
pub const DEFAULT_WINDOW_START: u32 = 19 * 60;
/// Default study window end, 22:00.
pub const DEFAULT_WINDOW_END: u32 = 22 * 60;
/// Default number of days searched before giving up.
pub const DEFAULT_MAX_DAYS_AHEAD: u32 = 60;
/// Longest accepted lookahead, one year.
pub const MAX_DAYS_AHEAD: u32 = 365;

/// Preferred daily time range for study sessions. Its bounds are never relaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyWindow {
    start_minute: u32,
    end_minute: u32,
}

impl StudyWindow {
    pub fn new(start_minute: u32, end_minute: u32) -> Result<Self, ValidationError> {
        if start_minute >= end_minute || end_minute > MINUTES_PER_DAY {
            return Err(ValidationError::InvalidTimeRange {
                start: start_minute,
                end: end_minute,
            });
        }
        Ok(Self {
            start_minute,
            end_minute,
        })
    }

    /// Parse from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_hm(start)?, parse_hm(end)?)
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }
}

impl Default for StudyWindow {
    fn default() -> Self {
        Self {
            start_minute: DEFAULT_WINDOW_START,
            end_minute: DEFAULT_WINDOW_END,
        }
    }
}

impl std::fmt::Display for StudyWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", format_hm(self.start_minute), format_hm(self.end_minute))
    }
}

/// Scheduler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Window searched on each day
    pub window: StudyWindow,
    /// Number of candidate days, starting with the requested date
    pub max_days_ahead: u32,
}

impl SchedulerConfig {
    pub fn new(window: StudyWindow, max_days_ahead: u32) -> Result<Self, ValidationError> {
        if !(1..=MAX_DAYS_AHEAD).contains(&max_days_ahead) {
            return Err(ValidationError::OutOfRange {
                field: "max_days_ahead".into(),
                value: max_days_ahead.into(),
                min: 1,
                max: MAX_DAYS_AHEAD.into(),
            });
        }
        Ok(Self {
            window,
            max_days_ahead,
        })
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            window: StudyWindow::default(),
            max_days_ahead: DEFAULT_MAX_DAYS_AHEAD,
        }
    }
}
