//! Forward search for the first free slot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{OccupancyResolver, SchedulerConfig, StudyWindow, MAX_DAYS_AHEAD};
use crate::timeline::{merge_intervals, TimeInterval};

/// A place in the calendar: a date and a time range on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub interval: TimeInterval,
}

/// What to look for.
#[derive(Debug, Clone, Copy)]
pub struct SlotRequest<'a> {
    /// Whose class timetable to respect
    pub owner: Option<&'a str>,
    /// First candidate date
    pub start_date: NaiveDate,
    pub duration_minutes: u32,
    /// Committed task to ignore (the one being moved)
    pub exclude_task_id: Option<&'a str>,
}

/// First start offset on one day that can hold `duration` minutes.
///
/// `merged` must be sorted and disjoint (see [`merge_intervals`]). Candidates
/// are tried in a fixed order: before the first busy interval, then each
/// gap between busy intervals left to right, then after the last one. Every
/// candidate is clamped to the window.
pub fn fit_in_day(merged: &[TimeInterval], window: StudyWindow, duration: u32) -> Option<TimeInterval> {
    let ws = window.start_minute();
    let we = window.end_minute();
    let fits = |start: u32, limit: u32| {
        let end = start.saturating_add(duration);
        if end <= limit {
            TimeInterval::new(start, end).ok()
        } else {
            None
        }
    };

    let (Some(first), Some(last)) = (merged.first(), merged.last()) else {
        return fits(ws, we);
    };

    if let Some(slot) = fits(ws, first.start().min(we)) {
        return Some(slot);
    }

    for pair in merged.windows(2) {
        let gap_start = pair[0].end().max(ws);
        let gap_end = pair[1].start().min(we);
        if let Some(slot) = fits(gap_start, gap_end) {
            return Some(slot);
        }
    }

    fits(last.end().max(ws), we)
}

fn is_free(slot: &TimeInterval, busy: &[TimeInterval], window: StudyWindow) -> bool {
    slot.start() >= window.start_minute()
        && slot.end() <= window.end_minute()
        && !busy.iter().any(|b| b.overlaps(slot))
}

/// Day-by-day slot search bounded by a lookahead.
#[derive(Debug, Clone, Copy)]
pub struct SlotFinder {
    window: StudyWindow,
    max_days_ahead: u32,
}

impl SlotFinder {
    /// The lookahead is clamped to [`MAX_DAYS_AHEAD`].
    pub fn new(window: StudyWindow, max_days_ahead: u32) -> Self {
        Self {
            window,
            max_days_ahead: max_days_ahead.min(MAX_DAYS_AHEAD),
        }
    }

    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self::new(config.window, config.max_days_ahead)
    }

    /// Earliest slot on the earliest date, or `None` once `max_days_ahead`
    /// dates (the start date included) have been tried.
    pub fn find(&self, resolver: &OccupancyResolver<'_>, request: &SlotRequest<'_>) -> Option<Slot> {
        let mut date = request.start_date;
        for _ in 0..self.max_days_ahead {
            let busy = merge_intervals(resolver.occupancy(request.owner, date, request.exclude_task_id));

            match fit_in_day(&busy, self.window, request.duration_minutes) {
                Some(interval) if is_free(&interval, &busy, self.window) => {
                    return Some(Slot { date, interval });
                }
                Some(interval) => {
                    tracing::warn!(%date, %interval, "candidate slot overlaps occupancy, skipping day");
                }
                None => {
                    tracing::debug!(%date, busy = busy.len(), "no fit, trying next day");
                }
            }
            date = date.succ_opt()?;
        }
        None
    }
}
