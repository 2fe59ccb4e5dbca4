//! Busy intervals of a day.

use chrono::NaiveDate;

use crate::schedule::{CommittedTask, Roster};
use crate::timeline::TimeInterval;

/// Computes what is already booked on a given date.
///
/// Class occupancy is per owner: only the owner's own timetable counts, and
/// an unknown or absent owner has no classes. Task occupancy is global:
/// every committed task on the date blocks time for everybody.
pub struct OccupancyResolver<'a> {
    roster: &'a Roster,
    committed: &'a [CommittedTask],
}

impl<'a> OccupancyResolver<'a> {
    pub fn new(roster: &'a Roster, committed: &'a [CommittedTask]) -> Self {
        Self { roster, committed }
    }

    /// Busy intervals on `date`, unsorted and possibly overlapping.
    ///
    /// `exclude_task_id` leaves one committed task out, so a task being
    /// reassigned does not block its own new slot.
    pub fn occupancy(
        &self,
        owner: Option<&str>,
        date: NaiveDate,
        exclude_task_id: Option<&str>,
    ) -> Vec<TimeInterval> {
        let mut busy: Vec<TimeInterval> = self.class_occupancy(owner, date).to_vec();

        busy.extend(
            self.committed
                .iter()
                .filter(|t| t.date == date)
                .filter(|t| exclude_task_id != Some(t.id.as_str()))
                .filter_map(CommittedTask::interval),
        );
        busy
    }

    fn class_occupancy(&self, owner: Option<&str>, date: NaiveDate) -> &'a [TimeInterval] {
        let Some(owner) = owner else {
            return &[];
        };
        match self.roster.lookup(owner) {
            Some(student) => student.class_grid.classes_on(date),
            None => {
                tracing::debug!(owner, "unknown owner, no class occupancy");
                &[]
            }
        }
    }
}
