//! Greedy placement of a batch of pending tasks.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::{OccupancyResolver, SchedulerConfig, SlotFinder, SlotRequest};
use crate::schedule::{CommittedTask, PendingTask, Roster};

/// Why a pending task was not placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Lookahead exhausted without a fitting slot
    NoSlotFound { max_days_ahead: u32 },
}

/// A pending task that could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedTask {
    pub task: PendingTask,
    pub reason: FailureReason,
}

/// Result of sequencing a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceOutcome {
    /// Newly committed tasks, in placement order
    pub placed: Vec<CommittedTask>,
    pub failed: Vec<FailedTask>,
}

/// Sort by descending weight, then ascending deadline (none last).
///
/// The sort is stable, so tasks with equal keys keep their batch order.
pub fn order_pending(tasks: &mut [PendingTask]) {
    tasks.sort_by_key(|t| (Reverse(t.weight), t.deadline.is_none(), t.deadline));
}

/// Places pending tasks one at a time so later tasks route around earlier ones.
///
/// Single pass, no backtracking: a placed task is never moved to make room
/// for a later one that does not fit.
pub struct TaskSequencer<'a> {
    roster: &'a Roster,
    config: SchedulerConfig,
}

impl<'a> TaskSequencer<'a> {
    pub fn new(roster: &'a Roster, config: SchedulerConfig) -> Self {
        Self { roster, config }
    }

    /// Sequence `pending` against `committed`.
    ///
    /// A task without its own owner is checked against `default_owner`'s
    /// classes and committed under that owner.
    pub fn sequence(
        &self,
        mut pending: Vec<PendingTask>,
        committed: &[CommittedTask],
        default_owner: Option<&str>,
    ) -> SequenceOutcome {
        order_pending(&mut pending);

        let finder = SlotFinder::from_config(&self.config);
        let mut working: Vec<CommittedTask> = committed.to_vec();
        let mut outcome = SequenceOutcome::default();

        for task in pending {
            let owner = task.owner.clone().or_else(|| default_owner.map(String::from));
            let request = SlotRequest {
                owner: owner.as_deref(),
                start_date: task.requested_date,
                duration_minutes: task.duration_minutes,
                exclude_task_id: None,
            };

            let found = finder.find(&OccupancyResolver::new(self.roster, &working), &request);
            match found {
                Some(slot) => {
                    tracing::info!(id = %task.id, title = %task.title, date = %slot.date, slot = %slot.interval, "task placed");
                    let placed = CommittedTask::place(&task, owner, slot.date, slot.interval);
                    working.push(placed.clone());
                    outcome.placed.push(placed);
                }
                None => {
                    tracing::warn!(id = %task.id, title = %task.title, max_days = self.config.max_days_ahead, "no slot found");
                    outcome.failed.push(FailedTask {
                        task,
                        reason: FailureReason::NoSlotFound {
                            max_days_ahead: self.config.max_days_ahead,
                        },
                    });
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DateInput;
    use crate::scheduler::StudyWindow;
    use crate::schedule::TaskDraft;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn pending(title: &str, priority: u8, difficulty: u8, deadline: Option<NaiveDate>) -> PendingTask {
        PendingTask::from_draft(TaskDraft {
            title: title.into(),
            priority,
            difficulty,
            date: Some(DateInput::On(date(19))),
            deadline,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn orders_by_weight_then_deadline() {
        let mut tasks = vec![
            pending("no-deadline", 2, 2, None),
            pending("late", 2, 2, Some(date(30))),
            pending("heavy", 4, 4, None),
            pending("early", 2, 2, Some(date(21))),
        ];
        order_pending(&mut tasks);
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["heavy", "early", "late", "no-deadline"]);
    }

    #[test]
    fn heavier_task_claims_the_only_slot() {
        let roster = Roster::default();
        // a two-hour window on a single day: room for exactly one session
        let config = SchedulerConfig::new(StudyWindow::new(1140, 1260).unwrap(), 1).unwrap();
        let light = pending("light", 2, 1, None);
        let heavy = pending("heavy", 2, 4, None);
        assert_eq!((light.weight, heavy.weight), (3, 6));

        let outcome = TaskSequencer::new(&roster, config).sequence(vec![light, heavy], &[], None);

        assert_eq!(outcome.placed.len(), 1);
        assert_eq!(outcome.placed[0].title, "heavy");
        assert_eq!((outcome.placed[0].start_minute, outcome.placed[0].end_minute), (1140, 1260));
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].task.title, "light");
        assert_eq!(outcome.failed[0].reason, FailureReason::NoSlotFound { max_days_ahead: 1 });
    }

    #[test]
    fn unplaced_task_does_not_stop_the_batch() {
        let roster = Roster::default();
        let config = SchedulerConfig::new(StudyWindow::new(1140, 1260).unwrap(), 1).unwrap();
        let first = pending("first", 4, 2, None);
        let too_long = pending("too-long", 2, 3, None);
        let last = pending("last", 1, 2, None);
        assert_eq!((first.weight, too_long.weight, last.weight), (6, 5, 3));

        let outcome = TaskSequencer::new(&roster, config).sequence(vec![last, too_long, first], &[], None);

        // 90 minutes do not fit in the 60 left after "first"; "last" takes them
        let slots: Vec<(&str, u32, u32)> = outcome
            .placed
            .iter()
            .map(|t| (t.title.as_str(), t.start_minute, t.end_minute))
            .collect();
        assert_eq!(slots, vec![("first", 1140, 1200), ("last", 1200, 1260)]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].task.title, "too-long");
    }

    #[test]
    fn later_tasks_route_around_earlier_ones() {
        let roster = Roster::default();
        let outcome = TaskSequencer::new(&roster, SchedulerConfig::default()).sequence(
            vec![pending("b", 1, 2, None), pending("a", 4, 2, None)],
            &[],
            None,
        );
        let slots: Vec<(&str, u32, u32)> = outcome
            .placed
            .iter()
            .map(|t| (t.title.as_str(), t.start_minute, t.end_minute))
            .collect();
        assert_eq!(slots, vec![("a", 1140, 1200), ("b", 1200, 1260)]);
    }

    #[test]
    fn default_owner_is_applied() {
        let roster = Roster::demo();
        let outcome = TaskSequencer::new(&roster, SchedulerConfig::default()).sequence(
            vec![pending("x", 1, 1, None)],
            &[],
            Some("16725186"),
        );
        assert_eq!(outcome.placed[0].owner.as_deref(), Some("16725186"));
    }
}
