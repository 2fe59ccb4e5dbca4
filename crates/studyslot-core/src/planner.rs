//! Caller-facing operations over the shared calendar.
//!
//! `Planner` owns the calendar store, the roster and the scheduler settings.
//! Every mutating operation is read-all, decide, write-all; there is no
//! locking, so only one caller may use a given calendar at a time.

use tracing::info;

use crate::clock::DateInput;
use crate::error::{CoreError, Result};
use crate::schedule::{CommittedTask, PendingTask, Roster, Student, TaskDraft};
use crate::scheduler::{OccupancyResolver, SchedulerConfig, SequenceOutcome, SlotFinder, SlotRequest, TaskSequencer};
use crate::storage::CalendarStore;

pub struct Planner<S> {
    store: S,
    roster: Roster,
    config: SchedulerConfig,
}

impl<S: CalendarStore> Planner<S> {
    pub fn new(store: S, roster: Roster, config: SchedulerConfig) -> Self {
        Self {
            store,
            roster,
            config,
        }
    }

    /// Same planner with a different window or lookahead.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Login-by-id lookup.
    pub fn lookup_student(&self, id: &str) -> Option<&Student> {
        self.roster.lookup(id.trim())
    }

    /// Validate a draft into a pending task. Nothing is scheduled yet.
    pub fn add_pending_task(&self, draft: TaskDraft) -> Result<PendingTask> {
        let task = PendingTask::from_draft(draft)?;
        info!(id = %task.id, title = %task.title, date = %task.requested_date, weight = task.weight, "task queued");
        Ok(task)
    }

    /// Place a batch and persist the calendar.
    ///
    /// Tasks that find no slot are reported in the outcome; only storage
    /// failures abort the batch.
    pub fn generate_and_commit(
        &mut self,
        batch: Vec<PendingTask>,
        default_owner: Option<&str>,
    ) -> Result<SequenceOutcome> {
        let mut calendar = self.store.load_all()?;
        let outcome = TaskSequencer::new(&self.roster, self.config).sequence(batch, &calendar, default_owner);

        calendar.extend(outcome.placed.iter().cloned());
        self.store.save_all(&calendar)?;
        info!(placed = outcome.placed.len(), failed = outcome.failed.len(), "batch committed");
        Ok(outcome)
    }

    /// All committed tasks ordered by date, then start.
    pub fn list_committed(&self) -> Result<Vec<CommittedTask>> {
        let mut tasks = self.store.load_all()?;
        tasks.sort_by_key(|t| (t.date, t.start_minute));
        Ok(tasks)
    }

    /// Remove a committed task and return it.
    pub fn delete_committed(&mut self, id: &str) -> Result<CommittedTask> {
        let mut tasks = self.store.load_all()?;
        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        let removed = tasks.remove(pos);
        self.store.save_all(&tasks)?;
        info!(id, title = %removed.title, "task deleted");
        Ok(removed)
    }

    /// Move a committed task to the first free slot from `target` onward.
    ///
    /// The task's old slot does not count as busy. On failure the calendar
    /// is left untouched.
    pub fn reassign_committed(
        &mut self,
        id: &str,
        target: DateInput,
        default_owner: Option<&str>,
    ) -> Result<CommittedTask> {
        let start_date = target.resolve()?;
        let mut tasks = self.store.load_all()?;
        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;

        let owner = tasks[pos]
            .owner
            .clone()
            .or_else(|| default_owner.map(String::from));
        let request = SlotRequest {
            owner: owner.as_deref(),
            start_date,
            duration_minutes: tasks[pos].duration_minutes,
            exclude_task_id: Some(id),
        };
        let slot = SlotFinder::from_config(&self.config)
            .find(&OccupancyResolver::new(&self.roster, &tasks), &request)
            .ok_or_else(|| CoreError::NoSlotFound {
                task_id: id.to_string(),
                max_days_ahead: self.config.max_days_ahead,
            })?;

        let mut moved = tasks.remove(pos);
        moved.reschedule(slot.date, slot.interval);
        tasks.push(moved.clone());
        self.store.save_all(&tasks)?;
        info!(id, date = %slot.date, slot = %slot.interval, "task reassigned");
        Ok(moved)
    }
}
