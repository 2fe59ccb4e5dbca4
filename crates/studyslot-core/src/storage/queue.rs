//! Pending-task queue kept between CLI invocations.

use std::path::PathBuf;

use super::{data_dir, read_json, write_json};
use crate::error::StoreError;
use crate::schedule::PendingTask;

const QUEUE_FILE: &str = "queue.json";

/// JSON-file backed working batch.
#[derive(Debug, Clone)]
pub struct QueueStore {
    path: PathBuf,
}

impl QueueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::new(data_dir()?.join(QUEUE_FILE)))
    }

    pub fn load(&self) -> Result<Vec<PendingTask>, StoreError> {
        read_json(&self.path)
    }

    pub fn save(&self, tasks: &[PendingTask]) -> Result<(), StoreError> {
        write_json(&self.path, tasks)
    }

    /// Append one task.
    pub fn push(&self, task: PendingTask) -> Result<(), StoreError> {
        let mut tasks = self.load()?;
        tasks.push(task);
        self.save(&tasks)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DateInput;
    use crate::schedule::TaskDraft;
    use chrono::NaiveDate;

    #[test]
    fn push_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let queue = QueueStore::new(dir.path().join(QUEUE_FILE));
        let task = PendingTask::from_draft(TaskDraft {
            title: "Statistics".into(),
            priority: 2,
            difficulty: 3,
            date: Some(DateInput::On(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())),
            ..Default::default()
        })
        .unwrap();

        queue.push(task.clone()).unwrap();
        assert_eq!(queue.load().unwrap(), vec![task]);

        queue.clear().unwrap();
        assert!(queue.load().unwrap().is_empty());
    }
}
