//! Persistence of the shared calendar of committed tasks.

use std::path::{Path, PathBuf};

use super::{data_dir, read_json, write_json};
use crate::error::StoreError;
use crate::schedule::CommittedTask;

/// Calendar file name inside the data directory.
const CALENDAR_FILE: &str = "calendar.json";

/// Load-all / save-all access to committed tasks.
///
/// The calendar is read in full before any scheduling decision and written
/// in full after each batch or mutation.
pub trait CalendarStore {
    fn load_all(&self) -> Result<Vec<CommittedTask>, StoreError>;

    fn save_all(&mut self, tasks: &[CommittedTask]) -> Result<(), StoreError>;
}

/// Calendar stored as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonCalendarStore {
    path: PathBuf,
}

impl JsonCalendarStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Calendar in the default data directory.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::new(data_dir()?.join(CALENDAR_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CalendarStore for JsonCalendarStore {
    fn load_all(&self) -> Result<Vec<CommittedTask>, StoreError> {
        read_json(&self.path)
    }

    fn save_all(&mut self, tasks: &[CommittedTask]) -> Result<(), StoreError> {
        write_json(&self.path, tasks)
    }
}

/// In-memory calendar for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryCalendarStore {
    tasks: Vec<CommittedTask>,
}

impl MemoryCalendarStore {
    pub fn new(tasks: Vec<CommittedTask>) -> Self {
        Self { tasks }
    }
}

impl CalendarStore for MemoryCalendarStore {
    fn load_all(&self) -> Result<Vec<CommittedTask>, StoreError> {
        Ok(self.tasks.clone())
    }

    fn save_all(&mut self, tasks: &[CommittedTask]) -> Result<(), StoreError> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn task(id: &str) -> CommittedTask {
        CommittedTask {
            id: id.into(),
            title: "Algebra".into(),
            category: Default::default(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            start_minute: 1140,
            end_minute: 1200,
            duration_minutes: 60,
            owner: Some("16725186".into()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn json_store_starts_empty_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonCalendarStore::new(dir.path().join(CALENDAR_FILE));
        assert!(store.load_all().unwrap().is_empty());

        store.save_all(&[task("a"), task("b")]).unwrap();
        let reopened = JsonCalendarStore::new(store.path());
        let ids: Vec<String> = reopened.load_all().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn json_store_reads_record_without_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CALENDAR_FILE);
        std::fs::write(
            &path,
            r#"[{"id": "1a2b3c4d", "title": "Kalkulus", "date": "2026-10-19",
                 "start": "19:00", "end": "20:30", "duration_minutes": 90,
                 "owner": null, "created_at": "2026-10-18T10:00:00Z"}]"#,
        )
        .unwrap();
        let tasks = JsonCalendarStore::new(&path).load_all().unwrap();
        assert_eq!(tasks[0].start_minute, 1140);
        assert_eq!(tasks[0].end_minute, 1230);
    }

    #[test]
    fn memory_store_replaces_contents() {
        let mut store = MemoryCalendarStore::new(vec![task("a")]);
        store.save_all(&[task("b")]).unwrap();
        assert_eq!(store.load_all().unwrap()[0].id, "b");
    }
}
