//! Pending and committed study tasks.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::{self, DateInput};
use crate::error::ValidationError;
use crate::timeline::TimeInterval;

/// Kind of study work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Homework or coursework
    #[default]
    Assignment,
    /// Exam preparation
    Exam,
    /// Practical / lab report
    Lab,
    Other,
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment => write!(f, "assignment"),
            Self::Exam => write!(f, "exam"),
            Self::Lab => write!(f, "lab"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "assignment" | "tugas" => Ok(Self::Assignment),
            "exam" | "ujian" => Ok(Self::Exam),
            "lab" | "praktikum" => Ok(Self::Lab),
            "other" | "lainnya" => Ok(Self::Other),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

fn check_level(field: &str, value: u8) -> Result<u8, ValidationError> {
    if (1..=4).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field: field.into(),
            value: value.into(),
            min: 1,
            max: 4,
        })
    }
}

/// Priority from 1 (low) to 4 (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        check_level("priority", value).map(Self)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p.0
    }
}

/// Difficulty from 1 (easy) to 4 (hard); decides how long a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        check_level("difficulty", value).map(Self)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Study session length: 30 minutes per difficulty step.
    pub fn study_minutes(&self) -> u32 {
        match self.0 {
            1 => 30,
            2 => 60,
            3 => 90,
            _ => 120,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

/// Short random task id (8 hex characters).
pub fn new_task_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// Raw user input for a new pending task.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub category: TaskCategory,
    pub priority: u8,
    pub difficulty: u8,
    /// Requested date; falls back to the deadline when absent
    pub date: Option<DateInput>,
    pub deadline: Option<NaiveDate>,
    pub owner: Option<String>,
}

/// A task waiting in the queue to be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTask {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    pub requested_date: NaiveDate,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub difficulty: Difficulty,
    /// priority + difficulty
    pub weight: u8,
    pub duration_minutes: u32,
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PendingTask {
    /// Validate a draft and derive weight and duration.
    pub fn from_draft(draft: TaskDraft) -> Result<Self, ValidationError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyField("title".into()));
        }
        let priority = Priority::new(draft.priority)?;
        let difficulty = Difficulty::new(draft.difficulty)?;

        let requested_date = match (draft.date, draft.deadline) {
            (Some(input), _) => input.resolve()?,
            (None, Some(deadline)) => deadline,
            (None, None) => return Err(ValidationError::MissingDate),
        };

        Ok(Self {
            id: new_task_id(),
            title,
            category: draft.category,
            requested_date,
            deadline: draft.deadline,
            priority,
            difficulty,
            weight: priority.value() + difficulty.value(),
            duration_minutes: difficulty.study_minutes(),
            owner: draft.owner.filter(|o| !o.trim().is_empty()),
            created_at: Utc::now(),
        })
    }
}

/// A task placed in the shared calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommittedTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: TaskCategory,
    pub date: NaiveDate,
    #[serde(rename = "start", with = "clock::hm")]
    pub start_minute: u32,
    #[serde(rename = "end", with = "clock::hm")]
    pub end_minute: u32,
    pub duration_minutes: u32,
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CommittedTask {
    /// Commit a pending task into `slot` on `date`.
    pub fn place(task: &PendingTask, owner: Option<String>, date: NaiveDate, slot: TimeInterval) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            category: task.category,
            date,
            start_minute: slot.start(),
            end_minute: slot.end(),
            duration_minutes: task.duration_minutes,
            owner,
            created_at: Utc::now(),
        }
    }

    /// Busy interval of this task; `None` for a malformed stored record.
    pub fn interval(&self) -> Option<TimeInterval> {
        TimeInterval::new(self.start_minute, self.end_minute).ok()
    }

    /// Move to a new slot, keeping identity and metadata.
    pub fn reschedule(&mut self, date: NaiveDate, slot: TimeInterval) {
        self.date = date;
        self.start_minute = slot.start();
        self.end_minute = slot.end();
    }
}
