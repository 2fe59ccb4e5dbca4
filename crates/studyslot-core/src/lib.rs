//! # Studyslot Core Library
//!
//! This library provides the scheduling logic for Studyslot, a planner that
//! puts study sessions into free evening time around a student's weekly
//! class timetable and the sessions already on the calendar. The `studyslot`
//! CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Clock**: `HH:MM` and ISO date parsing, week-of-month date input
//! - **Timeline**: validated minute intervals and interval merging
//! - **Scheduler**: occupancy, forward slot search, greedy batch sequencing
//! - **Storage**: JSON calendar/queue files, TOML configuration
//!
//! ## Key Components
//!
//! - [`Planner`]: caller-facing operations over a [`CalendarStore`]
//! - [`TaskSequencer`]: orders and places a batch of pending tasks
//! - [`SlotFinder`]: first free slot on or after a date
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod export;
pub mod planner;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod timeline;

pub use clock::{DateInput, WeekSpec};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use planner::Planner;
pub use schedule::{CommittedTask, PendingTask, Roster, Student, TaskCategory, TaskDraft};
pub use scheduler::{
    OccupancyResolver, SchedulerConfig, SequenceOutcome, Slot, SlotFinder, SlotRequest, StudyWindow,
    TaskSequencer,
};
pub use storage::{CalendarStore, Config, JsonCalendarStore, MemoryCalendarStore, QueueStore};
pub use timeline::{merge_intervals, TimeInterval};
