//! Schedule types: study tasks, students and class timetables.

mod roster;
mod task;

pub use roster::{ClassGrid, Roster, Student};
pub use task::{
    new_task_id, CommittedTask, Difficulty, PendingTask, Priority, TaskCategory, TaskDraft,
};
