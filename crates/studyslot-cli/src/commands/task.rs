//! Pending task queue commands for CLI.

use clap::Subcommand;
use studyslot_core::clock::parse_iso_date;
use studyslot_core::{QueueStore, TaskCategory, TaskDraft};

use super::{load_config, open_planner, CmdResult, DateArgs};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Queue a new study task
    Add {
        /// Task title
        title: String,
        /// Category: assignment, exam, lab or other
        #[arg(long, default_value = "assignment")]
        category: String,
        /// Priority 1-4
        #[arg(long, default_value_t = 2)]
        priority: u8,
        /// Difficulty 1-4 (30/60/90/120 minutes of study)
        #[arg(long, default_value_t = 2)]
        difficulty: u8,
        #[command(flatten)]
        when: DateArgs,
        /// Deadline (YYYY-MM-DD); also the requested date when none is given
        #[arg(long)]
        deadline: Option<String>,
        /// Student id whose classes block time (default: logged-in student)
        #[arg(long)]
        owner: Option<String>,
    },
    /// List queued tasks
    List,
    /// Drop every queued task
    Clear,
}

pub fn run(action: TaskAction) -> CmdResult {
    let queue = QueueStore::open()?;

    match action {
        TaskAction::Add {
            title,
            category,
            priority,
            difficulty,
            when,
            deadline,
            owner,
        } => {
            let config = load_config()?;
            let draft = TaskDraft {
                title,
                category: category.parse::<TaskCategory>()?,
                priority,
                difficulty,
                date: when.to_input()?,
                deadline: deadline.as_deref().map(parse_iso_date).transpose()?,
                owner: owner.or_else(|| config.owner_id().map(String::from)),
            };
            let planner = open_planner(&config, config.scheduler_config()?)?;
            let task = planner.add_pending_task(draft)?;
            queue.push(task.clone())?;
            println!("Task queued: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List => {
            let tasks = queue.load()?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Clear => {
            let count = queue.load()?.len();
            queue.clear()?;
            println!("Cleared {count} queued task(s)");
        }
    }
    Ok(())
}
