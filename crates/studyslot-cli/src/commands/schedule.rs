//! Schedule generation and calendar maintenance commands for CLI.

use clap::Subcommand;
use studyslot_core::{QueueStore, SchedulerConfig, StudyWindow};
use tracing::debug;

use super::{load_config, open_planner, CmdResult, DateArgs};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Place every queued task and commit the result
    Generate {
        /// Study window start (HH:MM), overrides config
        #[arg(long)]
        window_start: Option<String>,
        /// Study window end (HH:MM), overrides config
        #[arg(long)]
        window_end: Option<String>,
        /// Days to search forward, overrides config
        #[arg(long)]
        max_days: Option<u32>,
    },
    /// List committed tasks by date and start time
    List,
    /// Delete a committed task
    Delete {
        /// Task ID
        id: String,
    },
    /// Move a committed task to the first free slot from a new date
    Reassign {
        /// Task ID
        id: String,
        #[command(flatten)]
        when: DateArgs,
    },
}

pub fn run(action: ScheduleAction) -> CmdResult {
    let config = load_config()?;
    let base = config.scheduler_config()?;
    let owner = config.owner_id();

    match action {
        ScheduleAction::Generate {
            window_start,
            window_end,
            max_days,
        } => {
            let window = StudyWindow::parse(
                window_start.as_deref().unwrap_or(&config.scheduler.window_start),
                window_end.as_deref().unwrap_or(&config.scheduler.window_end),
            )?;
            let scheduler = SchedulerConfig::new(window, max_days.unwrap_or(base.max_days_ahead))?;

            let queue = QueueStore::open()?;
            let batch = queue.load()?;
            if batch.is_empty() {
                println!("Queue is empty, nothing to schedule");
                return Ok(());
            }

            debug!(window = %scheduler.window, max_days = scheduler.max_days_ahead, tasks = batch.len(), "generating schedule");
            let mut planner = open_planner(&config, scheduler)?;
            let outcome = planner.generate_and_commit(batch, owner)?;
            // unplaced tasks are reported, not kept
            queue.clear()?;

            println!("Placed {}, failed {}", outcome.placed.len(), outcome.failed.len());
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        ScheduleAction::List => {
            let planner = open_planner(&config, base)?;
            let tasks = planner.list_committed()?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        ScheduleAction::Delete { id } => {
            let mut planner = open_planner(&config, base)?;
            let removed = planner.delete_committed(&id)?;
            println!("Task deleted: {} ({})", removed.id, removed.title);
        }
        ScheduleAction::Reassign { id, when } => {
            let target = when.to_input()?.ok_or("a target date is required: use --date or --weekday")?;
            let mut planner = open_planner(&config, base)?;
            let moved = planner.reassign_committed(&id, target, owner)?;
            println!("Task reassigned: {}", moved.id);
            println!("{}", serde_json::to_string_pretty(&moved)?);
        }
    }
    Ok(())
}
