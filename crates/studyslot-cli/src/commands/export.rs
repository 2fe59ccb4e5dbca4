//! Calendar export commands for CLI.

use std::path::PathBuf;

use clap::Subcommand;
use studyslot_core::export::{to_csv, to_json};

use super::{load_config, open_planner, CmdResult};

#[derive(Subcommand)]
pub enum ExportAction {
    /// Export committed tasks as CSV
    Csv {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Export committed tasks as JSON
    Json {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

pub fn run(action: ExportAction) -> CmdResult {
    let config = load_config()?;
    let planner = open_planner(&config, config.scheduler_config()?)?;
    let tasks = planner.list_committed()?;

    let (content, output) = match action {
        ExportAction::Csv { output } => (to_csv(&tasks), output),
        ExportAction::Json { output } => (to_json(&tasks)?, output),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Exported {} task(s) to {}", tasks.len(), path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
