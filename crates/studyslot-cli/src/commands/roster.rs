//! Roster inspection commands for CLI.

use clap::Subcommand;

use super::{load_config, load_configured_roster, CmdResult};

#[derive(Subcommand)]
pub enum RosterAction {
    /// List known students
    List,
    /// Show one student's class timetable
    Show {
        /// Student id
        id: String,
    },
}

pub fn run(action: RosterAction) -> CmdResult {
    let config = load_config()?;
    let roster = load_configured_roster(&config)?;

    match action {
        RosterAction::List => {
            for student in roster.students() {
                println!("{}\t{}", student.id, student.name);
            }
        }
        RosterAction::Show { id } => {
            let student = roster
                .lookup(id.trim())
                .ok_or_else(|| format!("student id not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(student)?);
        }
    }
    Ok(())
}
