pub mod config;
pub mod export;
pub mod roster;
pub mod schedule;
pub mod session;
pub mod task;

use chrono::{Datelike, Local};
use clap::Args;
use studyslot_core::clock::parse_iso_date;
use studyslot_core::storage::{data_dir, load_roster};
use studyslot_core::{Config, DateInput, JsonCalendarStore, Planner, Roster, SchedulerConfig, ValidationError, WeekSpec};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Either `--date` or a week-of-month spec.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Explicit date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "weekday")]
    pub date: Option<String>,
    /// Weekday name (monday, senin, ...) for week-of-month input
    #[arg(long)]
    pub weekday: Option<String>,
    /// Which occurrence of the weekday in the month (1-5, default: 1)
    #[arg(long, requires = "weekday")]
    pub week: Option<u32>,
    /// Month for week-of-month input (default: current month)
    #[arg(long, requires = "weekday")]
    pub month: Option<u32>,
    /// Year for week-of-month input (default: current year)
    #[arg(long, requires = "weekday")]
    pub year: Option<i32>,
}

impl DateArgs {
    /// `None` when neither form was given.
    pub fn to_input(&self) -> Result<Option<DateInput>, ValidationError> {
        if let Some(date) = &self.date {
            return Ok(Some(DateInput::On(parse_iso_date(date)?)));
        }
        let Some(weekday) = &self.weekday else {
            return Ok(None);
        };
        let today = Local::now().date_naive();
        let spec = WeekSpec::parse(
            weekday,
            self.week.unwrap_or(1),
            self.month.unwrap_or(today.month()),
            self.year.unwrap_or(today.year()),
        )?;
        Ok(Some(DateInput::Week(spec)))
    }
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    Ok(Config::load()?)
}

pub fn load_configured_roster(config: &Config) -> Result<Roster, Box<dyn std::error::Error>> {
    let dir = data_dir()?;
    Ok(load_roster(config.roster_path(&dir).as_deref())?)
}

/// Planner over the calendar file in the data directory.
pub fn open_planner(
    config: &Config,
    scheduler: SchedulerConfig,
) -> Result<Planner<JsonCalendarStore>, Box<dyn std::error::Error>> {
    let roster = load_configured_roster(config)?;
    Ok(Planner::new(JsonCalendarStore::open()?, roster, scheduler))
}
