//! Week-of-month date input ("the 2nd Tuesday of March 2026").

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Parse a weekday name.
///
/// Accepts English full and short names and the Indonesian names used by
/// class timetables (`senin` … `minggu`), case-insensitively.
pub fn parse_weekday(name: &str) -> Result<Weekday, ValidationError> {
    let weekday = match name.trim().to_lowercase().as_str() {
        "monday" | "mon" | "senin" => Weekday::Mon,
        "tuesday" | "tue" | "selasa" => Weekday::Tue,
        "wednesday" | "wed" | "rabu" => Weekday::Wed,
        "thursday" | "thu" | "kamis" => Weekday::Thu,
        "friday" | "fri" | "jumat" => Weekday::Fri,
        "saturday" | "sat" | "sabtu" => Weekday::Sat,
        "sunday" | "sun" | "minggu" => Weekday::Sun,
        _ => return Err(ValidationError::UnknownWeekday(name.to_string())),
    };
    Ok(weekday)
}

/// Date of the `ordinal`-th (1-based) `weekday` in `month` of `year`.
///
/// Returns `None` for an invalid month/year or when the month has fewer
/// than `ordinal` such weekdays.
pub fn resolve_weekday(weekday: Weekday, ordinal: u32, month: u32, year: i32) -> Option<NaiveDate> {
    if ordinal == 0 {
        return None;
    }
    let mut day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut count = 0;
    while day.month() == month {
        if day.weekday() == weekday {
            count += 1;
            if count == ordinal {
                return Some(day);
            }
        }
        day = day.succ_opt()?;
    }
    None
}

/// Like [`resolve_weekday`], taking the weekday by name.
pub fn resolve_weekday_name(name: &str, ordinal: u32, month: u32, year: i32) -> Option<NaiveDate> {
    let weekday = parse_weekday(name).ok()?;
    resolve_weekday(weekday, ordinal, month, year)
}

/// A week-of-month date specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSpec {
    pub weekday: Weekday,
    /// 1-based occurrence of `weekday` within the month
    pub ordinal: u32,
    pub month: u32,
    pub year: i32,
}

impl WeekSpec {
    /// Build from user input, checking ranges up front.
    pub fn parse(weekday: &str, ordinal: u32, month: u32, year: i32) -> Result<Self, ValidationError> {
        let weekday = parse_weekday(weekday)?;
        if !(1..=5).contains(&ordinal) {
            return Err(ValidationError::OutOfRange {
                field: "week".into(),
                value: ordinal.into(),
                min: 1,
                max: 5,
            });
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::OutOfRange {
                field: "month".into(),
                value: month.into(),
                min: 1,
                max: 12,
            });
        }
        Ok(Self {
            weekday,
            ordinal,
            month,
            year,
        })
    }

    pub fn resolve(&self) -> Option<NaiveDate> {
        resolve_weekday(self.weekday, self.ordinal, self.month, self.year)
    }
}

/// Either an explicit date or a week-of-month spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateInput {
    On(NaiveDate),
    Week(WeekSpec),
}

impl DateInput {
    /// Resolve to a concrete date; a week spec that does not exist is invalid input.
    pub fn resolve(&self) -> Result<NaiveDate, ValidationError> {
        match self {
            DateInput::On(date) => Ok(*date),
            DateInput::Week(spec) => spec.resolve().ok_or_else(|| ValidationError::NoSuchWeekday {
                weekday: spec.weekday.to_string(),
                ordinal: spec.ordinal,
                month: spec.month,
                year: spec.year,
            }),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::On(date)
    }
}
