//! Wall-clock arithmetic.
//!
//! Times of day are plain minute offsets from midnight (`u32`). Strings use
//! the `HH:MM` form everywhere; `24:00` is accepted as the exclusive end of
//! the day.

pub mod weekday;

pub use weekday::{parse_weekday, resolve_weekday, DateInput, WeekSpec};

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Minutes in a day; exclusive upper bound for interval ends.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse `HH:MM` into minutes from midnight.
pub fn parse_hm(hm: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidTime(hm.to_string());

    let (h, m) = hm.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let minutes: u32 = m.parse().map_err(|_| invalid())?;

    if m.len() != 2 || minutes >= 60 || hours > 24 {
        return Err(invalid());
    }
    let total = hours * 60 + minutes;
    if total > MINUTES_PER_DAY {
        return Err(invalid());
    }
    Ok(total)
}

/// Format minutes from midnight as `HH:MM`.
pub fn format_hm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Serde adapter storing a minute offset as `HH:MM`.
pub mod hm {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hm(*minutes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hm(&s).map_err(serde::de::Error::custom)
    }
}
