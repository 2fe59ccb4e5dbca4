//! Minute-of-day intervals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::{format_hm, parse_hm, MINUTES_PER_DAY};
use crate::error::ValidationError;

/// A half-open busy or free range `[start, end)` within one day, in minutes.
///
/// Serialized as `"HH:MM-HH:MM"`, the form class timetables are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeInterval {
    start: u32,
    end: u32,
}

impl TimeInterval {
    /// Create an interval; `start < end <= 1440`.
    pub fn new(start: u32, end: u32) -> Result<Self, ValidationError> {
        if start >= end || end > MINUTES_PER_DAY {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Grow the end to `end` if that lies further right.
    pub(crate) fn extend_end(&mut self, end: u32) {
        if end > self.end {
            self.end = end;
        }
    }

    /// Overlap test; touching intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_hm(self.start), format_hm(self.end))
    }
}

impl FromStr for TimeInterval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| ValidationError::InvalidTime(s.to_string()))?;
        Self::new(parse_hm(start)?, parse_hm(end)?)
    }
}

impl TryFrom<String> for TimeInterval {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeInterval> for String {
    fn from(interval: TimeInterval) -> Self {
        interval.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timetable_form() {
        let iv: TimeInterval = "08:00-10:00".parse().unwrap();
        assert_eq!((iv.start(), iv.end()), (480, 600));
        assert_eq!(iv.duration_minutes(), 120);
        assert_eq!(iv.to_string(), "08:00-10:00");
    }

    #[test]
    fn rejects_empty_or_inverted_ranges() {
        assert!(TimeInterval::new(600, 600).is_err());
        assert!(TimeInterval::new(600, 480).is_err());
        assert!(TimeInterval::new(1400, 1441).is_err());
        assert!("10:00-08:00".parse::<TimeInterval>().is_err());
        assert!("10:00".parse::<TimeInterval>().is_err());
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = TimeInterval::new(480, 600).unwrap();
        let b = TimeInterval::new(600, 660).unwrap();
        let c = TimeInterval::new(590, 620).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn serializes_as_string() {
        let iv = TimeInterval::new(1140, 1200).unwrap();
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(json, "\"19:00-20:00\"");
        let back: TimeInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv);
        assert!(serde_json::from_str::<TimeInterval>("\"20:00-19:00\"").is_err());
    }
}
