//! Students and their fixed weekly class timetables.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::timeline::TimeInterval;

/// Weekly class timetable, keyed by weekday (0 = Monday ... 6 = Sunday).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassGrid(BTreeMap<u8, Vec<TimeInterval>>);

impl ClassGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class on `weekday` (0 = Monday).
    pub fn with_class(mut self, weekday: u8, interval: TimeInterval) -> Self {
        self.0.entry(weekday).or_default().push(interval);
        self
    }

    /// Classes held on the weekday of `date`.
    pub fn classes_on(&self, date: NaiveDate) -> &[TimeInterval] {
        let weekday = date.weekday().num_days_from_monday() as u8;
        self.0.get(&weekday).map(Vec::as_slice).unwrap_or(&[])
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.0.keys().find(|&&day| day > 6) {
            Some(&day) => Err(ValidationError::OutOfRange {
                field: "weekday".into(),
                value: day.into(),
                min: 0,
                max: 6,
            }),
            None => Ok(()),
        }
    }
}

/// A student who can log in and whose classes block study time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub class_grid: ClassGrid,
}

/// Class-grid reference data for every known student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: BTreeMap<String, Student>,
}

impl Roster {
    pub fn new(students: impl IntoIterator<Item = Student>) -> Self {
        Self {
            students: students.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Check that every weekday key is in range and ids match their keys.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (key, student) in &self.students {
            if key != &student.id {
                return Err(ValidationError::InvalidValue {
                    field: format!("roster.{key}.id"),
                    message: format!("does not match key (found '{}')", student.id),
                });
            }
            student.class_grid.validate()?;
        }
        Ok(())
    }

    /// Built-in demo roster.
    pub fn demo() -> Self {
        fn grid(days: &[(u8, &[&str])]) -> ClassGrid {
            let mut grid = ClassGrid::new();
            for (day, slots) in days {
                for slot in *slots {
                    if let Ok(iv) = slot.parse() {
                        grid = grid.with_class(*day, iv);
                    }
                }
            }
            grid
        }

        Self::new([
            Student {
                id: "16725186".into(),
                name: "Jean Fide Tjahjamuljo".into(),
                class_grid: grid(&[
                    (0, &["08:00-10:00", "13:00-15:00"]),
                    (1, &["10:00-12:00"]),
                    (2, &["08:00-10:00", "15:00-17:00"]),
                    (3, &["13:00-15:00"]),
                    (4, &["10:00-12:00"]),
                ]),
            },
            Student {
                id: "16725193".into(),
                name: "Farel Ahmad".into(),
                class_grid: grid(&[
                    (0, &["10:00-12:00"]),
                    (1, &["08:00-10:00", "13:00-15:00"]),
                    (2, &["10:00-12:00"]),
                    (3, &["08:00-10:00", "15:00-17:00"]),
                    (4, &["13:00-15:00"]),
                ]),
            },
            Student {
                id: "16725305".into(),
                name: "Nindya Cettakirana Bintoro".into(),
                class_grid: grid(&[
                    (0, &["08:00-10:00"]),
                    (1, &["10:00-12:00", "15:00-17:00"]),
                    (2, &["13:00-15:00"]),
                    (3, &["08:00-10:00", "13:00-15:00"]),
                    (4, &["10:00-12:00"]),
                ]),
            },
        ])
    }
}
