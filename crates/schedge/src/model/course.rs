use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScheduleError;

/// Identifier of a persisted course.
///
/// Sections hold one of these instead of the course itself; resolving it is
/// up to a [`CourseLookup`](crate::catalog::CourseLookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i64);

impl CourseId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry, e.g. `CS-101` / "Intro to Computer Science".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CourseFields")]
pub struct Course {
    abbrev: String,
    name: String,
}

#[derive(Deserialize)]
struct CourseFields {
    abbrev: String,
    name: String,
}

impl TryFrom<CourseFields> for Course {
    type Error = ScheduleError;

    fn try_from(fields: CourseFields) -> Result<Self, Self::Error> {
        Course::new(fields.abbrev, fields.name)
    }
}

impl Course {
    /// Creates a course. The abbreviation must contain a non-whitespace
    /// character; uniqueness is not checked here.
    pub fn new(abbrev: impl Into<String>, name: impl Into<String>) -> Result<Self, ScheduleError> {
        let abbrev = abbrev.into();
        if abbrev.trim().is_empty() {
            return Err(ScheduleError::EmptyAbbrev);
        }
        Ok(Self {
            abbrev,
            name: name.into(),
        })
    }

    pub fn abbrev(&self) -> &str {
        &self.abbrev
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.abbrev, self.name)
    }
}
