//! Error types for the schedule data model.

use thiserror::Error;

use crate::model::CourseId;

/// Errors that can occur while building, decoding, or checking schedule data.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A days string contained an unknown or repeated weekday code
    #[error("Invalid days: {message}")]
    InvalidDays { message: String },

    /// Hour/minute out of range, or malformed `HH:MM` text
    #[error("Invalid time of day: {message}")]
    InvalidTime { message: String },

    /// Meeting pattern text or values that do not form a meeting
    #[error("Invalid meeting pattern: {message}")]
    InvalidMeeting { message: String },

    /// Course abbreviations must be non-empty
    #[error("Course abbreviation must not be empty")]
    EmptyAbbrev,

    /// Exactly one of `days2` / `time2` was given
    #[error("Second meeting is incomplete: days2 present = {has_days}, time2 present = {has_time}")]
    UnpairedSecondMeeting { has_days: bool, has_time: bool },

    /// A section references a course id that is not in the catalog
    #[error("Section references unknown course {course_id}")]
    UnknownCourse { course_id: CourseId },

    /// Two courses were registered under the same id
    #[error("Duplicate course id {course_id}")]
    DuplicateCourse { course_id: CourseId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl ScheduleError {
    /// Returns true if this error comes from malformed field values rather
    /// than from relationships between records.
    pub fn is_malformed_value(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidDays { .. }
                | ScheduleError::InvalidTime { .. }
                | ScheduleError::InvalidMeeting { .. }
                | ScheduleError::EmptyAbbrev
                | ScheduleError::UnpairedSecondMeeting { .. }
        )
    }

    /// Returns true if this error is a referential-integrity problem.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            ScheduleError::UnknownCourse { .. } | ScheduleError::DuplicateCourse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
