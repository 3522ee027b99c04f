//! Data model for a course-scheduling backend: catalog courses, the sections
//! offered for them, and the weekday/time values their meeting patterns are
//! made of.

pub mod catalog;
pub mod db;
pub mod error;
pub mod model;

pub use catalog::{Catalog, CourseLookup};
pub use error::ScheduleError;
pub use model::{Course, CourseId, Days, Meeting, Section, TimeOfDay, Weekday};
