//! Course and section records plus the day/time value types they are built
//! from.
mod course;
mod days;
mod meeting;
mod section;
mod time;

pub use course::{Course, CourseId};
pub use days::{Days, Weekday};
pub use meeting::Meeting;
pub use section::Section;
pub use time::TimeOfDay;
