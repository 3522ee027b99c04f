/// Row types mirroring the `courses` and `sections` tables

use crate::error::ScheduleError;
use crate::model::{Course, CourseId, Days, Section, TimeOfDay};

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub course_id: i64,
    pub abbrev: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionRow {
    pub course_id: i64,
    pub days: Days,
    pub time: TimeOfDay,
    pub days2: Option<Days>,
    pub time2: Option<TimeOfDay>,
}

impl TryFrom<SectionRow> for Section {
    type Error = ScheduleError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        Section::from_parts(
            CourseId::new(row.course_id),
            row.days,
            row.time,
            row.days2,
            row.time2,
        )
    }
}

impl CourseRow {
    pub fn new(id: CourseId, course: &Course) -> Self {
        Self {
            course_id: id.get(),
            abbrev: course.abbrev().to_string(),
            name: course.name().to_string(),
        }
    }

    /// Converts the row into a catalog entry, checking the abbreviation.
    pub fn into_course(self) -> Result<(CourseId, Course), ScheduleError> {
        Ok((CourseId::new(self.course_id), Course::new(self.abbrev, self.name)?))
    }
}

impl From<&Section> for SectionRow {
    fn from(section: &Section) -> Self {
        Self {
            course_id: section.course_id().get(),
            days: section.days(),
            time: section.time(),
            days2: section.days2(),
            time2: section.time2(),
        }
    }
}
