use serde::{Deserialize, Serialize};

use super::{Course, CourseId, Days, Meeting, TimeOfDay};
use crate::catalog::CourseLookup;
use crate::error::ScheduleError;

/// One scheduled offering of a course in a term.
///
/// A section always has a primary meeting pattern and may have a second one
/// (e.g. a lab distinct from the lecture). The second pattern's days and time
/// are held together, so one can never be present without the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SectionWire", into = "SectionWire")]
pub struct Section {
    course_id: CourseId,
    primary: Meeting,
    secondary: Option<Meeting>,
}

impl Section {
    pub fn new(course_id: CourseId, primary: Meeting) -> Self {
        Self {
            course_id,
            primary,
            secondary: None,
        }
    }

    pub fn with_second_meeting(course_id: CourseId, primary: Meeting, secondary: Meeting) -> Self {
        Self {
            course_id,
            primary,
            secondary: Some(secondary),
        }
    }

    /// Builds a section from the flat `days`/`time`/`days2`/`time2` view.
    ///
    /// # Returns
    /// * `Err(UnpairedSecondMeeting)` - exactly one of `days2`/`time2` given
    /// * `Err(InvalidMeeting)` - a days set is empty
    pub fn from_parts(
        course_id: CourseId,
        days: Days,
        time: TimeOfDay,
        days2: Option<Days>,
        time2: Option<TimeOfDay>,
    ) -> Result<Self, ScheduleError> {
        let primary = Meeting::new(days, time)?;
        let secondary = match (days2, time2) {
            (Some(d), Some(t)) => Some(Meeting::new(d, t)?),
            (None, None) => None,
            (d, t) => {
                return Err(ScheduleError::UnpairedSecondMeeting {
                    has_days: d.is_some(),
                    has_time: t.is_some(),
                })
            }
        };
        Ok(Self {
            course_id,
            primary,
            secondary,
        })
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn primary(&self) -> Meeting {
        self.primary
    }

    pub fn secondary(&self) -> Option<Meeting> {
        self.secondary
    }

    pub fn days(&self) -> Days {
        self.primary.days()
    }

    pub fn time(&self) -> TimeOfDay {
        self.primary.time()
    }

    pub fn days2(&self) -> Option<Days> {
        self.secondary.map(|m| m.days())
    }

    pub fn time2(&self) -> Option<TimeOfDay> {
        self.secondary.map(|m| m.time())
    }

    /// The one or two meeting patterns, primary first.
    pub fn meetings(&self) -> impl Iterator<Item = Meeting> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// Looks up the owning course. `None` means the id is dangling for this
    /// lookup.
    pub fn resolve<'a, L: CourseLookup + ?Sized>(&self, lookup: &'a L) -> Option<&'a Course> {
        lookup.course(self.course_id)
    }
}

/// Flat wire shape; the second meeting is two independently nullable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionWire {
    course_id: CourseId,
    days: Days,
    time: TimeOfDay,
    #[serde(default)]
    days2: Option<Days>,
    #[serde(default)]
    time2: Option<TimeOfDay>,
}

impl TryFrom<SectionWire> for Section {
    type Error = ScheduleError;

    fn try_from(w: SectionWire) -> Result<Self, Self::Error> {
        Section::from_parts(w.course_id, w.days, w.time, w.days2, w.time2)
    }
}

impl From<Section> for SectionWire {
    fn from(s: Section) -> Self {
        SectionWire {
            course_id: s.course_id,
            days: s.days(),
            time: s.time(),
            days2: s.days2(),
            time2: s.time2(),
        }
    }
}
