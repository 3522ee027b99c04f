/// In-memory course catalog and course-id resolution
mod config;

pub use config::{CatalogCourse, CatalogFile};

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::ScheduleError;
use crate::model::{Course, CourseId, Section};

/// Resolves the weak `CourseId` references held by sections.
pub trait CourseLookup {
    fn course(&self, id: CourseId) -> Option<&Course>;

    fn contains_course(&self, id: CourseId) -> bool {
        self.course(id).is_some()
    }
}

impl CourseLookup for BTreeMap<CourseId, Course> {
    fn course(&self, id: CourseId) -> Option<&Course> {
        self.get(&id)
    }
}

impl CourseLookup for std::collections::HashMap<CourseId, Course> {
    fn course(&self, id: CourseId) -> Option<&Course> {
        self.get(&id)
    }
}

/// Courses keyed by id together with the sections that reference them.
///
/// Sections are accepted even when their course is missing; use
/// [`Catalog::validate`] to check referential integrity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: BTreeMap<CourseId, Course>,
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a course under `id`. Ids must be unique within a catalog.
    pub fn insert_course(&mut self, id: CourseId, course: Course) -> Result<(), ScheduleError> {
        if self.courses.contains_key(&id) {
            return Err(ScheduleError::DuplicateCourse { course_id: id });
        }
        debug!("Registered course {} as {}", course, id);
        self.courses.insert(id, course);
        Ok(())
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn courses(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses.iter().map(|(id, c)| (*id, c))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections belonging to the given course, in insertion order.
    pub fn sections_for(&self, id: CourseId) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.course_id() == id)
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Moves every course and section of `other` into this catalog.
    ///
    /// Fails on the first course id that both catalogs define, leaving this
    /// catalog unchanged.
    pub fn merge(&mut self, other: Catalog) -> Result<(), ScheduleError> {
        if let Some(id) = other.courses.keys().find(|id| self.courses.contains_key(*id)) {
            return Err(ScheduleError::DuplicateCourse { course_id: *id });
        }
        self.courses.extend(other.courses);
        self.sections.extend(other.sections);
        Ok(())
    }

    /// Sections whose course id is not registered in this catalog.
    pub fn dangling_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |s| !self.contains_course(s.course_id()))
    }

    /// Checks that every section references a registered course.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let mut dangling = self.dangling_sections();
        match dangling.next() {
            Some(section) => {
                let remaining = dangling.count();
                warn!(
                    "Section references unknown course {} ({} more dangling)",
                    section.course_id(),
                    remaining
                );
                Err(ScheduleError::UnknownCourse {
                    course_id: section.course_id(),
                })
            }
            None => Ok(()),
        }
    }
}

impl CourseLookup for Catalog {
    fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cs101() -> Course {
        Course::new("CS-101", "Intro to Computer Science").unwrap()
    }

    fn lecture(course: i64) -> Section {
        Section::new(CourseId::new(course), "MW 09:30".parse().unwrap())
    }

    #[test]
    fn test_resolve_section_course() {
        let mut catalog = Catalog::new();
        catalog.insert_course(CourseId::new(42), cs101()).unwrap();
        catalog.push_section(lecture(42));

        let section = &catalog.sections()[0];
        assert_eq!(section.resolve(&catalog), Some(&cs101()));
        assert!(lecture(43).resolve(&catalog).is_none());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_duplicate_course_id() {
        let mut catalog = Catalog::new();
        catalog.insert_course(CourseId::new(1), cs101()).unwrap();
        let err = catalog.insert_course(CourseId::new(1), cs101()).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateCourse { course_id } if course_id.get() == 1));
    }

    #[test]
    fn test_validate_reports_dangling_reference() {
        let mut catalog = Catalog::new();
        catalog.insert_course(CourseId::new(1), cs101()).unwrap();
        catalog.push_section(lecture(1));
        catalog.push_section(lecture(9));

        assert_eq!(catalog.dangling_sections().count(), 1);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownCourse { course_id } if course_id.get() == 9));
    }

    #[test]
    fn test_sections_for_and_merge() {
        let mut a = Catalog::new();
        a.insert_course(CourseId::new(1), cs101()).unwrap();
        a.push_section(lecture(1));

        let mut b = Catalog::new();
        b.insert_course(CourseId::new(2), Course::new("MATH-120", "Calculus I").unwrap())
            .unwrap();
        b.push_section(lecture(2));
        b.push_section(lecture(1));

        a.merge(b).unwrap();
        assert_eq!(a.course_count(), 2);
        assert_eq!(a.section_count(), 3);
        assert_eq!(a.sections_for(CourseId::new(1)).count(), 2);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_merge_conflict_leaves_catalog_unchanged() {
        let mut a = Catalog::new();
        a.insert_course(CourseId::new(5), cs101()).unwrap();
        let before = a.clone();

        let mut b = Catalog::new();
        b.insert_course(CourseId::new(1), Course::new("MATH-120", "Calculus I").unwrap())
            .unwrap();
        b.insert_course(CourseId::new(5), cs101()).unwrap();
        b.push_section(lecture(1));

        let err = a.merge(b).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateCourse { course_id } if course_id.get() == 5));
        assert_eq!(a, before);
    }

    #[test]
    fn test_map_lookup() {
        let mut map = BTreeMap::new();
        map.insert(CourseId::new(5), cs101());
        assert!(map.contains_course(CourseId::new(5)));
        assert!(lecture(5).resolve(&map).is_some());
    }
}
