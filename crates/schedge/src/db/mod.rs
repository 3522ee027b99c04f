/// Column mapping between schedule values and sqlite rows
mod types;

pub use types::{CourseRow, SectionRow};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;

use crate::error::ScheduleError;
use crate::model::{Days, Section, TimeOfDay};

/// Days are stored as TEXT in code form ("MWF").
impl ToSql for Days {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for Days {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: ScheduleError| FromSqlError::Other(Box::new(e)))
    }
}

/// Times are stored as INTEGER minutes since midnight.
impl ToSql for TimeOfDay {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.minutes_since_midnight() as i64))
    }
}

impl FromSql for TimeOfDay {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let minutes = value.as_i64()?;
        u16::try_from(minutes)
            .ok()
            .and_then(|m| TimeOfDay::from_minutes(m).ok())
            .ok_or(FromSqlError::OutOfRange(minutes))
    }
}

impl CourseRow {
    /// Reads a row with `course_id`, `abbrev` and `name` columns.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(CourseRow {
            course_id: row.get("course_id")?,
            abbrev: row.get("abbrev")?,
            name: row.get("name")?,
        })
    }
}

impl SectionRow {
    /// Reads a row with `course_id`, `days`, `time`, `days2` and `time2`
    /// columns. `days2`/`time2` may be NULL.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(SectionRow {
            course_id: row.get("course_id")?,
            days: row.get("days")?,
            time: row.get("time")?,
            days2: row.get("days2")?,
            time2: row.get("time2")?,
        })
    }
}

/// Reads a section row and applies the second-meeting pairing check.
pub fn read_section(row: &Row<'_>) -> Result<Section, ScheduleError> {
    Section::try_from(SectionRow::from_row(row)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, CourseId};
    use rusqlite::{params, Connection};

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE courses (course_id INTEGER PRIMARY KEY, abbrev TEXT NOT NULL, name TEXT NOT NULL);
             CREATE TABLE sections (course_id INTEGER NOT NULL, days TEXT NOT NULL, time INTEGER NOT NULL,
                                    days2 TEXT, time2 INTEGER);",
        )
        .unwrap();
        conn
    }

    fn insert_section(conn: &Connection, row: &SectionRow) {
        conn.execute(
            "INSERT INTO sections (course_id, days, time, days2, time2) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![row.course_id, row.days, row.time, row.days2, row.time2],
        )
        .unwrap();
    }

    fn read_sections(conn: &Connection) -> Vec<Result<Section, ScheduleError>> {
        let mut stmt = conn
            .prepare("SELECT course_id, days, time, days2, time2 FROM sections ORDER BY rowid")
            .unwrap();
        let rows = stmt.query_map([], |row| Ok(read_section(row))).unwrap();
        let sections = rows.map(|r| r.unwrap()).collect();
        sections
    }

    #[test]
    fn test_course_row_mapping() {
        let conn = setup();
        let course = Course::new("CS-101", "Intro to Computer Science").unwrap();
        let row = CourseRow::new(CourseId::new(42), &course);
        conn.execute(
            "INSERT INTO courses (course_id, abbrev, name) VALUES (?1, ?2, ?3)",
            params![row.course_id, row.abbrev, row.name],
        )
        .unwrap();

        let read = conn
            .query_row("SELECT * FROM courses", [], CourseRow::from_row)
            .unwrap();
        assert_eq!(read, row);
        assert_eq!(read.into_course().unwrap(), (CourseId::new(42), course));
    }

    #[test]
    fn test_section_row_mapping() {
        let conn = setup();
        let single = Section::new(CourseId::new(42), "MW 09:30".parse().unwrap());
        let double = Section::with_second_meeting(
            CourseId::new(42),
            "M 09:30".parse().unwrap(),
            "W 11:00".parse().unwrap(),
        );
        insert_section(&conn, &SectionRow::from(&single));
        insert_section(&conn, &SectionRow::from(&double));

        let stored: (String, i64) = conn
            .query_row("SELECT days, time FROM sections LIMIT 1", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!(stored, ("MW".to_string(), 570));

        let read: Vec<Section> = read_sections(&conn)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(read, vec![single, double]);
    }

    #[test]
    fn test_unpaired_row_is_rejected() {
        let conn = setup();
        conn.execute(
            "INSERT INTO sections (course_id, days, time, days2, time2) VALUES (1, 'TR', 600, 'F', NULL)",
            [],
        )
        .unwrap();

        let read = read_sections(&conn);
        assert!(matches!(
            read[0],
            Err(ScheduleError::UnpairedSecondMeeting { has_days: true, has_time: false })
        ));
    }

    #[test]
    fn test_bad_column_values() {
        let conn = setup();
        conn.execute(
            "INSERT INTO sections (course_id, days, time) VALUES (1, 'XYZ', 600), (1, 'M', 5000)",
            [],
        )
        .unwrap();

        let read = read_sections(&conn);
        assert!(matches!(read[0], Err(ScheduleError::Sqlite(_))));
        assert!(matches!(read[1], Err(ScheduleError::Sqlite(_))));
    }
}
