use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::time::TIME_PATTERN;
use super::{Days, TimeOfDay};
use crate::error::ScheduleError;

// "MWF 09:30", "tr 14:00"
static MEETING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*([A-Za-z]+)\s+({TIME_PATTERN})\s*$")).unwrap()
});

/// A meeting pattern: the weekdays a section convenes on and the time it
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Meeting {
    days: Days,
    time: TimeOfDay,
}

impl Meeting {
    /// Creates a meeting pattern. At least one weekday is required.
    pub fn new(days: Days, time: TimeOfDay) -> Result<Self, ScheduleError> {
        if days.is_empty() {
            return Err(ScheduleError::InvalidMeeting {
                message: format!("meeting at {time} has no days"),
            });
        }
        Ok(Self { days, time })
    }

    pub fn days(&self) -> Days {
        self.days
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}

impl PartialOrd for Meeting {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Earlier meetings sort first; ties are broken by the day set.
impl Ord for Meeting {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.days.cmp(&other.days))
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.days, self.time)
    }
}

impl FromStr for Meeting {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = MEETING_REGEX
            .captures(s)
            .ok_or_else(|| ScheduleError::InvalidMeeting {
                message: format!("expected \"<days> <HH:MM>\", got \"{s}\""),
            })?;
        let days: Days = caps[1].parse()?;
        let time: TimeOfDay = caps[2].parse()?;
        Meeting::new(days, time)
    }
}
