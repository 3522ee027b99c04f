use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ScheduleError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// `H:MM` or `HH:MM`; minutes always take two digits.
pub(crate) const TIME_PATTERN: &str = r"\d{1,2}:\d{2}";

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TIME_PATTERN}$")).unwrap());

/// Wall-clock time of day with minute precision, stored as minutes since
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour >= 24 || minute >= 60 {
            return Err(ScheduleError::InvalidTime {
                message: format!("{hour:02}:{minute:02} is out of range"),
            });
        }
        Ok(TimeOfDay(hour as u16 * 60 + minute as u16))
    }

    pub fn from_minutes(minutes: u16) -> Result<Self, ScheduleError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidTime {
                message: format!("{minutes} minutes is past the end of the day"),
            });
        }
        Ok(TimeOfDay(minutes))
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }
}

/// Seconds and sub-second precision are dropped.
impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        TimeOfDay((t.hour() * 60 + t.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(t.hour() as u32, t.minute() as u32, 0).unwrap_or_default()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if !TIME_REGEX.is_match(text) {
            return Err(ScheduleError::InvalidTime {
                message: format!("expected HH:MM, got \"{s}\""),
            });
        }
        NaiveTime::parse_from_str(text, "%H:%M")
            .map(TimeOfDay::from)
            .map_err(|e| ScheduleError::InvalidTime {
                message: format!("\"{s}\": {e}"),
            })
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
