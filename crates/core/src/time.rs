//! Wall-clock time-of-day values and the interval arithmetic built on them.
//!
//! Slot times are day-local wall-clock values with second precision,
//! interpreted in the owning schedule's timezone. The canonical wire and
//! storage form is a zero-padded 24-hour `HH:MM:SS` string; `HH:MM` is
//! accepted on input. All comparison arithmetic works on minutes since
//! midnight, so overnight wrap-around is unrepresentable by construction.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::ScheduleError;

/// Canonical render format for slot times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Accepted short input format.
const TIME_FORMAT_SHORT: &str = "%H:%M";

/// A wall-clock time of day within a slot, second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Builds a slot time from hour/minute/second components.
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self)
    }

    /// Minutes since midnight. Seconds are ignored, matching the
    /// comparison granularity of the slot model.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for SlotTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(s, TIME_FORMAT_SHORT))
            .map(Self)
            .map_err(|_| {
                ScheduleError::Validation(format!(
                    "Invalid time '{s}': expected HH:MM or HH:MM:SS"
                ))
            })
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of the week a slot recurs on. Serialized as an integer index,
/// 0 = Monday through 6 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn index(self) -> u8 {
        match self {
            DayOfWeek::Monday => 0,
            DayOfWeek::Tuesday => 1,
            DayOfWeek::Wednesday => 2,
            DayOfWeek::Thursday => 3,
            DayOfWeek::Friday => 4,
            DayOfWeek::Saturday => 5,
            DayOfWeek::Sunday => 6,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        DayOfWeek::ALL.get(usize::from(index)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DayOfWeek::from_index(value).ok_or_else(|| {
            ScheduleError::Validation(format!("Invalid day index {value}: expected 0-6"))
        })
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u8::deserialize(deserializer)?;
        DayOfWeek::from_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid day index {index}: expected 0-6"))
        })
    }
}

/// Half-open interval overlap test: `[a_start, a_end)` intersects
/// `[b_start, b_end)`. Touching endpoints do not overlap, so back-to-back
/// slots are permitted.
pub fn slots_overlap(a_start: SlotTime, a_end: SlotTime, b_start: SlotTime, b_end: SlotTime) -> bool {
    a_start.minutes_from_midnight() < b_end.minutes_from_midnight()
        && b_start.minutes_from_midnight() < a_end.minutes_from_midnight()
}

/// Human-readable duration between two same-day times: `"1 hr 30 min"`,
/// `"45 min"`, `"2 hr"`. Callers are expected to pass a validated range;
/// a zero delta renders as `"0 min"`.
pub fn duration_label(start: SlotTime, end: SlotTime) -> String {
    let total = end
        .minutes_from_midnight()
        .saturating_sub(start.minutes_from_midnight());
    let hours = total / 60;
    let minutes = total % 60;

    match (hours, minutes) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} hr"),
        (h, m) => format!("{h} hr {m} min"),
    }
}
