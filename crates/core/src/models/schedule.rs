//! Weekly availability schedules and the operations that edit them.
//!
//! A schedule is a named, timezone-scoped set of recurring time slots.
//! Editing operations are pure: each takes `&self` and returns a new
//! `Schedule` value, with validation running before any change is applied.
//! A rejected edit leaves the prior value untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult, ERR_END_BEFORE_START, ERR_SLOT_OVERLAP};
use crate::models::time_slot::TimeSlot;
use crate::time::{DayOfWeek, SlotTime};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// IANA zone name, e.g. "America/New_York". Slot times are wall-clock
    /// values in this zone.
    pub timezone: String,
    pub is_default: bool,
    pub is_active: bool,
    pub time_slots: Vec<TimeSlot>,
}

impl Schedule {
    /// A new empty, active, non-default schedule.
    pub fn new(name: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            timezone: timezone.into(),
            is_default: false,
            is_active: true,
            time_slots: Vec::new(),
        }
    }

    /// Adds a slot on `day`, validating before anything changes:
    ///
    /// 1. the range must be non-empty (`end > start`, no midnight wrap);
    /// 2. the range must not intersect any existing slot on the same day;
    ///    an inactive slot still blocks its range until deleted.
    ///
    /// On success returns a new schedule with the slot appended; the new
    /// slot is active and carries a fresh id.
    pub fn add_time_slot(
        &self,
        day: DayOfWeek,
        start_time: SlotTime,
        end_time: SlotTime,
    ) -> ScheduleResult<Schedule> {
        if end_time.minutes_from_midnight() <= start_time.minutes_from_midnight() {
            return Err(ScheduleError::Validation(ERR_END_BEFORE_START.to_string()));
        }

        let candidate = TimeSlot::new(day, start_time, end_time);
        if self.time_slots.iter().any(|slot| slot.overlaps(&candidate)) {
            return Err(ScheduleError::Conflict(ERR_SLOT_OVERLAP.to_string()));
        }

        let mut next = self.clone();
        next.time_slots.push(candidate);
        Ok(next)
    }

    /// Removes the slot with the given id. Removing an unknown id is a
    /// silent no-op.
    pub fn remove_time_slot(&self, slot_id: Uuid) -> Schedule {
        let mut next = self.clone();
        next.time_slots.retain(|slot| slot.id != slot_id);
        next
    }

    /// Sets the active flag on the matching slot. The slot's bounds are
    /// unchanged, so no overlap re-validation runs. Unknown ids are a
    /// no-op.
    pub fn set_slot_active(&self, slot_id: Uuid, is_active: bool) -> Schedule {
        let mut next = self.clone();
        if let Some(slot) = next.time_slots.iter_mut().find(|slot| slot.id == slot_id) {
            slot.is_active = is_active;
        }
        next
    }

    pub fn find_slot(&self, slot_id: Uuid) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|slot| slot.id == slot_id)
    }

    /// Slots grouped by day, Monday first, each day sorted by start time.
    pub fn slots_by_day(&self) -> [Vec<&TimeSlot>; 7] {
        let mut days: [Vec<&TimeSlot>; 7] = Default::default();
        for slot in &self.time_slots {
            days[usize::from(slot.day.index())].push(slot);
        }
        for day in &mut days {
            day.sort_by_key(|slot| slot.start_time);
        }
        days
    }

    pub fn active_slot_count(&self) -> usize {
        self.time_slots.iter().filter(|slot| slot.is_active).count()
    }

    /// The read-only view booking engines consume: per-day bookable
    /// ranges, Monday first, sorted by start time. Only active slots
    /// contribute, and an inactive schedule is bookable nowhere.
    pub fn bookable_ranges(&self) -> [Vec<BookableRange>; 7] {
        let mut days: [Vec<BookableRange>; 7] = Default::default();
        if !self.is_active {
            return days;
        }

        for (index, slots) in self.slots_by_day().into_iter().enumerate() {
            days[index] = slots
                .into_iter()
                .filter(|slot| slot.is_active)
                .map(|slot| BookableRange {
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                })
                .collect();
        }
        days
    }
}

/// Checks that a timezone string names a real IANA zone.
pub fn validate_timezone(timezone: &str) -> ScheduleResult<()> {
    timezone
        .parse::<chrono_tz::Tz>()
        .map(|_| ())
        .map_err(|_| {
            ScheduleError::Validation(format!("Unknown timezone '{timezone}': expected an IANA zone name"))
        })
}

/// A contiguous bookable interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookableRange {
    pub start_time: SlotTime,
    pub end_time: SlotTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimeSlotRequest {
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub timezone: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub slots: Vec<CreateTimeSlotRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub timezone: Option<String>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
    /// When present, replaces the slot set wholesale.
    pub slots: Option<Vec<CreateTimeSlotRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotResponse {
    pub id: Uuid,
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub is_active: bool,
    /// Presentation projection, e.g. "1 hr 30 min".
    pub duration: String,
}

impl From<&TimeSlot> for TimeSlotResponse {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            id: slot.id,
            day: slot.day,
            start_time: slot.start_time,
            end_time: slot.end_time,
            is_active: slot.is_active,
            duration: slot.duration_label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetScheduleResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub timezone: String,
    pub is_default: bool,
    pub is_active: bool,
    pub active_slot_count: usize,
    pub slots: Vec<TimeSlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSchedulesResponse {
    pub schedules: Vec<GetScheduleResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleResponse {
    pub id: Uuid,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSlotActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: DayOfWeek,
    pub ranges: Vec<BookableRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub schedule_id: Uuid,
    pub timezone: String,
    pub days: Vec<DayAvailability>,
}

impl AvailabilityResponse {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let days = DayOfWeek::ALL
            .into_iter()
            .zip(schedule.bookable_ranges())
            .map(|(day, ranges)| DayAvailability { day, ranges })
            .collect();

        Self {
            schedule_id: schedule.id,
            timezone: schedule.timezone.clone(),
            days,
        }
    }
}
