use chrono::{DateTime, NaiveTime, Utc};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use slotsync_core::models::schedule::Schedule;
use slotsync_core::models::time_slot::TimeSlot;
use slotsync_core::time::{DayOfWeek, SlotTime};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub timezone: String,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub day: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl DbTimeSlot {
    /// Lifts a stored row into the domain model. Fails only on corrupt
    /// rows (day outside 0-6), which the schema's CHECK constraint should
    /// make unreachable.
    pub fn into_model(self) -> Result<TimeSlot> {
        let day = u8::try_from(self.day)
            .ok()
            .and_then(DayOfWeek::from_index)
            .ok_or_else(|| eyre!("Corrupt time slot {}: day index {}", self.id, self.day))?;

        Ok(TimeSlot {
            id: self.id,
            day,
            start_time: SlotTime::new(self.start_time),
            end_time: SlotTime::new(self.end_time),
            is_active: self.is_active,
        })
    }
}

impl DbSchedule {
    /// Assembles the domain schedule from its row plus its slot rows.
    pub fn into_model(self, slots: Vec<DbTimeSlot>) -> Result<Schedule> {
        let time_slots = slots
            .into_iter()
            .map(DbTimeSlot::into_model)
            .collect::<Result<Vec<_>>>()?;

        Ok(Schedule {
            id: self.id,
            name: self.name,
            description: self.description,
            timezone: self.timezone,
            is_default: self.is_default,
            is_active: self.is_active,
            time_slots,
        })
    }
}
