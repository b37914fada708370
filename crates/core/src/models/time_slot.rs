use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::{duration_label, slots_overlap, DayOfWeek, SlotTime};

/// A single recurring bookable interval on one day of the week.
///
/// Inactive slots are retained rather than deleted; they are excluded from
/// availability computations but still occupy their time range for overlap
/// purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub is_active: bool,
}

impl TimeSlot {
    /// Builds a fresh active slot with a new id. Range validation happens
    /// at the schedule level, where sibling slots are visible.
    pub fn new(day: DayOfWeek, start_time: SlotTime, end_time: SlotTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            start_time,
            end_time,
            is_active: true,
        }
    }

    /// True iff this slot shares any point in time with `other` on the
    /// same day. Touching endpoints do not count.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day
            && slots_overlap(
                self.start_time,
                self.end_time,
                other.start_time,
                other.end_time,
            )
    }

    /// Presentation label for the slot's length, e.g. `"1 hr 30 min"`.
    pub fn duration_label(&self) -> String {
        duration_label(self.start_time, self.end_time)
    }
}
