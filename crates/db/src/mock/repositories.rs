use chrono::NaiveTime;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbSchedule, DbTimeSlot};

// Mock repositories for testing
mock! {
    pub ScheduleRepo {
        pub async fn create_schedule(
            &self,
            owner_id: Uuid,
            name: &'static str,
            description: Option<&'static str>,
            timezone: &'static str,
            is_default: bool,
        ) -> eyre::Result<DbSchedule>;

        pub async fn get_schedule_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn list_schedules_by_owner(
            &self,
            owner_id: Uuid,
        ) -> eyre::Result<Vec<DbSchedule>>;

        pub async fn clear_default_for_owner(
            &self,
            owner_id: Uuid,
        ) -> eyre::Result<()>;

        pub async fn delete_schedule(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub TimeSlotRepo {
        pub async fn create_time_slot(
            &self,
            schedule_id: Uuid,
            day: i16,
            start_time: NaiveTime,
            end_time: NaiveTime,
            is_active: bool,
        ) -> eyre::Result<DbTimeSlot>;

        pub async fn get_time_slots_by_schedule_id(
            &self,
            schedule_id: Uuid,
        ) -> eyre::Result<Vec<DbTimeSlot>>;

        pub async fn delete_time_slot(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;

        pub async fn delete_time_slots_by_schedule_id(
            &self,
            schedule_id: Uuid,
        ) -> eyre::Result<()>;

        pub async fn set_time_slot_active(
            &self,
            id: Uuid,
            is_active: bool,
        ) -> eyre::Result<Option<DbTimeSlot>>;
    }
}
