pub mod availability;
pub mod schedule;
pub mod slots;

use std::sync::Arc;

use slotsync_core::errors::ScheduleError;
use slotsync_core::models::schedule::{GetScheduleResponse, Schedule, TimeSlotResponse};
use slotsync_db::models::DbSchedule;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Loads a schedule row and its slots, lifted into the domain model.
/// Returns the row as well because `owner_id` and `created_at` are
/// storage-side fields the model does not carry.
pub(crate) async fn load_schedule(
    state: &Arc<ApiState>,
    id: Uuid,
) -> Result<(DbSchedule, Schedule), AppError> {
    let db_schedule = slotsync_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(ScheduleError::Database)?
        .ok_or_else(|| ScheduleError::NotFound(format!("Schedule with ID {} not found", id)))?;

    let slots =
        slotsync_db::repositories::time_slot::get_time_slots_by_schedule_id(&state.db_pool, id)
            .await
            .map_err(ScheduleError::Database)?;

    let schedule = db_schedule
        .clone()
        .into_model(slots)
        .map_err(ScheduleError::Database)?;

    Ok((db_schedule, schedule))
}

/// Shapes a schedule into its API representation, slots ordered by day
/// then start time.
pub(crate) fn schedule_response(owner_id: Uuid, schedule: &Schedule) -> GetScheduleResponse {
    GetScheduleResponse {
        id: schedule.id,
        owner_id,
        name: schedule.name.clone(),
        description: schedule.description.clone(),
        timezone: schedule.timezone.clone(),
        is_default: schedule.is_default,
        is_active: schedule.is_active,
        active_slot_count: schedule.active_slot_count(),
        slots: schedule
            .slots_by_day()
            .into_iter()
            .flatten()
            .map(TimeSlotResponse::from)
            .collect(),
    }
}
