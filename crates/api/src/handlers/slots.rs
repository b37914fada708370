//! Single-slot edit endpoints: the operations UI event handlers call on
//! every add/remove/toggle action.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use slotsync_core::errors::ScheduleError;
use slotsync_core::models::schedule::{CreateTimeSlotRequest, SetSlotActiveRequest, TimeSlotResponse};
use uuid::Uuid;

use crate::handlers::load_schedule;
use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn add_time_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateTimeSlotRequest>,
) -> Result<Json<TimeSlotResponse>, AppError> {
    let (_, schedule) = load_schedule(&state, id).await?;

    // Range and overlap validation against the persisted siblings; a
    // rejection returns before any write.
    schedule.add_time_slot(payload.day, payload.start_time, payload.end_time)?;

    let row = slotsync_db::repositories::time_slot::create_time_slot(
        &state.db_pool,
        id,
        i16::from(payload.day.index()),
        payload.start_time.time(),
        payload.end_time.time(),
        true,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let slot = row.into_model().map_err(ScheduleError::Database)?;
    Ok(Json(TimeSlotResponse::from(&slot)))
}

/// Idempotent delete: removing a slot id that is already gone succeeds.
#[axum::debug_handler]
pub async fn remove_time_slot(
    State(state): State<Arc<ApiState>>,
    Path((id, slot_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    // 404 only for an unknown schedule, never for an unknown slot.
    load_schedule(&state, id).await?;

    slotsync_db::repositories::time_slot::delete_time_slot(&state.db_pool, slot_id)
        .await
        .map_err(ScheduleError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn set_slot_active(
    State(state): State<Arc<ApiState>>,
    Path((id, slot_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SetSlotActiveRequest>,
) -> Result<Json<TimeSlotResponse>, AppError> {
    load_schedule(&state, id).await?;

    // Toggling never re-validates overlap: the slot's bounds are
    // unchanged and inactive slots keep blocking their range.
    let row = slotsync_db::repositories::time_slot::set_time_slot_active(
        &state.db_pool,
        slot_id,
        payload.is_active,
    )
    .await
    .map_err(ScheduleError::Database)?
    .ok_or_else(|| {
        ScheduleError::NotFound(format!("Time slot with ID {} not found", slot_id))
    })?;

    let slot = row.into_model().map_err(ScheduleError::Database)?;
    Ok(Json(TimeSlotResponse::from(&slot)))
}
