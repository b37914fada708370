use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use slotsync_core::errors::ScheduleError;
use slotsync_core::models::schedule::{
    validate_timezone, CreateScheduleRequest, CreateTimeSlotRequest, GetScheduleResponse,
    ListSchedulesResponse, Schedule, UpdateScheduleRequest, UpdateScheduleResponse,
};
use uuid::Uuid;

use crate::handlers::{load_schedule, schedule_response};
use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for listing schedules.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Practitioner whose schedules to list
    pub owner_id: Uuid,
}

/// Validates a requested slot set against an empty schedule, yielding the
/// validated model or the first rejection. Runs entirely before any
/// database write.
fn build_schedule(
    base: Schedule,
    slots: &[CreateTimeSlotRequest],
) -> Result<Schedule, AppError> {
    let mut schedule = base;
    for slot in slots {
        schedule = schedule.add_time_slot(slot.day, slot.start_time, slot.end_time)?;
    }
    Ok(schedule)
}

/// Persists a validated model's slots for a schedule row.
async fn insert_slots(
    state: &Arc<ApiState>,
    schedule_id: Uuid,
    schedule: &Schedule,
) -> Result<(), AppError> {
    for slot in &schedule.time_slots {
        slotsync_db::repositories::time_slot::create_time_slot(
            &state.db_pool,
            schedule_id,
            i16::from(slot.day.index()),
            slot.start_time.time(),
            slot.end_time.time(),
            slot.is_active,
        )
        .await
        .map_err(ScheduleError::Database)?;
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<Json<GetScheduleResponse>, AppError> {
    validate_timezone(&payload.timezone)?;

    // Run the whole requested slot set through the model before touching
    // the database.
    let mut schedule = build_schedule(
        Schedule::new(payload.name.clone(), payload.timezone.clone()),
        &payload.slots,
    )?;
    schedule.description = payload.description.clone();
    schedule.is_default = payload.is_default;

    // At most one default per owner: demote any existing default first.
    if payload.is_default {
        slotsync_db::repositories::schedule::clear_default_for_owner(
            &state.db_pool,
            payload.owner_id,
        )
        .await
        .map_err(ScheduleError::Database)?;
    }

    let db_schedule = slotsync_db::repositories::schedule::create_schedule(
        &state.db_pool,
        payload.owner_id,
        &payload.name,
        payload.description.as_deref(),
        &payload.timezone,
        payload.is_default,
    )
    .await
    .map_err(ScheduleError::Database)?;

    insert_slots(&state, db_schedule.id, &schedule).await?;

    // Re-read to pick up persisted slot ids.
    let (db_schedule, schedule) = load_schedule(&state, db_schedule.id).await?;
    Ok(Json(schedule_response(db_schedule.owner_id, &schedule)))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetScheduleResponse>, AppError> {
    let (db_schedule, schedule) = load_schedule(&state, id).await?;
    Ok(Json(schedule_response(db_schedule.owner_id, &schedule)))
}

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListSchedulesResponse>, AppError> {
    let db_schedules = slotsync_db::repositories::schedule::list_schedules_by_owner(
        &state.db_pool,
        query.owner_id,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let mut schedules = Vec::with_capacity(db_schedules.len());
    for db_schedule in db_schedules {
        let slots = slotsync_db::repositories::time_slot::get_time_slots_by_schedule_id(
            &state.db_pool,
            db_schedule.id,
        )
        .await
        .map_err(ScheduleError::Database)?;

        let owner_id = db_schedule.owner_id;
        let schedule = db_schedule
            .into_model(slots)
            .map_err(ScheduleError::Database)?;
        schedules.push(schedule_response(owner_id, &schedule));
    }

    Ok(Json(ListSchedulesResponse { schedules }))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> Result<Json<UpdateScheduleResponse>, AppError> {
    let (db_schedule, current) = load_schedule(&state, id).await?;

    if let Some(timezone) = &payload.timezone {
        validate_timezone(timezone)?;
    }

    // Validate the replacement slot set in full before any write. The
    // schedule is saved as a whole unit: on success the old slots are
    // dropped and the validated set replaces them.
    let replacement = match &payload.slots {
        Some(slots) => {
            let mut empty = current.clone();
            empty.time_slots.clear();
            Some(build_schedule(empty, slots)?)
        }
        None => None,
    };

    if payload.is_default == Some(true) && !db_schedule.is_default {
        slotsync_db::repositories::schedule::clear_default_for_owner(
            &state.db_pool,
            db_schedule.owner_id,
        )
        .await
        .map_err(ScheduleError::Database)?;
    }

    slotsync_db::repositories::schedule::update_schedule(
        &state.db_pool,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.timezone.as_deref(),
        payload.is_default,
        payload.is_active,
    )
    .await
    .map_err(ScheduleError::Database)?;

    if let Some(schedule) = replacement {
        slotsync_db::repositories::time_slot::delete_time_slots_by_schedule_id(&state.db_pool, id)
            .await
            .map_err(ScheduleError::Database)?;
        insert_slots(&state, id, &schedule).await?;
    }

    let response = UpdateScheduleResponse {
        id,
        updated_at: Utc::now(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = slotsync_db::repositories::schedule::delete_schedule(&state.db_pool, id)
        .await
        .map_err(ScheduleError::Database)?;

    if !deleted {
        return Err(AppError(ScheduleError::NotFound(format!(
            "Schedule with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
