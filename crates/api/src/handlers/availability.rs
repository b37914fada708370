//! # Availability Handlers
//!
//! Read-only view of a schedule's bookable time, consumed by booking
//! engines and the practitioner dashboard.
//!
//! The view is derived, never stored: slots are grouped by day, sorted by
//! start time, and filtered to active ones. An inactive schedule is
//! bookable nowhere regardless of its slots. Because every accepted slot
//! passed the overlap check at add time, the returned ranges within a day
//! are guaranteed disjoint.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use slotsync_core::models::schedule::AvailabilityResponse;
use uuid::Uuid;

use crate::handlers::load_schedule;
use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the per-day bookable ranges for one schedule.
///
/// # Endpoint
///
/// ```text
/// GET /api/schedules/:id/availability
/// ```
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let (_, schedule) = load_schedule(&state, id).await?;
    Ok(Json(AvailabilityResponse::from_schedule(&schedule)))
}
