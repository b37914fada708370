use axum::http::StatusCode;
use axum::Json;
use pretty_assertions::assert_eq;
use slotsync_core::errors::ScheduleError;
use slotsync_core::models::schedule::{
    validate_timezone, CreateScheduleRequest, CreateTimeSlotRequest, GetScheduleResponse,
    Schedule, TimeSlotResponse,
};
use slotsync_core::time::DayOfWeek;
use uuid::Uuid;

use crate::test_utils::{make_db_schedule, make_db_slot, TestContext};
use slotsync_api::middleware::error_handling::AppError;

// Test wrappers that mirror the handler logic against mock repositories.

async fn test_get_schedule_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<Json<GetScheduleResponse>, AppError> {
    let db_schedule = ctx
        .schedule_repo
        .get_schedule_by_id(id)
        .await
        .map_err(ScheduleError::Database)?
        .ok_or_else(|| ScheduleError::NotFound(format!("Schedule with ID {} not found", id)))?;

    let slots = ctx
        .time_slot_repo
        .get_time_slots_by_schedule_id(id)
        .await
        .map_err(ScheduleError::Database)?;

    let owner_id = db_schedule.owner_id;
    let schedule = db_schedule
        .into_model(slots)
        .map_err(ScheduleError::Database)?;

    Ok(Json(GetScheduleResponse {
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
    }))
}

// Validation half of the create handler: everything that must run before
// the first repository call.
fn validate_create_request(payload: &CreateScheduleRequest) -> Result<Schedule, AppError> {
    validate_timezone(&payload.timezone)?;

    let mut schedule = Schedule::new(payload.name.clone(), payload.timezone.clone());
    for slot in &payload.slots {
        schedule = schedule.add_time_slot(slot.day, slot.start_time, slot.end_time)?;
    }
    Ok(schedule)
}

async fn test_add_slot_wrapper(
    ctx: &mut TestContext,
    schedule_id: Uuid,
    request: CreateTimeSlotRequest,
) -> Result<Json<TimeSlotResponse>, AppError> {
    let db_schedule = ctx
        .schedule_repo
        .get_schedule_by_id(schedule_id)
        .await
        .map_err(ScheduleError::Database)?
        .ok_or_else(|| {
            ScheduleError::NotFound(format!("Schedule with ID {} not found", schedule_id))
        })?;

    let slots = ctx
        .time_slot_repo
        .get_time_slots_by_schedule_id(schedule_id)
        .await
        .map_err(ScheduleError::Database)?;

    let schedule = db_schedule
        .into_model(slots)
        .map_err(ScheduleError::Database)?;

    // Rejection happens here, before any write.
    schedule.add_time_slot(request.day, request.start_time, request.end_time)?;

    let row = ctx
        .time_slot_repo
        .create_time_slot(
            schedule_id,
            i16::from(request.day.index()),
            request.start_time.time(),
            request.end_time.time(),
            true,
        )
        .await
        .map_err(ScheduleError::Database)?;

    let slot = row.into_model().map_err(ScheduleError::Database)?;
    Ok(Json(TimeSlotResponse::from(&slot)))
}

async fn test_remove_slot_wrapper(
    ctx: &mut TestContext,
    schedule_id: Uuid,
    slot_id: Uuid,
) -> Result<StatusCode, AppError> {
    ctx.schedule_repo
        .get_schedule_by_id(schedule_id)
        .await
        .map_err(ScheduleError::Database)?
        .ok_or_else(|| {
            ScheduleError::NotFound(format!("Schedule with ID {} not found", schedule_id))
        })?;

    ctx.time_slot_repo
        .delete_time_slot(slot_id)
        .await
        .map_err(ScheduleError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}

async fn test_set_slot_active_wrapper(
    ctx: &mut TestContext,
    slot_id: Uuid,
    is_active: bool,
) -> Result<Json<TimeSlotResponse>, AppError> {
    let row = ctx
        .time_slot_repo
        .set_time_slot_active(slot_id, is_active)
        .await
        .map_err(ScheduleError::Database)?
        .ok_or_else(|| {
            ScheduleError::NotFound(format!("Time slot with ID {} not found", slot_id))
        })?;

    let slot = row.into_model().map_err(ScheduleError::Database)?;
    Ok(Json(TimeSlotResponse::from(&slot)))
}

fn slot_request(day: DayOfWeek, start: &str, end: &str) -> CreateTimeSlotRequest {
    CreateTimeSlotRequest {
        day,
        start_time: start.parse().unwrap(),
        end_time: end.parse().unwrap(),
    }
}

#[tokio::test]
async fn test_get_schedule_sorts_slots_by_day_then_start() {
    let mut ctx = TestContext::new();
    let db_schedule = make_db_schedule(Uuid::new_v4());
    let id = db_schedule.id;

    let slots = vec![
        make_db_slot(id, 4, "09:00", "10:00", true),
        make_db_slot(id, 0, "14:00", "15:00", true),
        make_db_slot(id, 0, "09:00", "10:00", false),
    ];

    let schedule_for_mock = db_schedule.clone();
    ctx.schedule_repo
        .expect_get_schedule_by_id()
        .returning(move |_| Ok(Some(schedule_for_mock.clone())));
    ctx.time_slot_repo
        .expect_get_time_slots_by_schedule_id()
        .returning(move |_| Ok(slots.clone()));

    let Json(response) = test_get_schedule_wrapper(&mut ctx, id).await.unwrap();

    assert_eq!(response.id, id);
    assert_eq!(response.owner_id, db_schedule.owner_id);
    assert_eq!(response.active_slot_count, 2);
    assert_eq!(response.slots.len(), 3);
    // Monday slots first, chronological, then Friday.
    assert_eq!(response.slots[0].day, DayOfWeek::Monday);
    assert_eq!(response.slots[0].start_time, "09:00".parse().unwrap());
    assert_eq!(response.slots[1].day, DayOfWeek::Monday);
    assert_eq!(response.slots[1].start_time, "14:00".parse().unwrap());
    assert_eq!(response.slots[2].day, DayOfWeek::Friday);
    assert_eq!(response.slots[0].duration, "1 hr");
}

#[tokio::test]
async fn test_get_schedule_not_found() {
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_schedule_by_id()
        .returning(|_| Ok(None));

    let err = test_get_schedule_wrapper(&mut ctx, Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err.0, ScheduleError::NotFound(_)));
}

#[test]
fn test_create_with_overlapping_slots_is_rejected_before_any_write() {
    let request = CreateScheduleRequest {
        owner_id: Uuid::new_v4(),
        name: "Weekday clinic".to_string(),
        description: None,
        timezone: "America/New_York".to_string(),
        is_default: false,
        slots: vec![
            slot_request(DayOfWeek::Monday, "09:00", "10:00"),
            slot_request(DayOfWeek::Monday, "09:30", "10:30"),
        ],
    };

    // No repository is in scope at all: validation fails first.
    let err = validate_create_request(&request).unwrap_err();
    assert!(matches!(err.0, ScheduleError::Conflict(_)));
}

#[test]
fn test_create_with_unknown_timezone_is_rejected() {
    let request = CreateScheduleRequest {
        owner_id: Uuid::new_v4(),
        name: "Weekday clinic".to_string(),
        description: None,
        timezone: "Atlantis/Lost_City".to_string(),
        is_default: false,
        slots: vec![],
    };

    let err = validate_create_request(&request).unwrap_err();
    assert!(matches!(err.0, ScheduleError::Validation(_)));
}

#[test]
fn test_create_accepts_back_to_back_slots() {
    let request = CreateScheduleRequest {
        owner_id: Uuid::new_v4(),
        name: "Weekday clinic".to_string(),
        description: None,
        timezone: "UTC".to_string(),
        is_default: false,
        slots: vec![
            slot_request(DayOfWeek::Monday, "09:00", "10:00"),
            slot_request(DayOfWeek::Monday, "10:00", "11:00"),
        ],
    };

    let schedule = validate_create_request(&request).unwrap();
    assert_eq!(schedule.time_slots.len(), 2);
}

#[tokio::test]
async fn test_add_slot_overlap_rejected_without_write() {
    let mut ctx = TestContext::new();
    let db_schedule = make_db_schedule(Uuid::new_v4());
    let id = db_schedule.id;
    let existing = vec![make_db_slot(id, 0, "09:00", "10:00", true)];

    ctx.schedule_repo
        .expect_get_schedule_by_id()
        .returning(move |_| Ok(Some(db_schedule.clone())));
    ctx.time_slot_repo
        .expect_get_time_slots_by_schedule_id()
        .returning(move |_| Ok(existing.clone()));
    // No expectation on create_time_slot: a call would fail the test.

    let err = test_add_slot_wrapper(&mut ctx, id, slot_request(DayOfWeek::Monday, "09:30", "10:30"))
        .await
        .unwrap_err();

    assert!(matches!(err.0, ScheduleError::Conflict(_)));
}

#[tokio::test]
async fn test_add_slot_inactive_sibling_still_blocks() {
    let mut ctx = TestContext::new();
    let db_schedule = make_db_schedule(Uuid::new_v4());
    let id = db_schedule.id;
    let existing = vec![make_db_slot(id, 0, "09:00", "10:00", false)];

    ctx.schedule_repo
        .expect_get_schedule_by_id()
        .returning(move |_| Ok(Some(db_schedule.clone())));
    ctx.time_slot_repo
        .expect_get_time_slots_by_schedule_id()
        .returning(move |_| Ok(existing.clone()));

    let err = test_add_slot_wrapper(&mut ctx, id, slot_request(DayOfWeek::Monday, "09:15", "09:45"))
        .await
        .unwrap_err();

    assert!(matches!(err.0, ScheduleError::Conflict(_)));
}

#[tokio::test]
async fn test_add_slot_success() {
    let mut ctx = TestContext::new();
    let db_schedule = make_db_schedule(Uuid::new_v4());
    let id = db_schedule.id;
    let existing = vec![make_db_slot(id, 0, "09:00", "10:00", true)];
    let created = make_db_slot(id, 0, "10:00", "11:00", true);

    ctx.schedule_repo
        .expect_get_schedule_by_id()
        .returning(move |_| Ok(Some(db_schedule.clone())));
    ctx.time_slot_repo
        .expect_get_time_slots_by_schedule_id()
        .returning(move |_| Ok(existing.clone()));
    ctx.time_slot_repo
        .expect_create_time_slot()
        .times(1)
        .returning(move |_, _, _, _, _| Ok(created.clone()));

    let Json(response) =
        test_add_slot_wrapper(&mut ctx, id, slot_request(DayOfWeek::Monday, "10:00", "11:00"))
            .await
            .unwrap();

    assert_eq!(response.day, DayOfWeek::Monday);
    assert!(response.is_active);
    assert_eq!(response.duration, "1 hr");
}

#[tokio::test]
async fn test_remove_slot_is_idempotent() {
    let mut ctx = TestContext::new();
    let db_schedule = make_db_schedule(Uuid::new_v4());
    let id = db_schedule.id;

    ctx.schedule_repo
        .expect_get_schedule_by_id()
        .returning(move |_| Ok(Some(db_schedule.clone())));
    // The repository delete succeeds whether or not the row existed.
    ctx.time_slot_repo
        .expect_delete_time_slot()
        .times(2)
        .returning(|_| Ok(()));

    let known = Uuid::new_v4();
    let status = test_remove_slot_wrapper(&mut ctx, id, known).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let unknown = Uuid::new_v4();
    let status = test_remove_slot_wrapper(&mut ctx, id, unknown).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_set_slot_active_round_trip() {
    let mut ctx = TestContext::new();
    let schedule_id = Uuid::new_v4();
    let mut row = make_db_slot(schedule_id, 3, "13:00", "15:00", true);
    row.is_active = false;
    let slot_id = row.id;

    ctx.time_slot_repo
        .expect_set_time_slot_active()
        .returning(move |_, _| Ok(Some(row.clone())));

    let Json(response) = test_set_slot_active_wrapper(&mut ctx, slot_id, false)
        .await
        .unwrap();

    assert_eq!(response.id, slot_id);
    assert!(!response.is_active);
    // Bounds are untouched by a toggle.
    assert_eq!(response.start_time, "13:00".parse().unwrap());
    assert_eq!(response.end_time, "15:00".parse().unwrap());
}

#[tokio::test]
async fn test_set_slot_active_unknown_slot_is_not_found() {
    let mut ctx = TestContext::new();
    ctx.time_slot_repo
        .expect_set_time_slot_active()
        .returning(|_, _| Ok(None));

    let err = test_set_slot_active_wrapper(&mut ctx, Uuid::new_v4(), true)
        .await
        .unwrap_err();

    assert!(matches!(err.0, ScheduleError::NotFound(_)));
}
