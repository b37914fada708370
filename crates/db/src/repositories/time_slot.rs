use crate::models::DbTimeSlot;
use chrono::{NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_time_slot(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    day: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
    is_active: bool,
) -> Result<DbTimeSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (id, schedule_id, day, start_time, end_time, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, schedule_id, day, start_time, end_time, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(schedule_id)
    .bind(day)
    .bind(start_time)
    .bind(end_time)
    .bind(is_active)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slots_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, schedule_id, day, start_time, end_time, is_active, created_at
        FROM time_slots
        WHERE schedule_id = $1
        ORDER BY day ASC, start_time ASC
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}

/// Idempotent: deleting an id that is not present is not an error.
pub async fn delete_time_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM time_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_time_slots_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM time_slots
        WHERE schedule_id = $1
        "#,
    )
    .bind(schedule_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Flips the active flag on one slot. Returns the updated row, or None if
/// the slot does not exist.
pub async fn set_time_slot_active(
    pool: &Pool<Postgres>,
    id: Uuid,
    is_active: bool,
) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        UPDATE time_slots
        SET is_active = $2
        WHERE id = $1
        RETURNING id, schedule_id, day, start_time, end_time, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(is_active)
    .fetch_optional(pool)
    .await?;

    Ok(time_slot)
}
