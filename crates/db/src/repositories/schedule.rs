use crate::models::DbSchedule;
use chrono::Utc;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    name: &str,
    description: Option<&str>,
    timezone: &str,
    is_default: bool,
) -> Result<DbSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(%id, %owner_id, name, timezone, is_default, "creating schedule");

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        INSERT INTO schedules (id, owner_id, name, description, timezone, is_default, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
        RETURNING id, owner_id, name, description, timezone, is_default, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(description)
    .bind(timezone)
    .bind(is_default)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_schedule_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSchedule>> {
    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, owner_id, name, description, timezone, is_default, is_active, created_at
        FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    tracing::debug!(%id, found = schedule.is_some(), "looked up schedule");

    Ok(schedule)
}

pub async fn list_schedules_by_owner(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
) -> Result<Vec<DbSchedule>> {
    let schedules = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, owner_id, name, description, timezone, is_default, is_active, created_at
        FROM schedules
        WHERE owner_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

/// Demotes any existing default schedule for the owner. Runs before a
/// schedule is created or updated with `is_default = true`, keeping at
/// most one default per owner.
pub async fn clear_default_for_owner(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<()> {
    tracing::debug!(%owner_id, "clearing default schedule for owner");

    sqlx::query(
        r#"
        UPDATE schedules
        SET is_default = FALSE
        WHERE owner_id = $1 AND is_default
        "#,
    )
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn update_schedule(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    timezone: Option<&str>,
    is_default: Option<bool>,
    is_active: Option<bool>,
) -> Result<DbSchedule> {
    let schedule = get_schedule_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Schedule not found"))?;

    let name = name.unwrap_or(&schedule.name);
    let description = description.or(schedule.description.as_deref());
    let timezone = timezone.unwrap_or(&schedule.timezone);
    let is_default = is_default.unwrap_or(schedule.is_default);
    let is_active = is_active.unwrap_or(schedule.is_active);

    let updated_schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        UPDATE schedules
        SET name = $2, description = $3, timezone = $4, is_default = $5, is_active = $6
        WHERE id = $1
        RETURNING id, owner_id, name, description, timezone, is_default, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(timezone)
    .bind(is_default)
    .bind(is_active)
    .fetch_one(pool)
    .await?;

    Ok(updated_schedule)
}

pub async fn delete_schedule(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!(%id, "deleting schedule");

    let result = sqlx::query(
        r#"
        DELETE FROM schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
