use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("initializing database schema");

    // Create schedules table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL,
            name VARCHAR(255) NOT NULL,
            description TEXT NULL,
            timezone VARCHAR(255) NOT NULL,
            is_default BOOLEAN NOT NULL DEFAULT FALSE,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            schedule_id UUID NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
            day SMALLINT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_day CHECK (day BETWEEN 0 AND 6)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes. The partial unique index backstops the
    // one-default-schedule-per-owner rule enforced by the API layer.
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_schedules_owner_id ON schedules(owner_id)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_schedules_owner_default \
            ON schedules(owner_id) WHERE is_default",
        "CREATE INDEX IF NOT EXISTS idx_time_slots_schedule_id ON time_slots(schedule_id)",
        "CREATE INDEX IF NOT EXISTS idx_time_slots_day ON time_slots(day)",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("database schema ready");
    Ok(())
}
