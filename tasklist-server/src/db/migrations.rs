//! Database migrations for the todo table

use sqlx::PgPool;

/// Run all migrations, idempotently.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running todo migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo (
            id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            task VARCHAR(200) NOT NULL,
            due_date TIMESTAMPTZ,
            create_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            update_date TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todo_task ON todo (task)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
