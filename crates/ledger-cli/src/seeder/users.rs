//! User seeding.
//!
//! Passwords are hashed one at a time on the blocking pool before each insert.
//! A user whose id already exists is skipped untouched, hash included; a new
//! id with an email that is already taken fails the run.

use ledger_core::{SeedError, hash_password_blocking};
use ledger_models::UserSeed;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info, instrument};

use super::{TableSummary, ensure_uuid_extension};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

/// Creates the `users` table if needed and inserts each user.
#[instrument(skip_all, fields(count = users.len()))]
pub async fn seed_users(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<TableSummary, SeedError> {
    ensure_uuid_extension(tx).await?;

    sqlx::query(CREATE_USERS_TABLE)
        .execute(&mut **tx)
        .await
        .map_err(SeedError::schema("table users"))?;

    let mut summary = TableSummary::default();

    for user in users {
        let password_hash = hash_password_blocking(user.password.clone()).await?;

        let rows = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&password_hash)
        .execute(&mut **tx)
        .await
        .map_err(|e| SeedError::insert("users", e))?
        .rows_affected();

        debug!(user_id = %user.id, inserted = rows > 0, "Seeded user");
        summary.record(rows);
    }

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Seeded users"
    );
    Ok(summary)
}
