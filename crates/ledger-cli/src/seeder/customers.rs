//! Customer seeding.

use ledger_core::SeedError;
use ledger_models::CustomerSeed;
use sqlx::{Postgres, Transaction};
use tracing::{info, instrument};

use super::{TableSummary, ensure_uuid_extension};

const CREATE_CUSTOMERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
"#;

/// Creates the `customers` table if needed and inserts each customer,
/// skipping ids that already exist.
#[instrument(skip_all, fields(count = customers.len()))]
pub async fn seed_customers(
    tx: &mut Transaction<'_, Postgres>,
    customers: &[CustomerSeed],
) -> Result<TableSummary, SeedError> {
    ensure_uuid_extension(tx).await?;

    sqlx::query(CREATE_CUSTOMERS_TABLE)
        .execute(&mut **tx)
        .await
        .map_err(SeedError::schema("table customers"))?;

    let mut summary = TableSummary::default();

    for customer in customers {
        let rows = sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(&mut **tx)
        .await
        .map_err(|e| SeedError::insert("customers", e))?
        .rows_affected();

        summary.record(rows);
    }

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Seeded customers"
    );
    Ok(summary)
}
