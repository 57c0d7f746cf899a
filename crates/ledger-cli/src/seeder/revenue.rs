//! Revenue seeding. No UUIDs here, so no extension check.

use ledger_core::SeedError;
use ledger_models::RevenueSeed;
use sqlx::{Postgres, Transaction};
use tracing::{info, instrument};

use super::TableSummary;

const CREATE_REVENUE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
"#;

/// Creates the `revenue` table if needed and inserts each month, skipping
/// months already present.
#[instrument(skip_all, fields(count = revenue.len()))]
pub async fn seed_revenue(
    tx: &mut Transaction<'_, Postgres>,
    revenue: &[RevenueSeed],
) -> Result<TableSummary, SeedError> {
    sqlx::query(CREATE_REVENUE_TABLE)
        .execute(&mut **tx)
        .await
        .map_err(SeedError::schema("table revenue"))?;

    let mut summary = TableSummary::default();

    for sample in revenue {
        let rows = sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(&sample.month)
        .bind(sample.revenue)
        .execute(&mut **tx)
        .await
        .map_err(|e| SeedError::insert("revenue", e))?
        .rows_affected();

        summary.record(rows);
    }

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Seeded revenue"
    );
    Ok(summary)
}
