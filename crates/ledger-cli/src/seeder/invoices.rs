//! Invoice seeding.
//!
//! Invoice ids are generated by the database, so every insert is a new row and
//! re-running appends another copy of each invoice. The `ON CONFLICT (id)`
//! clause mirrors the other tables and cannot fire for a fresh id.

use ledger_core::SeedError;
use ledger_models::{InvoiceId, InvoiceSeed};
use sqlx::{Postgres, Transaction};
use tracing::{debug, info, instrument};

use super::{TableSummary, ensure_uuid_extension};

const CREATE_INVOICES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
"#;

/// Creates the `invoices` table if needed and inserts each invoice.
#[instrument(skip_all, fields(count = invoices.len()))]
pub async fn seed_invoices(
    tx: &mut Transaction<'_, Postgres>,
    invoices: &[InvoiceSeed],
) -> Result<TableSummary, SeedError> {
    ensure_uuid_extension(tx).await?;

    sqlx::query(CREATE_INVOICES_TABLE)
        .execute(&mut **tx)
        .await
        .map_err(SeedError::schema("table invoices"))?;

    let mut summary = TableSummary::default();

    for invoice in invoices {
        let id: Option<InvoiceId> = sqlx::query_scalar(
            r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(&invoice.status)
        .bind(invoice.date)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| SeedError::insert("invoices", e))?;

        if let Some(id) = id {
            debug!(invoice_id = %id, customer_id = %invoice.customer_id, "Seeded invoice");
        }
        summary.record(u64::from(id.is_some()));
    }

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Seeded invoices"
    );
    Ok(summary)
}
