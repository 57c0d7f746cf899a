//! Database seeding for the dashboard tables.
//!
//! Everything happens inside one transaction on one connection, in a fixed
//! order: users, customers, invoices, revenue. Each step creates its table if
//! missing and inserts its records, skipping any whose key is already present.
//! If any step fails the transaction is rolled back, including the DDL, so a
//! failed run leaves the database as it found it.
//!
//! # Module Structure
//!
//! - [`users`] - `users` table, bcrypt-hashed passwords
//! - [`customers`] - `customers` table
//! - [`invoices`] - `invoices` table, database-generated ids
//! - [`revenue`] - `revenue` table keyed by month code
//! - [`models`] - Per-table and per-run insert counts
//!
//! # Usage
//!
//! ```ignore
//! use ledger_cli::{placeholder, seeder};
//!
//! let summary = seeder::seed(&mut conn, &placeholder::datasets()).await?;
//! println!("{}", summary);
//! ```

pub mod customers;
pub mod invoices;
pub mod models;
pub mod revenue;
pub mod users;

pub use models::{SeedSummary, TableSummary};

use ledger_core::SeedError;
use ledger_models::Datasets;
use sqlx::{Connection, PgConnection, Postgres, Transaction};
use std::time::Instant;
use tracing::{info, warn};

/// Seeds all four tables atomically.
///
/// # Errors
///
/// Any failure aborts the transaction and is returned unchanged; nothing from
/// this run is committed.
pub async fn seed(conn: &mut PgConnection, datasets: &Datasets) -> Result<SeedSummary, SeedError> {
    let start_time = Instant::now();
    info!(
        users = datasets.users.len(),
        customers = datasets.customers.len(),
        invoices = datasets.invoices.len(),
        revenue = datasets.revenue.len(),
        "Starting seed transaction"
    );

    let mut tx = conn.begin().await.map_err(SeedError::Connection)?;

    match seed_tables(&mut tx, datasets).await {
        Ok(summary) => {
            tx.commit().await.map_err(SeedError::Connection)?;
            info!(elapsed = ?start_time.elapsed(), "Seed transaction committed");
            Ok(summary)
        }
        Err(e) => {
            warn!(error = %e, "Seeding failed, rolling back transaction");
            if let Err(rollback_err) = tx.rollback().await {
                // The server discards the transaction with the connection anyway.
                warn!(error = %rollback_err, "Explicit rollback failed");
            }
            Err(e)
        }
    }
}

async fn seed_tables(
    tx: &mut Transaction<'_, Postgres>,
    datasets: &Datasets,
) -> Result<SeedSummary, SeedError> {
    let users = users::seed_users(tx, &datasets.users).await?;
    let customers = customers::seed_customers(tx, &datasets.customers).await?;
    let invoices = invoices::seed_invoices(tx, &datasets.invoices).await?;
    let revenue = revenue::seed_revenue(tx, &datasets.revenue).await?;

    Ok(SeedSummary {
        users,
        customers,
        invoices,
        revenue,
    })
}

/// Makes `uuid_generate_v4()` available for the id column defaults.
pub(crate) async fn ensure_uuid_extension(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<(), SeedError> {
    sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
        .execute(&mut **tx)
        .await
        .map_err(SeedError::schema("extension uuid-ossp"))?;

    Ok(())
}
