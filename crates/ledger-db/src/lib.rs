//! # Ledger DB
//!
//! Opens the single PostgreSQL connection a seeding run works on.
//!
//! The seeder never pools: one connection is opened at startup, the whole run
//! happens in one transaction on it, and the caller closes it on the way out.
//!
//! # Example
//!
//! ```ignore
//! use ledger_config::DatabaseConfig;
//!
//! let config = DatabaseConfig::from_env()?;
//! let mut conn = ledger_db::connect(&config).await?;
//! // ... seed ...
//! ledger_db::close(conn).await;
//! ```

use ledger_config::DatabaseConfig;
use ledger_core::SeedError;
use sqlx::{ConnectOptions, Connection};
use tracing::{info, warn};

// Re-export PgConnection for convenience
pub use sqlx::PgConnection;

/// Opens a connection using the configured URL and TLS mode.
///
/// # Errors
///
/// - [`SeedError::Config`] if the URL cannot be parsed
/// - [`SeedError::Connection`] if the server cannot be reached, refuses the
///   credentials, or the TLS handshake fails
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, SeedError> {
    let options = config.connect_options()?;

    let conn = options.connect().await.map_err(SeedError::Connection)?;

    info!(ssl_mode = ?config.ssl_mode, "Connected to database");
    Ok(conn)
}

/// Closes the connection, logging rather than failing if the server is
/// already gone.
pub async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close database connection cleanly");
    }
}
