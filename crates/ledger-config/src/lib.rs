//! # Ledger Config
//!
//! Configuration types for the Ledger seeder, loaded from environment variables.
//!
//! - [`database`]: Connection string and TLS mode
//!
//! # Example
//!
//! ```ignore
//! use ledger_config::DatabaseConfig;
//!
//! let config = DatabaseConfig::from_env()?;
//! let options = config.connect_options()?;
//! ```

pub mod database;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
