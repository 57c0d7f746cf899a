//! # Ledger Core
//!
//! Core types and utilities shared by the Ledger seeder crates.
//!
//! - [`errors`]: The [`SeedError`] taxonomy every crate propagates
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use ledger_core::password::{hash_password, verify_password};
//!
//! let hash = hash_password("123456")?;
//! assert!(verify_password("123456", &hash)?);
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::SeedError;
pub use password::{PASSWORD_HASH_COST, hash_password, hash_password_blocking, verify_password};
