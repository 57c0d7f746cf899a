//! # Ledger CLI
//!
//! Seeds the dashboard database with its placeholder data.
//!
//! This library crate provides the seeding functionality used by the
//! `ledger-seed` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use ledger_cli::{placeholder, seeder};
//!
//! let mut conn = ledger_db::connect(&config).await?;
//! let summary = seeder::seed(&mut conn, &placeholder::datasets()).await?;
//! ledger_db::close(conn).await;
//! ```

pub mod data;
pub mod placeholder;
pub mod seeder;
