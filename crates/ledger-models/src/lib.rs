//! # Ledger Models
//!
//! Record types for the four datasets a seeding run inserts.
//!
//! - [`ids`]: Strongly-typed UUID newtypes
//! - [`users`]: Dashboard login accounts
//! - [`customers`]: Billed customers
//! - [`invoices`]: Invoices referencing customers
//! - [`revenue`]: Monthly revenue samples
//! - [`datasets`]: The four datasets bundled together

pub mod customers;
pub mod datasets;
pub mod ids;
pub mod invoices;
pub mod revenue;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use customers::CustomerSeed;
pub use datasets::Datasets;
pub use ids::{CustomerId, InvoiceId, UserId};
pub use invoices::InvoiceSeed;
pub use revenue::RevenueSeed;
pub use users::UserSeed;
