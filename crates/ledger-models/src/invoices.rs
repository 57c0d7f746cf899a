use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::CustomerId;

/// An invoice to seed.
///
/// Carries no id; the database generates one on insert. `customer_id` is not
/// enforced as a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSeed {
    pub customer_id: CustomerId,
    /// Amount in cents.
    pub amount: i32,
    /// Free-text status label, e.g. `pending` or `paid`.
    pub status: String,
    pub date: NaiveDate,
}
