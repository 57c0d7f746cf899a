use serde::{Deserialize, Serialize};

use crate::ids::CustomerId;

/// A customer to seed. Emails are not unique across customers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSeed {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Path or URL of the customer's avatar.
    pub image_url: String,
}
