use serde::{Deserialize, Serialize};

/// One month of revenue, keyed by a short month code such as `Jan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSeed {
    pub month: String,
    pub revenue: i32,
}
