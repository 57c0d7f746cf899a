//! The four datasets a seeding run inserts, in insertion order.

use serde::Deserialize;
use std::path::Path;

use ledger_core::SeedError;

use crate::{CustomerSeed, InvoiceSeed, RevenueSeed, UserSeed};

/// Users, customers, invoices and revenue samples to seed.
///
/// Records are inserted in the order given. Nothing is validated here beyond
/// shape; the table constraints are the only checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Datasets {
    pub users: Vec<UserSeed>,
    pub customers: Vec<CustomerSeed>,
    pub invoices: Vec<InvoiceSeed>,
    pub revenue: Vec<RevenueSeed>,
}

impl Datasets {
    /// Parses a JSON document of the form
    /// `{"users": [...], "customers": [...], "invoices": [...], "revenue": [...]}`.
    /// Missing arrays are treated as empty.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Data`] if the file cannot be read or is not a
    /// valid dataset document.
    pub fn from_json_file(path: &Path) -> Result<Self, SeedError> {
        let data_error = |reason: String| SeedError::Data {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| data_error(e.to_string()))?;
        Self::from_json_str(&raw).map_err(|e| data_error(e.to_string()))
    }

    /// Total number of records across all four datasets.
    pub fn len(&self) -> usize {
        self.users.len() + self.customers.len() + self.invoices.len() + self.revenue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = r#"{
        "users": [
            {"id": "410544b2-4001-4271-9855-fec4b6a6442a", "name": "User",
             "email": "user@nextmail.com", "password": "123456"}
        ],
        "customers": [
            {"id": "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa", "name": "Evil Rabbit",
             "email": "evil@rabbit.com", "image_url": "/customers/evil-rabbit.png"}
        ],
        "invoices": [
            {"customer_id": "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa", "amount": 15795,
             "status": "pending", "date": "2022-12-06"}
        ],
        "revenue": [{"month": "Jan", "revenue": 2000}]
    }"#;

    #[test]
    fn test_parse_full_document() {
        let data = Datasets::from_json_str(SAMPLE).unwrap();

        assert_eq!(data.users.len(), 1);
        assert_eq!(data.users[0].password, "123456");
        assert_eq!(data.customers[0].image_url, "/customers/evil-rabbit.png");
        assert_eq!(
            data.invoices[0].date,
            NaiveDate::from_ymd_opt(2022, 12, 6).unwrap()
        );
        assert_eq!(data.invoices[0].customer_id, data.customers[0].id);
        assert_eq!(data.revenue[0].revenue, 2000);
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let data = Datasets::from_json_str(r#"{"revenue": [{"month": "Feb", "revenue": 1800}]}"#)
            .unwrap();

        assert!(data.users.is_empty());
        assert!(data.customers.is_empty());
        assert!(data.invoices.is_empty());
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_invalid_uuid_rejected() {
        let result = Datasets::from_json_str(
            r#"{"users": [
                {"id": "u1", "name": "Ana", "email": "ana@x.com", "password": "secret"}
            ]}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_data_error() {
        let result = Datasets::from_json_file(Path::new("/nonexistent/ledger-seed.json"));

        match result {
            Err(SeedError::Data { path, .. }) => assert_eq!(path, "/nonexistent/ledger-seed.json"),
            other => panic!("expected data error, got {:?}", other),
        }
    }
}
