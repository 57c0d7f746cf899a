//! Choosing where the datasets come from.

use std::path::Path;

use ledger_core::SeedError;
use ledger_models::Datasets;
use tracing::info;

use crate::placeholder;

/// Loads datasets from `path` when given, otherwise returns the built-in
/// placeholder data.
pub fn load_datasets(path: Option<&Path>) -> Result<Datasets, SeedError> {
    match path {
        Some(path) => {
            let datasets = Datasets::from_json_file(path)?;
            info!(path = %path.display(), records = datasets.len(), "Loaded seed data file");
            Ok(datasets)
        }
        None => Ok(placeholder::datasets()),
    }
}
