use bcrypt::{hash, verify};

use crate::errors::SeedError;

/// bcrypt cost factor used for every seeded password.
pub const PASSWORD_HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, SeedError> {
    hash_password_with_cost(password, PASSWORD_HASH_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, SeedError> {
    Ok(hash(password, cost)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    Ok(verify(password, hash)?)
}

/// Hashes on the blocking pool so the runtime thread is not held for the
/// duration of the bcrypt rounds.
pub async fn hash_password_blocking(password: String) -> Result<String, SeedError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}
