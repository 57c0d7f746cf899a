//! Error taxonomy for the seeding run.
//!
//! Every failure, whatever its origin, aborts the whole transaction and is
//! reported once by the binary. The variants exist so that the report carries
//! enough context (which table, which constraint) to act on.

/// Error type for seeding operations.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Failed to create {object}: {source}")]
    Schema {
        object: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Duplicate value in {table} violates unique constraint {constraint}")]
    UniqueViolation {
        table: &'static str,
        constraint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to insert into {table}: {source}")]
    Insert {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),

    #[error("Failed to load seed data from {path}: {reason}")]
    Data { path: String, reason: String },
}

impl SeedError {
    /// Classifies a failed insert.
    ///
    /// Unique violations get their own variant; conflicts on the key a statement
    /// names in `ON CONFLICT` never reach here.
    pub fn insert(table: &'static str, err: sqlx::Error) -> Self {
        let constraint = err
            .as_database_error()
            .filter(|db| db.is_unique_violation())
            .map(|db| db.constraint().unwrap_or("unknown").to_string());

        match constraint {
            Some(constraint) => Self::UniqueViolation {
                table,
                constraint,
                source: err,
            },
            None => Self::Insert { table, source: err },
        }
    }

    /// Wraps a DDL failure for the given schema object.
    pub fn schema(object: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Schema { object, source }
    }

    /// Returns `true` for the duplicate-key class of failures.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}
