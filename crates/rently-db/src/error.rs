//! Database-specific error types and conversions.

use rently_core::error::CoreError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// Unique-index violation. How a duplicate-email race loses.
    #[error("Record already exists: {entity}")]
    Duplicate { entity: String },

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Row decode failed: {0}")]
    Decode(String),
}

impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            DbError::Duplicate { entity } => CoreError::AlreadyExists { entity },
            DbError::Crypto(msg) => CoreError::Crypto(msg),
            other => CoreError::Database(other.to_string()),
        }
    }
}
