use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Classifies an insert/update failure: unique-index and foreign-key
    /// violations carry the given messages, everything else passes through.
    pub fn from_write(err: SqlxError, exists_msg: &str, fk_msg: &str) -> Self {
        if let SqlxError::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return RepositoryError::AlreadyExists(exists_msg.to_string());
            }
            if db_err.is_foreign_key_violation() {
                return RepositoryError::ForeignKey(fk_msg.to_string());
            }
        }
        RepositoryError::Sqlx(err)
    }
}
