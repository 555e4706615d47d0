use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Maps a raw unique-violation error to a ConstraintViolation carrying
    /// a caller-supplied message, leaving every other error untouched.
    pub fn on_unique(e: sqlx::Error, msg: &str) -> StorageError {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.code().as_deref() == Some("23505") {
                return StorageError::ConstraintViolation(msg.to_string());
            }
        }
        StorageError::from(e)
    }

    /// Like `on_unique`, but flags the conflict as a slug collision so
    /// the API can answer with its dedicated problem type.
    pub fn on_duplicate_slug(e: sqlx::Error, msg: &str) -> StorageError {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.code().as_deref() == Some("23505") {
                return StorageError::DuplicateSlug(msg.to_string());
            }
        }
        StorageError::from(e)
    }
}
