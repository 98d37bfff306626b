//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors. Uniqueness violations are pulled out into their own
//! variant because callers treat "that key is taken" differently from
//! "the store failed": the former is the caller's naming collision, the
//! latter is an operational fault.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An insert hit a uniqueness constraint (e.g. a nation slug that is
    /// already taken).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Classify an [`sqlx::Error`], converting unique-constraint
    /// violations into [`DbError::Conflict`] with the given message.
    ///
    /// The store never pre-checks before inserting; the database's
    /// constraint is the collision arbiter, so this is the single place
    /// where "already exists" is recognized.
    pub(crate) fn on_conflict(err: sqlx::Error, message: impl Into<String>) -> Self {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(message.into())
            }
            other => Self::Postgres(other),
        }
    }
}
