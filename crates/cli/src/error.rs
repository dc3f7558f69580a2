use todo_core::error::CoreError;

use crate::config::ConfigError;

/// Application-level error type for `todoctl` commands.
///
/// Wraps [`CoreError`] for domain errors and adds the failures that only
/// exist at the process boundary. [`AppError::kind`] reduces every variant
/// to an [`ErrorKind`], which in turn decides the exit code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Convenience type alias for command return values.
pub type AppResult<T> = Result<T, AppError>;

/// Failure categories surfaced to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    /// Unique constraint violation.
    Conflict,
    /// Foreign key violation.
    InvalidReference,
    /// Check or not-null constraint violation, or a rejected input.
    Validation,
    Connectivity,
    Config,
    Internal,
}

impl ErrorKind {
    /// Process exit status for this kind of failure. Never `0`.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::NotFound => 3,
            ErrorKind::Conflict => 4,
            ErrorKind::InvalidReference => 5,
            ErrorKind::Validation => 6,
            ErrorKind::Connectivity => 69,
            ErrorKind::Internal => 70,
            ErrorKind::Config => 78,
        }
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => ErrorKind::NotFound,
                CoreError::Validation(_) => ErrorKind::Validation,
                CoreError::Internal(_) => ErrorKind::Internal,
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Config(_) => ErrorKind::Config,
            AppError::Migration(sqlx::migrate::MigrateError::Execute(err)) => {
                classify_sqlx_error(err)
            }
            AppError::Migration(_) | AppError::Output(_) => ErrorKind::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}

/// Classify a sqlx error by SQLSTATE or transport failure.
///
/// - `RowNotFound` is `NotFound`.
/// - `23505` unique, `23503` foreign key, `23514`/`23502` check and not-null.
/// - I/O, TLS, protocol and pool exhaustion are `Connectivity`.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => ErrorKind::Conflict,
            Some("23503") => ErrorKind::InvalidReference,
            Some("23514") | Some("23502") => ErrorKind::Validation,
            // Class 08: connection exception.
            Some(code) if code.starts_with("08") => ErrorKind::Connectivity,
            _ => ErrorKind::Internal,
        },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ErrorKind::Connectivity,
        sqlx::Error::Configuration(_) => ErrorKind::Config,
        _ => ErrorKind::Internal,
    }
}
