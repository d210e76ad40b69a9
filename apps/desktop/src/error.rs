//! # Error Types
//!
//! `ApiError` is what every command returns; `AppError` covers the process
//! itself (terminal, logging, hand-off).
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Bookstore                          │
//! │                                                                         │
//! │  Screen                      Commands                                   │
//! │  ──────                      ────────                                   │
//! │                                                                         │
//! │  block_on(delete_book(..))                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Database Error? ─── DbError::NotFound { .. } ─────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Validation Error? ─── CoreError::Validation ──── ApiError ────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  match result {                                                         │
//! │    Err(e) => dialog = Dialog::error(e.message),                         │
//! │    //        e.code = NOT_FOUND                                         │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use bookstore_core::{CoreError, ValidationError};
use bookstore_db::DbError;

/// Message shown when the database file is absent.
pub const MSG_DATABASE_MISSING: &str = "Database not found.";

/// Message shown when the database file cannot be opened.
pub const MSG_CONNECTION_FAILED: &str = "Database connection failed.";

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNAUTHORIZED",
///   "message": "Wrong Username or Password"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Book no longer exists
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Username/password pair rejected
    Unauthorized,

    /// Database file absent
    DatabaseMissing,

    /// Database operation failed
    DatabaseError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::DatabaseMissing(path) => {
                tracing::error!(path = %path.display(), "Database file missing");
                ApiError::new(ErrorCode::DatabaseMissing, MSG_DATABASE_MISSING)
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, MSG_CONNECTION_FAILED)
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database update failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database update failed.")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ApiError::new(ErrorCode::ValidationError, "Invalid reference")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database is busy, try again")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => ApiError::not_found("Book", &id.to_string()),
            CoreError::InvalidCredentials => {
                ApiError::new(ErrorCode::Unauthorized, err.to_string())
            }
            // The bare validation text is what the dialogs show
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(CoreError::from(err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Process Errors
// =============================================================================

/// Failures outside any single command.
#[derive(Debug, Error)]
pub enum AppError {
    /// Raw mode, alternate screen or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The next screen process could not be started.
    #[error("Could not start the {screen} screen: {source}")]
    HandOff {
        screen: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The async runtime could not be built.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// The log file could not be opened.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type for process-level operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::new(ErrorCode::Unauthorized, "Wrong Username or Password");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNAUTHORIZED");
        assert_eq!(json["message"], "Wrong Username or Password");
    }

    #[test]
    fn test_database_messages() {
        let err = ApiError::from(DbError::DatabaseMissing(PathBuf::from("db/x.db")));
        assert_eq!(err.code, ErrorCode::DatabaseMissing);
        assert_eq!(err.message, "Database not found.");

        let err = ApiError::from(DbError::ConnectionFailed("file is not a database".into()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database connection failed.");
    }

    #[test]
    fn test_core_errors() {
        let err = ApiError::from(CoreError::InvalidCredentials);
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "Wrong Username or Password");

        let err = ApiError::from(ValidationError::AllFieldsRequired);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "All fields are required!");

        let err = ApiError::from(CoreError::BookNotFound(7));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Book not found: 7");
    }
}
