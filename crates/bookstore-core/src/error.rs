//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Form input failures                             │
//! │                                                                         │
//! │  bookstore-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  Desktop app errors                                                     │
//! │  └── ApiError         - What the screens show in a dialog               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Dialog                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation messages are written for the user: they are shown verbatim in
//! the error dialog of the screen that raised them.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Book cannot be found.
    ///
    /// ## When This Occurs
    /// - The selected row was deleted by another window
    /// - IDs were renumbered after a delete and the view is stale
    #[error("Book not found: {0}")]
    BookNotFound(i64),

    /// No `usuarios` row matches the username/password pair.
    #[error("Wrong Username or Password")]
    InvalidCredentials,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A single required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// At least one Add Book field was left empty.
    #[error("All fields are required!")]
    AllFieldsRequired,

    /// Value is not in the field's allow-list.
    ///
    /// ## User Workflow
    /// ```text
    /// Genre: "Poetry"
    ///      │
    ///      ▼
    /// InvalidChoice { field: "Genre", value: "Poetry" }
    ///      │
    ///      ▼
    /// Dialog: "Invalid Genre: 'Poetry'. Please select a valid option."
    /// ```
    #[error("Invalid {field}: '{value}'. Please select a valid option.")]
    InvalidChoice { field: String, value: String },

    /// Login attempted with an empty username or password.
    #[error("Please enter both username and password.")]
    MissingCredentials,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::BookNotFound(7).to_string(), "Book not found: 7");
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Wrong Username or Password"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::AllFieldsRequired.to_string(),
            "All fields are required!"
        );

        let err = ValidationError::InvalidChoice {
            field: "Genre".to_string(),
            value: "Poetry".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid Genre: 'Poetry'. Please select a valid option."
        );

        assert_eq!(
            ValidationError::MissingCredentials.to_string(),
            "Please enter both username and password."
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::AllFieldsRequired.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
