//! # Validation Module
//!
//! Input validation for the Add Book form, the login screen and the search
//! box.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (ui/)                                                  │
//! │  └── Enter only submits when the fields look filled                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (apps/desktop/commands)                                │
//! │  └── THIS MODULE: required fields, allow-lists                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  ├── NOT NULL constraints                                               │
//! │  └── PRIMARY KEY / UNIQUE constraints                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::validate_new_book;
//! use bookstore_core::NewBook;
//!
//! let book = NewBook {
//!     name: "Dune".into(),
//!     publisher: "Chilton".into(),
//!     author: "Frank Herbert".into(),
//!     year: "1965".into(),
//!     genre: "Science fiction".into(),
//!     language: "EN".into(),
//!     isbn: "978-0441013593".into(),
//!     quantity: "4".into(),
//! };
//! assert!(validate_new_book(&book).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::{Credentials, Genre, Language, NewBook};
use crate::MAX_SEARCH_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Add Book
// =============================================================================

/// Validates Add Book form input.
///
/// ## Rules (checked in this order)
/// 1. Every field is non-empty after trimming
/// 2. Genre is in the genre allow-list, exactly as typed
/// 3. Language is in the language allow-list, exactly as typed
///
/// Field length is not limited.
///
/// ## Returns
/// A copy of the input with every field trimmed, ready to insert.
pub fn validate_new_book(book: &NewBook) -> ValidationResult<NewBook> {
    let trimmed = NewBook {
        name: book.name.trim().to_string(),
        publisher: book.publisher.trim().to_string(),
        author: book.author.trim().to_string(),
        year: book.year.trim().to_string(),
        genre: book.genre.trim().to_string(),
        language: book.language.trim().to_string(),
        isbn: book.isbn.trim().to_string(),
        quantity: book.quantity.trim().to_string(),
    };

    let fields = [
        ("Book Name", &trimmed.name),
        ("Publisher", &trimmed.publisher),
        ("Author Name", &trimmed.author),
        ("Year", &trimmed.year),
        ("Genre", &trimmed.genre),
        ("Language", &trimmed.language),
        ("ISBN", &trimmed.isbn),
        ("Quantity", &trimmed.quantity),
    ];

    if fields.iter().any(|(_, value)| value.is_empty()) {
        return Err(ValidationError::AllFieldsRequired);
    }

    // Allow-list values are compared untrimmed: " Drama " is not "Drama"
    validate_genre(&book.genre)?;
    validate_language(&book.language)?;

    Ok(trimmed)
}

/// Checks a genre against the allow-list.
pub fn validate_genre(genre: &str) -> ValidationResult<Genre> {
    Genre::from_label(genre).ok_or_else(|| ValidationError::InvalidChoice {
        field: "Genre".to_string(),
        value: genre.to_string(),
    })
}

/// Checks a language code against the allow-list.
pub fn validate_language(language: &str) -> ValidationResult<Language> {
    Language::from_label(language).ok_or_else(|| ValidationError::InvalidChoice {
        field: "Language".to_string(),
        value: language.to_string(),
    })
}

// =============================================================================
// Login
// =============================================================================

/// Validates that both login fields were filled in.
///
/// Values are not trimmed: credentials are compared exactly as typed.
pub fn validate_credentials(credentials: &Credentials) -> ValidationResult<()> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(())
}

// =============================================================================
// Search
// =============================================================================

/// Validates a search term.
///
/// ## Rules
/// - Can be empty (shows every book)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed term.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(term.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> NewBook {
        NewBook {
            name: "Dune".to_string(),
            publisher: "Chilton".to_string(),
            author: "Frank Herbert".to_string(),
            year: "1965".to_string(),
            genre: "Science fiction".to_string(),
            language: "EN".to_string(),
            isbn: "978-0441013593".to_string(),
            quantity: "4".to_string(),
        }
    }

    #[test]
    fn test_valid_book_is_trimmed() {
        let mut input = dune();
        input.name = "  Dune  ".to_string();
        let book = validate_new_book(&input).unwrap();
        assert_eq!(book.name, "Dune");
    }

    #[test]
    fn test_any_empty_field_is_rejected() {
        let mut input = dune();
        input.quantity = "   ".to_string();
        assert_eq!(
            validate_new_book(&input),
            Err(ValidationError::AllFieldsRequired)
        );

        assert_eq!(
            validate_new_book(&NewBook::default()),
            Err(ValidationError::AllFieldsRequired)
        );
    }

    #[test]
    fn test_genre_not_in_allow_list() {
        let mut input = dune();
        input.genre = "Poetry".to_string();
        let err = validate_new_book(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Genre: 'Poetry'. Please select a valid option."
        );
    }

    #[test]
    fn test_language_checked_after_genre() {
        let mut input = dune();
        input.genre = "Poetry".to_string();
        input.language = "Klingon".to_string();
        assert!(matches!(
            validate_new_book(&input),
            Err(ValidationError::InvalidChoice { ref field, .. }) if field == "Genre"
        ));

        input.genre = "Drama".to_string();
        assert!(matches!(
            validate_new_book(&input),
            Err(ValidationError::InvalidChoice { ref field, .. }) if field == "Language"
        ));
    }

    #[test]
    fn test_fiction_is_a_genre_not_a_language() {
        assert!(validate_genre("Fiction").is_ok());
        assert!(validate_language("Fiction").is_err());
    }

    #[test]
    fn test_long_field_is_accepted() {
        let mut input = dune();
        input.name = "A".repeat(500);
        let book = validate_new_book(&input).unwrap();
        assert_eq!(book.name.len(), 500);
    }

    #[test]
    fn test_padded_choice_is_rejected() {
        let mut input = dune();
        input.genre = " Drama ".to_string();
        assert!(matches!(
            validate_new_book(&input),
            Err(ValidationError::InvalidChoice { ref field, ref value })
                if field == "Genre" && value == " Drama "
        ));

        input.genre = "Drama".to_string();
        input.language = "EN ".to_string();
        assert!(matches!(
            validate_new_book(&input),
            Err(ValidationError::InvalidChoice { ref field, .. }) if field == "Language"
        ));
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials(&Credentials::new("admin", "secret")).is_ok());
        assert_eq!(
            validate_credentials(&Credentials::new("", "secret")),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials(&Credentials::new("admin", "")),
            Err(ValidationError::MissingCredentials)
        );
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term("  dune ").unwrap(), "dune");
        assert_eq!(validate_search_term("").unwrap(), "");
        assert!(validate_search_term(&"x".repeat(101)).is_err());
    }
}
