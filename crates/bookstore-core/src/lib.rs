//! # bookstore-core: Pure Business Logic for the Bookstore
//!
//! This crate contains the bookstore's business rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bookstore Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal UI (ratatui)                          │   │
//! │  │      Splash ──► Login ──► Main window ──► Add Book form         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Commands (apps/desktop)                      │   │
//! │  │        login, list_books, add_book, delete_book, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ bookstore-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐  ┌──────────────┐  ┌───────────────┐          │   │
//! │  │   │   types     │  │  validation  │  │    error      │          │   │
//! │  │   │  Book, IDs  │  │  form rules  │  │  CoreError    │          │   │
//! │  │   │  sorting    │  │  allow-lists │  │  Validation   │          │   │
//! │  │   └─────────────┘  └──────────────┘  └───────────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                bookstore-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, Genre, Language, Credentials, etc.)
//! - [`error`] - Domain error types
//! - [`validation`] - Add-book and login validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::next_book_id;
//!
//! // Empty table: numbering starts at 1
//! assert_eq!(next_book_id(None), 1);
//!
//! // Otherwise one past the current maximum
//! assert_eq!(next_book_id(Some(41)), 42);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a search term typed into the main window.
pub const MAX_SEARCH_LEN: usize = 100;

/// Computes the ID for the next inserted book.
///
/// Book IDs are kept as a contiguous `1..N` sequence, so the next ID is one
/// past the current maximum. An empty table (no maximum, or a maximum of 0)
/// starts numbering at 1.
pub fn next_book_id(current_max: Option<i64>) -> i64 {
    match current_max {
        Some(max) if max > 0 => max + 1,
        _ => 1,
    }
}
