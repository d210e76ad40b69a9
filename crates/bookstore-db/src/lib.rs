//! # bookstore-db: Database Layer for the Bookstore
//!
//! This crate provides database access for the bookstore.
//! It uses a single SQLite file with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Data Flow                              │
//! │                                                                         │
//! │  Command (add_book)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookstore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │    │   │
//! │  │   │   (pool.rs)   │    │  (book.rs)    │    │  (embedded)  │    │   │
//! │  │   │               │    │  (user.rs)    │    │              │    │   │
//! │  │   │ SqlitePool    │◄───│ BookRepo      │    │ 001_init.sql │    │   │
//! │  │   │               │    │ UserRepo      │    │              │    │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘    │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │              ./db/bookstore_management.db                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (books, users)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookstore_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./db/bookstore_management.db")).await?;
//!
//! let books = db.books().list_all().await?;
//! db.books().delete(3).await?; // IDs above 3 shift down by one
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{database_exists, Database, DbConfig};

// Repository re-exports for convenience
pub use repository::book::BookRepository;
pub use repository::user::UserRepository;
