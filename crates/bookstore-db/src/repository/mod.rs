//! # Repository Module
//!
//! Database repository implementations for the bookstore.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Command                                                                │
//! │       │                                                                 │
//! │       │  db.books().delete(3)                                           │
//! │       ▼                                                                 │
//! │  BookRepository                                                         │
//! │  ├── list_all / search / get_by_id                                      │
//! │  ├── next_id / insert                                                   │
//! │  └── delete (+ renumber)                                                │
//! │                                                                         │
//! │  UserRepository                                                         │
//! │  └── verify / insert                                                    │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`book::BookRepository`] - Book table reads, inserts and deletes
//! - [`user::UserRepository`] - Login lookups

pub mod book;
pub mod user;
