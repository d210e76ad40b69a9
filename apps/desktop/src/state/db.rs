//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn list_books(db: &DbState) -> Result<Vec<BookDto>, ApiError> {
//!     let books = db.inner().books().list_all().await?;
//!     Ok(books.into_iter().map(BookDto::from).collect())
//! }
//! ```

use bookstore_db::Database;

/// Wrapper around `Database` owned by a screen.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
