//! # Book Commands
//!
//! Commands behind the main window's table and the Add Book form.
//!
//! ## Delete Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Delete Book Flow                                     │
//! │                                                                         │
//! │  Row "3 Ulysses" selected, Delete pressed                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Confirm dialog: "Delete 'Ulysses'?"                                    │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  delete_book(db, 3)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DELETE + renumber in one transaction (IDs stay 1..N)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_books(db) ──► table redrawn with the new IDs                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use bookstore_core::validation::{validate_new_book, validate_search_term};
use bookstore_core::{Book, CoreError, NewBook, SearchField};

/// Book row as shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i64,
    pub name: String,
    pub publisher: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub language: String,
    pub isbn: String,
    pub quantity: String,
}

impl From<Book> for BookDto {
    fn from(b: Book) -> Self {
        BookDto {
            id: b.id,
            name: b.name,
            publisher: b.publisher,
            author: b.author,
            year: b.year,
            genre: b.genre,
            language: b.language,
            isbn: b.isbn,
            quantity: b.quantity,
        }
    }
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Book {
            id: dto.id,
            name: dto.name,
            publisher: dto.publisher,
            author: dto.author,
            year: dto.year,
            genre: dto.genre,
            language: dto.language,
            isbn: dto.isbn,
            quantity: dto.quantity,
        }
    }
}

/// Add Book form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookInput {
    pub name: String,
    pub publisher: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub language: String,
    pub isbn: String,
    pub quantity: String,
}

impl From<NewBookInput> for NewBook {
    fn from(input: NewBookInput) -> Self {
        NewBook {
            name: input.name,
            publisher: input.publisher,
            author: input.author,
            year: input.year,
            genre: input.genre,
            language: input.language,
            isbn: input.isbn,
            quantity: input.quantity,
        }
    }
}

/// Loads every book, ordered by ID.
pub async fn list_books(db: &DbState) -> Result<Vec<BookDto>, ApiError> {
    let start = Instant::now();

    let books = db.inner().books().list_all().await?;
    let dtos: Vec<BookDto> = books.into_iter().map(BookDto::from).collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "list_books complete"
    );
    Ok(dtos)
}

/// Filters books on one column.
///
/// ## Arguments
/// * `field` - Column chosen in the search filter
/// * `term` - Substring to look for; empty shows every book
pub async fn search_books(
    db: &DbState,
    field: SearchField,
    term: String,
) -> Result<Vec<BookDto>, ApiError> {
    let term = validate_search_term(&term)?;
    debug!(field = field.label(), term = %term, "search_books command");

    let books = db.inner().books().search(field, &term).await?;
    Ok(books.into_iter().map(BookDto::from).collect())
}

/// Gets a single book by its current ID.
///
/// ## When To Use
/// - Book Information dialog, to show the row as stored right now
pub async fn get_book(db: &DbState, id: i64) -> Result<BookDto, ApiError> {
    debug!(id, "get_book command");

    let book = db
        .inner()
        .books()
        .get_by_id(id)
        .await?
        .ok_or(CoreError::BookNotFound(id))?;
    Ok(BookDto::from(book))
}

/// Validates the form and stores the book with the next free ID.
///
/// ## Returns
/// The stored book, or a `VALIDATION_ERROR` whose message the form shows
/// as-is ("All fields are required!", "Invalid Genre: ...").
pub async fn add_book(db: &DbState, input: NewBookInput) -> Result<BookDto, ApiError> {
    debug!(name = %input.name, "add_book command");

    let book = validate_new_book(&NewBook::from(input))?;
    let stored = db.inner().books().insert(&book).await?;

    info!(id = stored.id, name = %stored.name, "Book added");
    Ok(BookDto::from(stored))
}

/// Deletes a book; every higher ID moves down by one.
pub async fn delete_book(db: &DbState, id: i64) -> Result<(), ApiError> {
    debug!(id, "delete_book command");

    db.inner().books().delete(id).await?;

    info!(id, "Book deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bookstore_db::{Database, DbConfig};

    fn input(name: &str) -> NewBookInput {
        NewBookInput {
            name: name.to_string(),
            publisher: "Penguin".to_string(),
            author: "Someone".to_string(),
            year: "2001".to_string(),
            genre: "Fiction".to_string(),
            language: "EN".to_string(),
            isbn: "978-0".to_string(),
            quantity: "1".to_string(),
        }
    }

    async fn db_with(names: &[&str]) -> DbState {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        for name in names {
            add_book(&db, input(name)).await.unwrap();
        }
        db
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let db = db_with(&[]).await;

        let first = add_book(&db, input("Emma")).await.unwrap();
        let second = add_book(&db, input("Persuasion")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
    }

    #[tokio::test]
    async fn test_add_rejects_incomplete_form() {
        let db = db_with(&[]).await;

        let mut form = input("Emma");
        form.isbn = "   ".to_string();
        let err = add_book(&db, form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "All fields are required!");
        assert!(list_books(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_unknown_genre() {
        let db = db_with(&[]).await;

        let mut form = input("Emma");
        form.genre = "Poetry".to_string();
        let err = add_book(&db, form).await.unwrap_err();
        assert_eq!(err.message, "Invalid Genre: 'Poetry'. Please select a valid option.");
    }

    #[tokio::test]
    async fn test_delete_renumbers() {
        let db = db_with(&["A", "B", "C"]).await;

        delete_book(&db, 2).await.unwrap();

        let rows: Vec<(i64, String)> = list_books(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect();
        assert_eq!(rows, vec![(1, "A".to_string()), (2, "C".to_string())]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = db_with(&["A"]).await;

        let err = delete_book(&db, 5).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_get_book() {
        let db = db_with(&["A"]).await;

        assert_eq!(get_book(&db, 1).await.unwrap().name, "A");
        let err = get_book(&db, 2).await.unwrap_err();
        assert_eq!(err.message, "Book not found: 2");
    }

    #[tokio::test]
    async fn test_search_books() {
        let db = db_with(&["Dune", "Emma"]).await;

        let found = search_books(&db, SearchField::BookName, " emm ".into())
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Emma");

        let err = search_books(&db, SearchField::AuthorName, "x".repeat(101))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
