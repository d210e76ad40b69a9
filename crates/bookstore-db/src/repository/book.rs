//! # Book Repository
//!
//! Database operations for the `books` table.
//!
//! ## ID Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Contiguous Book IDs                                  │
//! │                                                                         │
//! │  insert:  SELECT MAX(book_id) ──► max + 1 (or 1) ──► INSERT             │
//! │                                                                         │
//! │  delete(2):                                                             │
//! │                                                                         │
//! │    before        DELETE 2       stage (+7)           final              │
//! │    1 Emma        1 Emma          8 Emma               1 Emma            │
//! │    2 Dune   ──►  3 Ulysses ──►   9 Ulysses     ──►    2 Ulysses         │
//! │    3 Ulysses     4 Beloved      10 Beloved            3 Beloved         │
//! │    4 Beloved                                                            │
//! │                                                                         │
//! │  ROW_NUMBER() OVER (ORDER BY book_id) gives each row its position.      │
//! │  The offset is MAX(ABS(book_id)) + COUNT(*): staged IDs sit above       │
//! │  every current ID and every final position, so the primary key stays    │
//! │  unique at every step, whatever order SQLite visits rows in.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both the insert and the delete + renumber pair run in one transaction,
//! so two windows cannot interleave between reading and writing IDs.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use bookstore_core::{next_book_id, Book, NewBook, SearchField};

/// Column list shared by every book read.
///
/// Text columns are coerced so rows written with other storage classes
/// (integers, NULL) still decode into `Book`.
const SELECT_BOOKS: &str = r#"
    SELECT
        book_id AS id,
        COALESCE(CAST(book_name AS TEXT), '') AS name,
        COALESCE(CAST(book_publisher AS TEXT), '') AS publisher,
        COALESCE(CAST(author_name AS TEXT), '') AS author,
        COALESCE(CAST(book_year AS TEXT), '') AS year,
        COALESCE(CAST(book_genre AS TEXT), '') AS genre,
        COALESCE(CAST(book_language AS TEXT), '') AS language,
        COALESCE(CAST(book_ISBN AS TEXT), '') AS isbn,
        COALESCE(CAST(book_quantity AS TEXT), '') AS quantity
    FROM books
"#;

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
///
/// let book = repo.insert(&new_book).await?;
/// repo.delete(book.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Loads every book, ordered by ID.
    pub async fn list_all(&self) -> DbResult<Vec<Book>> {
        let sql = format!("{SELECT_BOOKS} ORDER BY book_id");
        let books = sqlx::query_as::<_, Book>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = books.len(), "Loaded books");
        Ok(books)
    }

    /// Finds books whose `field` contains `term` (case-insensitive for ASCII).
    ///
    /// An empty term returns every book.
    pub async fn search(&self, field: SearchField, term: &str) -> DbResult<Vec<Book>> {
        let term = term.trim();

        debug!(field = field.label(), term = %term, "Searching books");

        if term.is_empty() {
            return self.list_all().await;
        }

        // column_name() is a fixed identifier, never user input
        let sql = format!(
            "{SELECT_BOOKS} WHERE CAST({} AS TEXT) LIKE ?1 ESCAPE '\\' ORDER BY book_id",
            field.column_name()
        );
        let pattern = format!("%{}%", escape_like(term));

        let books = sqlx::query_as::<_, Book>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = books.len(), "Search returned books");
        Ok(books)
    }

    /// Gets a book by its current ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - No row with that ID
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Book>> {
        let sql = format!("{SELECT_BOOKS} WHERE book_id = ?1");
        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    /// Returns the ID the next insert would receive.
    pub async fn next_id(&self) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        current_next_id(&mut conn).await
    }

    /// Inserts a book, assigning `MAX(book_id) + 1` (or 1 when empty).
    ///
    /// The caller is expected to have validated the input.
    ///
    /// ## Returns
    /// * `Ok(Book)` - The stored row with its assigned ID
    /// * `Err(DbError::UniqueViolation)` - Another writer took the ID first
    pub async fn insert(&self, book: &NewBook) -> DbResult<Book> {
        let mut tx = self.pool.begin().await?;

        let id = current_next_id(&mut tx).await?;
        debug!(id, name = %book.name, "Inserting book");

        sqlx::query(
            r#"
            INSERT INTO books (
                book_id, book_name, book_publisher, author_name, book_year,
                book_genre, book_language, book_ISBN, book_quantity
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(id)
        .bind(&book.name)
        .bind(&book.publisher)
        .bind(&book.author)
        .bind(&book.year)
        .bind(&book.genre)
        .bind(&book.language)
        .bind(&book.isbn)
        .bind(&book.quantity)
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(id, "Book inserted");
        Ok(book.clone().with_id(id))
    }

    /// Deletes a book and renumbers the remaining rows to `1..N`.
    ///
    /// Rows above the deleted ID shift down by one; their relative order
    /// is preserved. Nothing changes when the ID does not exist.
    ///
    /// ## Returns
    /// * `Ok(())` - Deleted and renumbered
    /// * `Err(DbError::NotFound)` - No row had that ID
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting book");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM books WHERE book_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(DbError::not_found("Book", id));
        }

        renumber(&mut tx).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(id, "Book deleted and IDs renumbered");
        Ok(())
    }

    /// Counts books (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Reads `MAX(book_id)` on `conn` and applies the next-ID rule.
async fn current_next_id(conn: &mut SqliteConnection) -> DbResult<i64> {
    let max: Option<i64> = sqlx::query_scalar("SELECT MAX(book_id) FROM books")
        .fetch_one(&mut *conn)
        .await?;

    Ok(next_book_id(max))
}

/// Rewrites every `book_id` to its 1-based position in ID order.
///
/// Works for any existing IDs, including zero and negative ones.
async fn renumber(conn: &mut SqliteConnection) -> DbResult<()> {
    let offset: i64 =
        sqlx::query_scalar("SELECT COALESCE(MAX(ABS(book_id)), 0) + COUNT(*) FROM books")
            .fetch_one(&mut *conn)
            .await?;

    sqlx::query(
        r#"
        UPDATE books
        SET book_id = ranked.position + ?1
        FROM (
            SELECT book_id AS old_id,
                   ROW_NUMBER() OVER (ORDER BY book_id) AS position
            FROM books
        ) AS ranked
        WHERE books.book_id = ranked.old_id
        "#,
    )
    .bind(offset)
    .execute(&mut *conn)
    .await?;

    let result = sqlx::query("UPDATE books SET book_id = book_id - ?1 WHERE book_id > ?1")
        .bind(offset)
        .execute(&mut *conn)
        .await?;

    debug!(rows = result.rows_affected(), offset, "Renumbered book IDs");
    Ok(())
}

/// Escapes LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn new_book(name: &str) -> NewBook {
        NewBook {
            name: name.to_string(),
            publisher: "Vintage".to_string(),
            author: format!("Author of {}", name),
            year: "1999".to_string(),
            genre: "Drama".to_string(),
            language: "EN".to_string(),
            isbn: format!("isbn-{}", name),
            quantity: "3".to_string(),
        }
    }

    async fn seeded(names: &[&str]) -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for name in names {
            db.books().insert(&new_book(name)).await.unwrap();
        }
        db
    }

    async fn ids_and_names(db: &Database) -> Vec<(i64, String)> {
        db.books()
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect()
    }

    #[tokio::test]
    async fn test_first_insert_gets_id_one() {
        let db = seeded(&[]).await;
        assert_eq!(db.books().next_id().await.unwrap(), 1);

        let book = db.books().insert(&new_book("Emma")).await.unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.name, "Emma");
    }

    #[tokio::test]
    async fn test_insert_uses_max_plus_one() {
        let db = seeded(&["A", "B"]).await;

        // A gap left by a foreign writer does not matter: only MAX counts
        sqlx::query("UPDATE books SET book_id = 10 WHERE book_id = 2")
            .execute(db.pool())
            .await
            .unwrap();

        let book = db.books().insert(&new_book("C")).await.unwrap();
        assert_eq!(book.id, 11);
    }

    #[tokio::test]
    async fn test_delete_highest_keeps_others() {
        let db = seeded(&["A", "B", "C"]).await;

        db.books().delete(3).await.unwrap();

        assert_eq!(
            ids_and_names(&db).await,
            vec![(1, "A".to_string()), (2, "B".to_string())]
        );
    }

    #[tokio::test]
    async fn test_delete_middle_shifts_down() {
        let db = seeded(&["A", "B", "C", "D", "E"]).await;

        db.books().delete(2).await.unwrap();

        assert_eq!(
            ids_and_names(&db).await,
            vec![
                (1, "A".to_string()),
                (2, "C".to_string()),
                (3, "D".to_string()),
                (4, "E".to_string()),
            ]
        );

        // Next insert continues the sequence
        let book = db.books().insert(&new_book("F")).await.unwrap();
        assert_eq!(book.id, 5);
    }

    #[tokio::test]
    async fn test_delete_first_and_only() {
        let db = seeded(&["A", "B"]).await;
        db.books().delete(1).await.unwrap();
        assert_eq!(ids_and_names(&db).await, vec![(1, "B".to_string())]);

        db.books().delete(1).await.unwrap();
        assert!(ids_and_names(&db).await.is_empty());
        assert_eq!(db.books().next_id().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_changes_nothing() {
        let db = seeded(&["A", "B"]).await;

        let err = db.books().delete(9).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(db.books().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_renumber_closes_existing_gaps() {
        let db = seeded(&["A", "B", "C", "D"]).await;
        sqlx::query("UPDATE books SET book_id = book_id * 10")
            .execute(db.pool())
            .await
            .unwrap();

        db.books().delete(20).await.unwrap();

        assert_eq!(
            ids_and_names(&db).await,
            vec![
                (1, "A".to_string()),
                (2, "C".to_string()),
                (3, "D".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_renumber_with_zero_and_negative_ids() {
        let db = seeded(&["A", "B", "C"]).await;
        sqlx::query("UPDATE books SET book_id = book_id - 3")
            .execute(db.pool())
            .await
            .unwrap();

        db.books().delete(0).await.unwrap();

        assert_eq!(
            ids_and_names(&db).await,
            vec![(1, "A".to_string()), (2, "B".to_string())]
        );
    }

    #[tokio::test]
    async fn test_renumber_when_count_exceeds_max_id() {
        let names: Vec<String> = (0..11).map(|i| format!("Book {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let db = seeded(&refs).await;
        // IDs -5..=5, moved in two steps so no intermediate value collides
        for sql in [
            "UPDATE books SET book_id = book_id - 100",
            "UPDATE books SET book_id = book_id + 94",
        ] {
            sqlx::query(sql).execute(db.pool()).await.unwrap();
        }

        db.books().delete(5).await.unwrap();

        let rows = ids_and_names(&db).await;
        let ids: Vec<i64> = rows.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(rows[0].1, "Book 0");
        assert_eq!(rows[9].1, "Book 9");
    }

    #[tokio::test]
    async fn test_search_by_field() {
        let db = seeded(&["Dune", "Emma", "Dune Messiah"]).await;

        let found = db.books().search(SearchField::BookName, "dune").await.unwrap();
        assert_eq!(found.len(), 2);

        let found = db.books().search(SearchField::Language, "EN").await.unwrap();
        assert_eq!(found.len(), 3);

        let found = db.books().search(SearchField::BookName, "   ").await.unwrap();
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let db = seeded(&["100% Wolf", "Wolf Hall"]).await;

        let found = db.books().search(SearchField::BookName, "%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "100% Wolf");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = seeded(&["A"]).await;
        assert_eq!(db.books().get_by_id(1).await.unwrap().unwrap().name, "A");
        assert!(db.books().get_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reads_loosely_typed_rows() {
        let db = seeded(&[]).await;
        sqlx::query(
            "INSERT INTO books VALUES (1, 'Emma', 'Murray', 'Austen', 1815, 'Romance', 'EN', 'x', 2)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let book = db.books().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(book.year, "1815");
        assert_eq!(book.quantity, "2");
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
