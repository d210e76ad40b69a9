//! # Domain Types
//!
//! Core domain types used throughout the bookstore.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │      Book       │   │     NewBook     │   │   Credentials   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (1..N)      │   │  (form input,   │   │  username       │        │
//! │  │  name, author   │   │   no id yet)    │   │  password       │        │
//! │  │  genre, lang    │   └─────────────────┘   └─────────────────┘        │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │  Genre/Language │   │   SearchField   │   │   BookColumn    │        │
//! │  │  allow-lists    │   │  search filter  │   │  table + sort   │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contiguous IDs
//! `Book::id` is not a stable identity. IDs form the sequence `1..N` and are
//! renumbered after every delete, so a row's ID changes whenever a book with
//! a smaller ID is removed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

// =============================================================================
// Book
// =============================================================================

/// A row of the `books` table.
///
/// Year and quantity are kept as text: they are stored exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Position in the contiguous `1..N` sequence.
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

/// Add Book form input. The ID is assigned at insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub name: String,
    pub publisher: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub language: String,
    pub isbn: String,
    pub quantity: String,
}

impl NewBook {
    /// Attaches an ID, producing the stored row.
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            name: self.name,
            publisher: self.publisher,
            author: self.author,
            year: self.year,
            genre: self.genre,
            language: self.language,
            isbn: self.isbn,
            quantity: self.quantity,
        }
    }
}

// =============================================================================
// Allow-lists
// =============================================================================

/// Genres accepted by the Add Book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    Fantasy,
    #[serde(rename = "Science fiction")]
    ScienceFiction,
    Horror,
    Romance,
    #[serde(rename = "Historical fiction")]
    HistoricalFiction,
    Drama,
    Other,
}

impl Genre {
    /// Every genre, in the order the form cycles through them.
    pub const ALL: [Genre; 8] = [
        Genre::Fiction,
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::Horror,
        Genre::Romance,
        Genre::HistoricalFiction,
        Genre::Drama,
        Genre::Other,
    ];

    /// The stored label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::ScienceFiction => "Science fiction",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::HistoricalFiction => "Historical fiction",
            Genre::Drama => "Drama",
            Genre::Other => "Other",
        }
    }

    /// Exact, case-sensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == label)
    }

    /// Labels of every genre.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Genre::as_str).collect()
    }
}

/// Language codes accepted by the Add Book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "ES")]
    Es,
    #[serde(rename = "RU")]
    Ru,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HI")]
    Hi,
    #[serde(rename = "AR")]
    Ar,
    #[serde(rename = "PT")]
    Pt,
    #[serde(rename = "JA")]
    Ja,
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "FR")]
    Fr,
    Other,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::En,
        Language::Es,
        Language::Ru,
        Language::It,
        Language::Hi,
        Language::Ar,
        Language::Pt,
        Language::Ja,
        Language::Cm,
        Language::Fr,
        Language::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
            Language::Ru => "RU",
            Language::It => "IT",
            Language::Hi => "HI",
            Language::Ar => "AR",
            Language::Pt => "PT",
            Language::Ja => "JA",
            Language::Cm => "CM",
            Language::Fr => "FR",
            Language::Other => "Other",
        }
    }

    /// Exact, case-sensitive lookup by code.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Language::as_str).collect()
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// A username/password pair from the login screen.
///
/// Compared by exact string equality against the `usuarios` table.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// =============================================================================
// Search Filter
// =============================================================================

/// Column the main window search box filters on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    #[default]
    BookName,
    Language,
    Isbn,
    AuthorName,
    Publisher,
    Year,
}

impl SearchField {
    /// Filter choices in display order.
    pub const ALL: [SearchField; 6] = [
        SearchField::BookName,
        SearchField::Language,
        SearchField::Isbn,
        SearchField::AuthorName,
        SearchField::Publisher,
        SearchField::Year,
    ];

    /// Label shown in the filter selector.
    pub const fn label(&self) -> &'static str {
        match self {
            SearchField::BookName => "Book Name",
            SearchField::Language => "Language",
            SearchField::Isbn => "ISBN",
            SearchField::AuthorName => "Author Name",
            SearchField::Publisher => "Publisher",
            SearchField::Year => "Year",
        }
    }

    /// The `books` column searched.
    ///
    /// Only these fixed names are ever interpolated into SQL.
    pub const fn column_name(&self) -> &'static str {
        match self {
            SearchField::BookName => "book_name",
            SearchField::Language => "book_language",
            SearchField::Isbn => "book_ISBN",
            SearchField::AuthorName => "author_name",
            SearchField::Publisher => "book_publisher",
            SearchField::Year => "book_year",
        }
    }

    /// The next choice, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

// =============================================================================
// Table Columns & Sorting
// =============================================================================

/// The nine columns of the book table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookColumn {
    #[default]
    Id,
    Name,
    Publisher,
    Author,
    Year,
    Genre,
    Language,
    Isbn,
    Quantity,
}

impl BookColumn {
    pub const ALL: [BookColumn; 9] = [
        BookColumn::Id,
        BookColumn::Name,
        BookColumn::Publisher,
        BookColumn::Author,
        BookColumn::Year,
        BookColumn::Genre,
        BookColumn::Language,
        BookColumn::Isbn,
        BookColumn::Quantity,
    ];

    /// Column heading.
    pub const fn heading(&self) -> &'static str {
        match self {
            BookColumn::Id => "Book ID",
            BookColumn::Name => "Book Name",
            BookColumn::Publisher => "Publisher",
            BookColumn::Author => "Author Name",
            BookColumn::Year => "Year",
            BookColumn::Genre => "Genre",
            BookColumn::Language => "Language",
            BookColumn::Isbn => "ISBN",
            BookColumn::Quantity => "Quantity",
        }
    }

    /// The cell text for `book` in this column.
    pub fn cell(&self, book: &Book) -> String {
        match self {
            BookColumn::Id => book.id.to_string(),
            BookColumn::Name => book.name.clone(),
            BookColumn::Publisher => book.publisher.clone(),
            BookColumn::Author => book.author.clone(),
            BookColumn::Year => book.year.clone(),
            BookColumn::Genre => book.genre.clone(),
            BookColumn::Language => book.language.clone(),
            BookColumn::Isbn => book.isbn.clone(),
            BookColumn::Quantity => book.quantity.clone(),
        }
    }

    /// Orders two books by this column.
    ///
    /// ID sorts numerically. Year and quantity sort numerically when both
    /// values parse as integers and fall back to text otherwise. Text
    /// columns compare case-insensitively.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            BookColumn::Id => a.id.cmp(&b.id),
            BookColumn::Year => compare_numeric_text(&a.year, &b.year),
            BookColumn::Quantity => compare_numeric_text(&a.quantity, &b.quantity),
            _ => {
                let (x, y) = (self.cell(a), self.cell(b));
                x.to_lowercase().cmp(&y.to_lowercase())
            }
        }
    }
}

/// Sort direction for the book table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the sorted heading.
    pub const fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Sorts books in place by `column`. Stable: equal keys keep their order.
pub fn sort_books(books: &mut [Book], column: BookColumn, direction: SortDirection) {
    books.sort_by(|a, b| {
        let ord = column.compare(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare_numeric_text(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, name: &str, year: &str, quantity: &str) -> Book {
        Book {
            id,
            name: name.to_string(),
            publisher: "Penguin".to_string(),
            author: "Anon".to_string(),
            year: year.to_string(),
            genre: "Drama".to_string(),
            language: "EN".to_string(),
            isbn: format!("978-{}", id),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_genre_lookup_is_exact() {
        assert_eq!(Genre::from_label("Science fiction"), Some(Genre::ScienceFiction));
        assert_eq!(Genre::from_label("science fiction"), None);
        assert_eq!(Genre::from_label("Poetry"), None);
        assert_eq!(Genre::labels().len(), 8);
    }

    #[test]
    fn test_language_lookup_is_exact() {
        assert_eq!(Language::from_label("EN"), Some(Language::En));
        assert_eq!(Language::from_label("en"), None);
        assert_eq!(Language::from_label("Fiction"), None);
        assert!(Language::labels().contains(&"Other"));
    }

    #[test]
    fn test_genre_serializes_as_label() {
        let json = serde_json::to_string(&Genre::HistoricalFiction).unwrap();
        assert_eq!(json, "\"Historical fiction\"");
    }

    #[test]
    fn test_search_field_cycles() {
        let mut field = SearchField::default();
        for _ in 0..SearchField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, SearchField::BookName);
        assert_eq!(SearchField::Isbn.column_name(), "book_ISBN");
    }

    #[test]
    fn test_sort_by_year_is_numeric() {
        let mut books = vec![
            book(1, "A", "2001", "3"),
            book(2, "B", "999", "1"),
            book(3, "C", "1984", "2"),
        ];
        sort_books(&mut books, BookColumn::Year, SortDirection::Ascending);
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_text_case_insensitive_descending() {
        let mut books = vec![
            book(1, "apple", "1", "1"),
            book(2, "Banana", "1", "1"),
            book(3, "cherry", "1", "1"),
        ];
        sort_books(&mut books, BookColumn::Name, SortDirection::Descending);
        let names: Vec<&str> = books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["cherry", "Banana", "apple"]);
    }

    #[test]
    fn test_sort_quantity_falls_back_to_text() {
        let mut books = vec![book(1, "A", "1", "ten"), book(2, "B", "1", "2")];
        sort_books(&mut books, BookColumn::Quantity, SortDirection::Ascending);
        assert_eq!(books[0].id, 2);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_sort_direction_flip() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
    }
}
