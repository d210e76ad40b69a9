//! # Seed Data Generator
//!
//! Creates the bookstore database and fills it for development.
//!
//! ## Usage
//! ```bash
//! # Create ./db/bookstore_management.db with a login and sample books
//! cargo run -p bookstore-db --bin seed -- --user admin --password admin --sample
//!
//! # Import books from a JSON array
//! cargo run -p bookstore-db --bin seed -- --from books.json
//!
//! # Specify database path
//! cargo run -p bookstore-db --bin seed -- --db ./data/books.db --sample
//! ```
//!
//! ## Import Format
//! A JSON array of objects with the Add Book form fields:
//! ```json
//! [{ "name": "Emma", "publisher": "John Murray", "author": "Jane Austen",
//!    "year": "1815", "genre": "Romance", "language": "EN",
//!    "isbn": "978-0141439587", "quantity": "4" }]
//! ```
//! Every entry passes the same validation as the form; invalid entries are
//! reported and skipped.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookstore_core::validation::validate_new_book;
use bookstore_core::{Credentials, NewBook};
use bookstore_db::{Database, DbConfig, DbError};

/// Built-in sample catalogue:
/// (name, publisher, author, year, genre, language, isbn, quantity)
const SAMPLE_BOOKS: &[(&str, &str, &str, &str, &str, &str, &str, &str)] = &[
    ("Pride and Prejudice", "T. Egerton", "Jane Austen", "1813", "Romance", "EN", "978-0141439518", "5"),
    ("Don Quijote de la Mancha", "Francisco de Robles", "Miguel de Cervantes", "1605", "Fiction", "ES", "978-8424116040", "3"),
    ("Dune", "Chilton Books", "Frank Herbert", "1965", "Science fiction", "EN", "978-0441172719", "7"),
    ("The Shining", "Doubleday", "Stephen King", "1977", "Horror", "EN", "978-0307743657", "2"),
    ("Anna Karenina", "The Russian Messenger", "Leo Tolstoy", "1878", "Drama", "RU", "978-0143035008", "4"),
    ("The Hobbit", "George Allen & Unwin", "J. R. R. Tolkien", "1937", "Fantasy", "EN", "978-0547928227", "6"),
    ("Il nome della rosa", "Bompiani", "Umberto Eco", "1980", "Historical fiction", "IT", "978-8845278655", "2"),
    ("Le Petit Prince", "Reynal & Hitchcock", "Antoine de Saint-Exupery", "1943", "Fiction", "FR", "978-2070612758", "8"),
    ("Norwegian Wood", "Kodansha", "Haruki Murakami", "1987", "Drama", "JA", "978-0375704024", "3"),
    ("Dom Casmurro", "Garnier", "Machado de Assis", "1899", "Other", "PT", "978-8572326972", "1"),
];

/// Bookstore seed data generator.
#[derive(Debug, Parser)]
#[command(name = "seed", version, about)]
struct Args {
    /// Database file path (created when absent)
    #[arg(short, long, default_value = "./db/bookstore_management.db")]
    db: PathBuf,

    /// Login name to create
    #[arg(long, requires = "password")]
    user: Option<String>,

    /// Password for --user
    #[arg(long, requires = "user")]
    password: Option<String>,

    /// JSON file with an array of books to import
    #[arg(long, value_name = "FILE.json")]
    from: Option<PathBuf>,

    /// Import the built-in sample catalogue
    #[arg(long)]
    sample: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    println!("Bookstore Seed Data Generator");
    println!("=============================");
    println!("Database: {}", args.db.display());
    println!();

    let db = Database::new(DbConfig::new(&args.db).create_if_missing(true)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if let (Some(user), Some(password)) = (&args.user, &args.password) {
        match db.users().insert(&Credentials::new(user, password)).await {
            Ok(()) => println!("✓ Created login '{}'", user),
            Err(DbError::UniqueViolation { .. }) => {
                println!("⚠ Login '{}' already exists, left unchanged", user)
            }
            Err(e) => return Err(e.into()),
        }
    }

    let mut books: Vec<NewBook> = Vec::new();

    if let Some(path) = &args.from {
        let content = std::fs::read_to_string(path)?;
        let imported: Vec<NewBook> = serde_json::from_str(&content)?;
        println!("Read {} books from {}", imported.len(), path.display());
        books.extend(imported);
    }

    if args.sample {
        books.extend(sample_books());
    }

    if !books.is_empty() {
        println!();
        println!("Importing books...");
        let (inserted, skipped) = import_books(&db, &books).await?;
        println!();
        println!("✓ Imported {} books ({} skipped)", inserted, skipped);
    }

    println!();
    println!(
        "Database now holds {} books and {} logins",
        db.books().count().await?,
        db.users().count().await?
    );
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Validates and inserts each book, returning `(inserted, skipped)`.
async fn import_books(db: &Database, books: &[NewBook]) -> Result<(usize, usize), DbError> {
    let mut inserted = 0;
    let mut skipped = 0;

    for (index, book) in books.iter().enumerate() {
        let valid = match validate_new_book(book) {
            Ok(valid) => valid,
            Err(e) => {
                eprintln!("  Skipping entry {} ('{}'): {}", index + 1, book.name, e);
                skipped += 1;
                continue;
            }
        };

        let stored = db.books().insert(&valid).await?;
        println!("  #{} {}", stored.id, stored.name);
        inserted += 1;
    }

    Ok((inserted, skipped))
}

fn sample_books() -> Vec<NewBook> {
    SAMPLE_BOOKS
        .iter()
        .map(
            |&(name, publisher, author, year, genre, language, isbn, quantity)| NewBook {
                name: name.to_string(),
                publisher: publisher.to_string(),
                author: author.to_string(),
                year: year.to_string(),
                genre: genre.to_string(),
                language: language.to_string(),
                isbn: isbn.to_string(),
                quantity: quantity.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_books_are_valid() {
        for book in sample_books() {
            assert!(validate_new_book(&book).is_ok(), "{} is invalid", book.name);
        }
    }

    #[test]
    fn test_args_require_user_and_password_together() {
        assert!(Args::try_parse_from(["seed", "--user", "admin"]).is_err());
        let args = Args::try_parse_from(["seed", "--user", "admin", "--password", "pw", "--sample"])
            .unwrap();
        assert_eq!(args.user.as_deref(), Some("admin"));
        assert!(args.sample);
    }

    #[tokio::test]
    async fn test_import_skips_invalid_entries() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut books = sample_books();
        books.truncate(2);
        books.insert(1, NewBook { name: "Incomplete".to_string(), ..NewBook::default() });

        let (inserted, skipped) = import_books(&db, &books).await.unwrap();
        assert_eq!((inserted, skipped), (2, 1));
        assert_eq!(db.books().count().await.unwrap(), 2);
    }
}
