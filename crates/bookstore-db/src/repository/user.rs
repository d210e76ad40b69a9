//! # User Repository
//!
//! Login lookups against the `usuarios` table.
//!
//! Passwords are stored and compared as plaintext: the table is shared with
//! existing installations and its format is kept as-is. Comparison uses
//! SQLite's default BINARY collation, so both fields are case-sensitive.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use bookstore_core::Credentials;

/// Repository for login accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Returns true when a row matches both username and password exactly.
    pub async fn verify(&self, credentials: &Credentials) -> DbResult<bool> {
        debug!(username = %credentials.username, "Verifying credentials");

        let matches: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM usuarios WHERE nombre_usuario = ?1 AND password = ?2",
        )
        .bind(&credentials.username)
        .bind(&credentials.password)
        .fetch_one(&self.pool)
        .await?;

        if matches == 0 {
            warn!(username = %credentials.username, "Credentials rejected");
        }

        Ok(matches > 0)
    }

    /// Adds a login account.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - Username already taken
    pub async fn insert(&self, credentials: &Credentials) -> DbResult<()> {
        sqlx::query("INSERT INTO usuarios (nombre_usuario, password) VALUES (?1, ?2)")
            .bind(&credentials.username)
            .bind(&credentials.password)
            .execute(&self.pool)
            .await
            .map_err(|e| match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => {
                    DbError::duplicate(field, credentials.username.clone())
                }
                other => other,
            })?;

        info!(username = %credentials.username, "User created");
        Ok(())
    }

    /// Counts login accounts.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
