//! # Startup Commands
//!
//! The splash screen's checks and the database opening shared by every
//! screen.
//!
//! ## Splash Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Splash Screen Sequence                               │
//! │                                                                         │
//! │  file exists? ── no ──► "Database not found."                           │
//! │       │                                                                 │
//! │      yes                                                                │
//! │       ▼                                                                 │
//! │  connect ─────── err ──► "Database connection failed."                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data update check (pending migrations)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StartupReport ──► hand off to login                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ApiError, ErrorCode, MSG_CONNECTION_FAILED, MSG_DATABASE_MISSING};
use crate::state::{ConfigState, DbState};
use bookstore_db::{database_exists, migrations, Database, DbConfig};

/// What the splash screen learned about the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupReport {
    pub database_path: String,
    /// Migrations applied by this check.
    pub updates_applied: usize,
    pub book_count: i64,
}

/// Runs the splash screen checks and closes the connection again.
///
/// ## Returns
/// * `Ok(StartupReport)` - Database reachable and up to date
/// * `Err(ApiError)` with `DATABASE_MISSING` - "Database not found."
/// * `Err(ApiError)` with `DATABASE_ERROR` - "Database connection failed."
pub async fn check_database(config: &ConfigState) -> Result<StartupReport, ApiError> {
    let path = &config.database_path;
    debug!(path = %path.display(), "check_database command");

    if !database_exists(path) {
        return Err(ApiError::new(ErrorCode::DatabaseMissing, MSG_DATABASE_MISSING));
    }

    let db = Database::new(DbConfig::new(path).run_migrations(false)).await?;

    // A file that opens but is not SQLite fails on the first statement
    if !db.health_check().await {
        db.close().await;
        return Err(ApiError::new(ErrorCode::DatabaseError, MSG_CONNECTION_FAILED));
    }

    let (_, applied_before) = migrations::migration_status(db.pool()).await?;
    db.run_migrations().await?;
    let (_, applied_after) = migrations::migration_status(db.pool()).await?;
    let book_count = db.books().count().await?;

    db.close().await;

    let report = StartupReport {
        database_path: path.display().to_string(),
        updates_applied: applied_after.saturating_sub(applied_before),
        book_count,
    };

    info!(
        updates_applied = report.updates_applied,
        book_count = report.book_count,
        "Database check passed"
    );
    Ok(report)
}

/// Opens the configured database for the login and main screens.
///
/// The file is never created here; run the splash screen or `seed` first.
pub async fn open_database(config: &ConfigState) -> Result<DbState, ApiError> {
    debug!(path = %config.database_path.display(), "open_database command");

    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    Ok(DbState::new(db))
}
