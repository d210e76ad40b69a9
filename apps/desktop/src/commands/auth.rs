//! # Auth Commands
//!
//! Login against the `usuarios` table.
//!
//! ## User Workflow
//! ```text
//! Username + Password ──► validate_credentials (both non-empty)
//!                               │
//!                               ▼
//!                         users().verify ── false ──► "Wrong Username or Password"
//!                               │
//!                             true
//!                               ▼
//!                         SessionUser ──► main window gets the username
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use bookstore_core::validation::validate_credentials;
use bookstore_core::{CoreError, Credentials};

/// The user a main window is opened for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub username: String,
}

/// Checks a username/password pair.
///
/// ## Returns
/// * `Ok(SessionUser)` - An exact-match row exists
/// * `Err(ApiError)` with `VALIDATION_ERROR` - A field was left empty
/// * `Err(ApiError)` with `UNAUTHORIZED` - No match
pub async fn login(
    db: &DbState,
    username: String,
    password: String,
) -> Result<SessionUser, ApiError> {
    debug!(username = %username, "login command");

    let credentials = Credentials::new(username, password);
    validate_credentials(&credentials)?;

    if !db.inner().users().verify(&credentials).await? {
        return Err(CoreError::InvalidCredentials.into());
    }

    info!(username = %credentials.username, "Login succeeded");
    Ok(SessionUser {
        username: credentials.username,
    })
}
