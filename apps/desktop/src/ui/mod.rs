//! # Terminal Screens
//!
//! Each screen runs in its own process. A screen returns an [`Outcome`] and
//! `lib.rs` decides whether to exit or start the next screen.
//!
//! ```text
//! ui/
//! ├── mod.rs       ◄─── You are here (Outcome)
//! ├── terminal.rs  ◄─── Raw mode, alternate screen, key polling
//! ├── widgets.rs   ◄─── Inputs, buttons, layout helpers
//! ├── dialog.rs    ◄─── Modal messages and Yes/No questions
//! ├── splash.rs    ◄─── Database check
//! ├── login.rs     ◄─── Username / password
//! ├── library.rs   ◄─── Main window: book table, search, delete
//! └── add_book.rs  ◄─── Add Book form (opened from the main window)
//! ```
//!
//! ## Screen Flow
//! ```text
//! bookstore splash ──Login──► bookstore login ──Main──► bookstore main <user>
//!       │                          │                          │
//!     Failed (exit 1)            Quit (exit 0)              Quit (exit 0)
//! ```
//!
//! Screens keep their state and key handling free of I/O so they can be
//! driven from tests; only `run` touches the terminal and the database.

pub mod add_book;
pub mod dialog;
pub mod library;
pub mod login;
pub mod splash;
pub mod terminal;
pub mod widgets;

/// Where a screen leaves the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user closed the application.
    Quit,
    /// Startup failed; the process exits with a non-zero code.
    Failed,
    /// Start the login screen.
    Login,
    /// Start the main window for this user.
    Main { username: String },
}
