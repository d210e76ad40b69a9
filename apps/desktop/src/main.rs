//! # Bookstore Application Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Terminal App                           │
//! │                                                                         │
//! │  main.rs ────► bookstore_desktop_lib::run()                             │
//! │                                                                         │
//! │  lib.rs ─────► CLI, logging, one screen, hand-off to the next           │
//! │                                                                         │
//! │  ui/ ────────► splash, login, main window (ratatui)                     │
//! │                                                                         │
//! │  commands/ ──► check_database, login, list/add/delete books             │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  db/bookstore_management.db (books, usuarios)                    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    bookstore_desktop_lib::run()
}
