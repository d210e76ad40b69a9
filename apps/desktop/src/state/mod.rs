//! # State Module
//!
//! Application state handed to the screens and commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  main.rs: ConfigState::from_env() + CLI flags                           │
//! │                              │                                          │
//! │          ┌───────────────────┴──────────────────┐                       │
//! │          ▼                                      ▼                       │
//! │  ┌──────────────┐                      ┌──────────────────┐             │
//! │  │   DbState    │                      │   ConfigState    │             │
//! │  │              │                      │                  │             │
//! │  │  Database    │                      │  database_path   │             │
//! │  │  (SQLite     │                      │  log_dir         │             │
//! │  │   pool)      │                      │  store_name      │             │
//! │  └──────────────┘                      └──────────────────┘             │
//! │                                                                         │
//! │  Each screen process opens its own DbState; ConfigState is              │
//! │  forwarded to the next process as command line flags.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;

pub use config::ConfigState;
pub use db::DbState;
