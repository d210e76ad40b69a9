//! # Commands Module
//!
//! Every operation a screen can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── startup.rs  ◄─── Splash screen database check
//! ├── auth.rs     ◄─── Login
//! └── book.rs     ◄─── Book table: list, search, add, delete
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Screen (synchronous event loop)                                        │
//! │  ───────────────────────────────                                        │
//! │  let result = runtime.block_on(                                         │
//! │      commands::book::delete_book(&db, 3)                                │
//! │  );                                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command (async)                                                        │
//! │  ───────────────                                                        │
//! │  pub async fn delete_book(                                              │
//! │      db: &DbState,            ◄── Only the state it needs               │
//! │      id: i64,                 ◄── From the selected row                 │
//! │  ) -> Result<(), ApiError>                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Screen refreshes the table or shows the error in a dialog              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod book;
pub mod startup;
