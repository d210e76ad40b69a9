//! # Bookstore Desktop Library
//!
//! Core library for the bookstore terminal application.
//! This is the main entry point that parses the command line and runs one
//! screen.
//!
//! ## Module Organization
//! ```text
//! bookstore_desktop_lib/
//! ├── lib.rs          ◄─── You are here (CLI, logging, hand-off)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── startup.rs  ◄─── Database check for the splash screen
//! │   ├── auth.rs     ◄─── Login
//! │   └── book.rs     ◄─── Book list/search/add/delete
//! ├── ui/
//! │   ├── splash.rs   ◄─── Splash screen
//! │   ├── login.rs    ◄─── Login screen
//! │   ├── library.rs  ◄─── Main window
//! │   └── ...         ◄─── Form, dialogs, widgets, terminal setup
//! └── error.rs        ◄─── ApiError for commands, AppError for the process
//! ```
//!
//! ## One Screen Per Process
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Screen Hand-off                                   │
//! │                                                                         │
//! │  bookstore [splash]                                                     │
//! │     │ Outcome::Login                                                    │
//! │     ▼                                                                   │
//! │  restore terminal ──► spawn `bookstore --db .. --log-dir .. login`      │
//! │                              │ Outcome::Main { username }               │
//! │                              ▼                                          │
//! │           restore terminal ──► spawn `bookstore ... main <username>`    │
//! │                                                                         │
//! │  Each parent waits for its child and exits with the child's status.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use error::{AppError, AppResult};
use state::ConfigState;
use ui::terminal::{install_panic_hook, restore_terminal, setup_terminal};
use ui::Outcome;

/// Log file written inside the log directory.
pub const LOG_FILE: &str = "bookstore.log";

/// Bookstore management in the terminal.
#[derive(Debug, Parser)]
#[command(name = "bookstore", version, about)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Directory for bookstore.log
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub screen: Option<Screen>,
}

/// The screen this process shows.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Screen {
    /// Check the database, then open the login screen (default)
    Splash,
    /// Sign in, then open the main window
    Login,
    /// Book table
    Main {
        /// Shown in the welcome panel; "Guest" when omitted
        username: Option<String>,
    },
}

impl Screen {
    /// Subcommand name.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Login => "login",
            Screen::Main { .. } => "main",
        }
    }

    /// Arguments that start this screen in a child process.
    pub fn args(&self, config: &ConfigState) -> Vec<String> {
        let mut args = config.forwarded_args();
        args.push(self.name().to_string());
        if let Screen::Main {
            username: Some(username),
        } = self
        {
            args.push(username.clone());
        }
        args
    }
}

/// Runs the screen named on the command line.
///
/// ## Sequence
/// 1. Configuration: defaults, `BOOKSTORE_*` variables, then flags
/// 2. Logging to `<log-dir>/bookstore.log`
/// 3. Tokio runtime for the database layer
/// 4. Terminal setup, screen loop, terminal restore
/// 5. Exit, or hand off to the next screen
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config = ConfigState::from_env().with_overrides(cli.db, cli.log_dir);

    if let Err(e) = init_tracing(&config.log_dir) {
        eprintln!("{e}");
    }

    let screen = cli.screen.unwrap_or(Screen::Splash);
    info!(screen = screen.name(), db = %config.database_path.display(), "Starting bookstore");

    match run_screen(&screen, &config) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, screen = screen.name(), "Screen failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_screen(screen: &Screen, config: &ConfigState) -> AppResult<ExitCode> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(|e| AppError::Runtime(e.to_string()))?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = match screen {
        Screen::Splash => ui::splash::run(&mut terminal, &runtime, config),
        Screen::Login => ui::login::run(&mut terminal, &runtime, config),
        Screen::Main { username } => {
            ui::library::run(&mut terminal, &runtime, config, username.clone())
        }
    };

    restore_terminal(&mut terminal)?;
    drop(runtime);

    match result? {
        Outcome::Quit => Ok(ExitCode::SUCCESS),
        Outcome::Failed => Ok(ExitCode::FAILURE),
        Outcome::Login => hand_off(&Screen::Login, config),
        Outcome::Main { username } => hand_off(
            &Screen::Main {
                username: Some(username),
            },
            config,
        ),
    }
}

/// Starts `next` as a child process and exits with its status.
fn hand_off(next: &Screen, config: &ConfigState) -> AppResult<ExitCode> {
    let screen = next.name();
    let exe = std::env::current_exe().map_err(|source| AppError::HandOff { screen, source })?;

    info!(screen, "Handing off");
    let status = Command::new(exe)
        .args(next.args(config))
        .status()
        .map_err(|source| AppError::HandOff { screen, source })?;

    info!(screen, ?status, "Child screen exited");
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE))
}

/// Initializes the tracing subscriber, writing to the log file.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sqlx=debug` - Show every query
/// - Default: INFO, DEBUG for the bookstore crates
fn init_tracing(log_dir: &Path) -> AppResult<()> {
    fs::create_dir_all(log_dir).map_err(|e| AppError::Logging(e.to_string()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,bookstore_db=debug,bookstore_desktop_lib=debug,sqlx=warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
