//! # Splash Screen
//!
//! First screen of the application: checks the database, then hands off
//! to the login screen.
//!
//! ```text
//! Checking ──► check_database ──► Ready ──► Outcome::Login
//!                     │
//!                     └─────────► Failed("Database not found.")
//!                                   shown ~2s ──► Outcome::Failed
//! ```

use std::time::Duration;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use tokio::runtime::Runtime;
use tracing::{error, info};

use super::terminal::{hold, Tui};
use super::widgets::{centered_fixed, ACCENT};
use super::Outcome;
use crate::commands::startup::{check_database, StartupReport};
use crate::error::AppResult;
use crate::state::ConfigState;

/// How long a failure stays on screen before the process exits.
pub const FAILURE_DISPLAY: Duration = Duration::from_secs(2);

/// Pause on the ready message before the login screen starts.
pub const READY_DISPLAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashStatus {
    Checking,
    Ready(StartupReport),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SplashScreen {
    store_name: String,
    status: SplashStatus,
}

impl SplashScreen {
    pub fn new(store_name: impl Into<String>) -> Self {
        SplashScreen {
            store_name: store_name.into(),
            status: SplashStatus::Checking,
        }
    }

    pub fn status(&self) -> &SplashStatus {
        &self.status
    }

    /// Records the result of the database check.
    pub fn finish(&mut self, result: Result<StartupReport, String>) {
        self.status = match result {
            Ok(report) => SplashStatus::Ready(report),
            Err(message) => SplashStatus::Failed(message),
        };
    }

    /// Where the application goes once the status has been shown.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            SplashStatus::Checking => None,
            SplashStatus::Ready(_) => Some(Outcome::Login),
            SplashStatus::Failed(_) => Some(Outcome::Failed),
        }
    }

    fn status_line(&self) -> Line<'static> {
        match &self.status {
            SplashStatus::Checking => Line::from("Checking database..."),
            SplashStatus::Ready(report) if report.updates_applied > 0 => Line::from(format!(
                "Database updated ({} change(s)). {} books ready.",
                report.updates_applied, report.book_count
            )),
            SplashStatus::Ready(report) => {
                Line::from(format!("{} books ready. Starting...", report.book_count))
            }
            SplashStatus::Failed(message) => Line::styled(
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let card = centered_fixed(50, 12, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(ACCENT));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(
                self.store_name.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new("Bookstore management").alignment(Alignment::Center),
            rows[2],
        );
        frame.render_widget(
            Paragraph::new(self.status_line()).alignment(Alignment::Center),
            rows[4],
        );
    }
}

/// Runs the splash screen until it knows where to go next.
pub fn run(terminal: &mut Tui, runtime: &Runtime, config: &ConfigState) -> AppResult<Outcome> {
    let mut screen = SplashScreen::new(config.store_name.clone());
    terminal.draw(|frame| screen.draw(frame, frame.area()))?;

    let result = runtime.block_on(check_database(config));
    match &result {
        Ok(report) => info!(?report, "Startup checks passed"),
        Err(e) => error!(code = ?e.code, message = %e.message, "Startup checks failed"),
    }
    screen.finish(result.map_err(|e| e.message));
    terminal.draw(|frame| screen.draw(frame, frame.area()))?;

    let outcome = screen.outcome().unwrap_or(Outcome::Failed);
    let pause = match outcome {
        Outcome::Failed => FAILURE_DISPLAY,
        _ => READY_DISPLAY,
    };
    hold(pause)?;

    Ok(outcome)
}
