//! Modal message and confirmation dialogs.
//!
//! ```text
//! ┌ Warning ─────────────────────────┐
//! │                                  │
//! │  Please select a book to delete. │
//! │                                  │
//! │              Enter OK            │
//! └──────────────────────────────────┘
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::widgets::{centered_fixed, key_hints};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
    /// Yes/No question.
    Confirm,
}

impl DialogKind {
    fn color(&self) -> Color {
        match self {
            DialogKind::Info => Color::Green,
            DialogKind::Warning => Color::Yellow,
            DialogKind::Error => Color::Red,
            DialogKind::Confirm => Color::Cyan,
        }
    }
}

/// How the user closed a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    /// OK on a message, Yes on a question.
    Yes,
    /// No / Cancel on a question.
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Dialog {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Dialog::new(DialogKind::Info, title, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Dialog::new(DialogKind::Warning, "Warning", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Dialog::new(DialogKind::Error, "Error", message)
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Dialog::new(DialogKind::Confirm, title, message)
    }

    /// Returns the answer once the dialog is closed, `None` while open.
    pub fn handle_key(&self, key: KeyEvent) -> Option<DialogAnswer> {
        match self.kind {
            DialogKind::Confirm => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Some(DialogAnswer::Yes),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Some(DialogAnswer::No),
                _ => None,
            },
            _ => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(DialogAnswer::Yes),
                _ => None,
            },
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = self.message.lines().count().max(1) as u16;
        let width = self
            .message
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.title.chars().count())
            .clamp(30, 70) as u16
            + 6;
        let popup = centered_fixed(width, lines + 6, area);

        frame.render_widget(Clear, popup);

        let color = self.kind.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Line::from(format!(" {} ", self.title)).style(
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(self.message.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false }),
            rows[0],
        );

        let hints = match self.kind {
            DialogKind::Confirm => key_hints(&[("Enter/y", "OK"), ("Esc/n", "Cancel")]),
            _ => key_hints(&[("Enter", "OK")]),
        };
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_answers() {
        let dialog = Dialog::confirm("Exit", "Do you wanna close the app?");

        assert_eq!(dialog.handle_key(key(KeyCode::Char('y'))), Some(DialogAnswer::Yes));
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(DialogAnswer::Yes));
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(DialogAnswer::No));
        assert_eq!(dialog.handle_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_message_closes_on_enter_or_esc() {
        let dialog = Dialog::warning("Please select a book to delete.");

        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(DialogAnswer::Yes));
        assert_eq!(dialog.handle_key(key(KeyCode::Char('n'))), None);
    }
}
