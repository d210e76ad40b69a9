//! # Login Screen
//!
//! Username and password form checked against the `usuarios` table.
//!
//! ## Keys
//! - Tab / Down / Up: move between fields and buttons
//! - Enter in a field: sign in when both fields are filled
//! - Enter on "Sign in": sign in, or warn about missing input
//! - Esc or "Exit": ask before closing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use tokio::runtime::Runtime;
use tracing::{error, info, warn};

use super::dialog::{Dialog, DialogAnswer};
use super::terminal::{next_key, Tui, TICK_RATE};
use super::widgets::{button, centered_fixed, key_hints, text_input, ACCENT};
use super::Outcome;
use crate::commands::{auth, startup};
use crate::error::{AppResult, ErrorCode};
use crate::state::{ConfigState, DbState};
use bookstore_core::ValidationError;

/// Text under the password field after a rejected attempt.
pub const WRONG_CREDENTIALS: &str = "Wrong Username or Password";

/// Question asked before the app closes.
pub const CLOSE_QUESTION: &str = "Do you wanna close the app?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Username,
    Password,
    SignIn,
    Exit,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 4] = [
        LoginFocus::Username,
        LoginFocus::Password,
        LoginFocus::SignIn,
        LoginFocus::Exit,
    ];

    fn step(self, forward: bool) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let next = if forward { idx + 1 } else { idx + len - 1 };
        Self::ORDER[next % len]
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit { username: String, password: String },
    Quit,
}

/// Why the open dialog is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Notice,
    ConfirmClose,
}

#[derive(Debug, Clone)]
pub struct LoginScreen {
    store_name: String,
    pub username: String,
    pub password: String,
    pub focus: LoginFocus,
    /// Shows the inline "Wrong Username or Password" line.
    pub rejected: bool,
    dialog: Option<(Dialog, Pending)>,
}

impl LoginScreen {
    pub fn new(store_name: impl Into<String>) -> Self {
        LoginScreen {
            store_name: store_name.into(),
            username: String::new(),
            password: String::new(),
            focus: LoginFocus::Username,
            rejected: false,
            dialog: None,
        }
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref().map(|(d, _)| d)
    }

    /// Shows an error from a command in a dialog.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.dialog = Some((Dialog::error(message), Pending::Notice));
    }

    /// Marks the last attempt as rejected and clears the password.
    pub fn reject(&mut self) {
        self.rejected = true;
        self.password.clear();
        self.focus = LoginFocus::Password;
    }

    fn both_filled(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    fn submit(&self) -> LoginAction {
        LoginAction::Submit {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    fn ask_close(&mut self) {
        self.dialog = Some((Dialog::confirm("Exit", CLOSE_QUESTION), Pending::ConfirmClose));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if let Some((dialog, pending)) = &self.dialog {
            let pending = *pending;
            return match dialog.handle_key(key) {
                Some(DialogAnswer::Yes) if pending == Pending::ConfirmClose => LoginAction::Quit,
                Some(_) => {
                    self.dialog = None;
                    LoginAction::None
                }
                None => LoginAction::None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.ask_close();
            return LoginAction::None;
        }

        match key.code {
            KeyCode::Esc => self.ask_close(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.step(true),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.step(false),
            KeyCode::Enter => match self.focus {
                LoginFocus::Username | LoginFocus::Password if self.both_filled() => {
                    return self.submit()
                }
                // Enter in the username field moves on to the password
                LoginFocus::Username => self.focus = LoginFocus::Password,
                LoginFocus::Password => {}
                LoginFocus::SignIn if self.both_filled() => return self.submit(),
                LoginFocus::SignIn => {
                    self.dialog = Some((
                        Dialog::warning(ValidationError::MissingCredentials.to_string()),
                        Pending::Notice,
                    ));
                }
                LoginFocus::Exit => self.ask_close(),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.field_mut() {
                    field.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.field_mut() {
                    field.push(c);
                }
            }
            _ => {}
        }

        LoginAction::None
    }

    fn field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginFocus::Username => Some(&mut self.username),
            LoginFocus::Password => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let card = centered_fixed(56, 20, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(Line::from(format!(" {} ", self.store_name)).alignment(Alignment::Center));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(4)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Sign in",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[0],
        );
        frame.render_widget(
            text_input(
                "Enter your username:",
                &self.username,
                self.focus == LoginFocus::Username,
                false,
            ),
            rows[1],
        );
        frame.render_widget(
            text_input(
                "Enter your password:",
                &self.password,
                self.focus == LoginFocus::Password,
                true,
            ),
            rows[2],
        );

        if self.rejected {
            frame.render_widget(
                Paragraph::new(Line::styled(WRONG_CREDENTIALS, Style::default().fg(Color::Red)))
                    .alignment(Alignment::Center),
                rows[3],
            );
        }

        frame.render_widget(button("Sign in", self.focus == LoginFocus::SignIn), rows[4]);
        frame.render_widget(button("Exit", self.focus == LoginFocus::Exit), rows[6]);
        frame.render_widget(
            Paragraph::new(key_hints(&[("Tab", "Next"), ("Enter", "Sign in"), ("Esc", "Exit")]))
                .alignment(Alignment::Center),
            rows[8],
        );

        if let Some(dialog) = self.dialog() {
            dialog.render(frame, area);
        }
    }
}

/// Runs the login screen until the user signs in or leaves.
pub fn run(terminal: &mut Tui, runtime: &Runtime, config: &ConfigState) -> AppResult<Outcome> {
    let mut screen = LoginScreen::new(config.store_name.clone());

    let db: Option<DbState> = match runtime.block_on(startup::open_database(config)) {
        Ok(db) => Some(db),
        Err(e) => {
            error!(message = %e.message, "Login screen could not open the database");
            screen.show_error(e.message);
            None
        }
    };

    let outcome = loop {
        terminal.draw(|frame| screen.draw(frame, frame.area()))?;

        let Some(key) = next_key(TICK_RATE)? else {
            continue;
        };

        match screen.handle_key(key) {
            LoginAction::None => {}
            LoginAction::Quit => break Outcome::Quit,
            LoginAction::Submit { username, password } => {
                let Some(db) = &db else {
                    screen.show_error(crate::error::MSG_CONNECTION_FAILED);
                    continue;
                };

                match runtime.block_on(auth::login(db, username, password)) {
                    Ok(user) => {
                        info!(username = %user.username, "Handing off to the main window");
                        break Outcome::Main {
                            username: user.username,
                        };
                    }
                    Err(e) if e.code == ErrorCode::Unauthorized => {
                        warn!("Login rejected");
                        screen.reject();
                    }
                    Err(e) => {
                        error!(message = %e.message, "Login failed");
                        screen.show_error(e.message);
                    }
                }
            }
        }
    };

    if let Some(db) = db {
        runtime.block_on(db.inner().close());
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_submits_only_when_both_filled() {
        let mut screen = LoginScreen::new("Books");
        type_text(&mut screen, "admin");

        // Username only: Enter moves to the password field
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);
        assert_eq!(screen.focus, LoginFocus::Password);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        type_text(&mut screen, "pw");
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            LoginAction::Submit {
                username: "admin".to_string(),
                password: "pw".to_string()
            }
        );
    }

    #[test]
    fn test_sign_in_with_missing_input_warns() {
        let mut screen = LoginScreen::new("Books");
        screen.focus = LoginFocus::SignIn;

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);
        let dialog = screen.dialog().unwrap();
        assert_eq!(dialog.message, "Please enter both username and password.");

        // Closing the warning returns to the form
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.dialog().is_none());
    }

    #[test]
    fn test_escape_asks_before_quitting() {
        let mut screen = LoginScreen::new("Books");

        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.dialog().unwrap().message, CLOSE_QUESTION);

        // Cancel keeps the screen open
        assert_eq!(screen.handle_key(key(KeyCode::Char('n'))), LoginAction::None);
        assert!(screen.dialog().is_none());

        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.handle_key(key(KeyCode::Char('y'))), LoginAction::Quit);
    }

    #[test]
    fn test_reject_shows_message_and_clears_password() {
        let mut screen = LoginScreen::new("Books");
        type_text(&mut screen, "admin");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "bad");

        screen.reject();
        assert!(screen.rejected);
        assert!(screen.password.is_empty());
        assert_eq!(screen.username, "admin");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut screen = LoginScreen::new("Books");
        type_text(&mut screen, "adminx");
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.username, "admin");
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(LoginFocus::Exit.step(true), LoginFocus::Username);
        assert_eq!(LoginFocus::Username.step(false), LoginFocus::Exit);
    }
}
