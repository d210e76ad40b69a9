//! # Main Window
//!
//! Welcome panel, search and actions on the left; the book table on the
//! right.
//!
//! ## Layout
//! ```text
//! ┌ Bookstore ───────────┐┌ Books (12) ───────────────────────────────────┐
//! │ Welcome, maria       ││ Book ID ▲  Book Name   Publisher  Author ...  │
//! │                      ││ » 1        Emma        Murray     Austen      │
//! │ Filter: ◄ Book Name ►││   2        Dune        Chilton    Herbert     │
//! │ ┌ Search ──────────┐ ││   3        ...                                │
//! │ │ emm              │ ││                                               │
//! │ └──────────────────┘ ││                                               │
//! │ a Add Book           ││                                               │
//! │ d Delete Book        ││                                               │
//! │ i Book Information   ││                                               │
//! └──────────────────────┘└───────────────────────────────────────────────┘
//! ```
//!
//! ## Keys (table focused)
//! - Up/Down, PageUp/PageDown, Home/End: move the selection
//! - `1`-`9`: sort by that column, again to flip direction
//! - `/`: edit the search text; `f`: next search filter; `c`: clear search
//! - `a` add, `d`/Delete delete, `i`/Enter information, `r` refresh
//! - `q`/Esc: quit (asks first)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    TableState,
};
use ratatui::Frame;
use tokio::runtime::Runtime;
use tracing::{error, info};

use super::add_book::{AddBookForm, FormAction, ADDED_MESSAGE};
use super::dialog::{Dialog, DialogAnswer};
use super::login::CLOSE_QUESTION;
use super::terminal::{next_key, Tui, TICK_RATE};
use super::widgets::{key_hints, text_input, ACCENT};
use super::Outcome;
use crate::commands::book::{self as book_commands, BookDto, NewBookInput};
use crate::commands::startup;
use crate::error::{ApiError, AppResult};
use crate::state::{ConfigState, DbState};
use bookstore_core::{sort_books, Book, BookColumn, SearchField, SortDirection, MAX_SEARCH_LEN};

/// Name shown when the window is opened without a username.
pub const GUEST: &str = "Guest";

/// Rows moved by PageUp/PageDown.
const PAGE: usize = 10;

/// What the event loop should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryAction {
    None,
    /// Reload the table, honoring the current search.
    Reload,
    AddBook(NewBookInput),
    DeleteBook { id: i64, name: String },
    ShowInfo(i64),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryFocus {
    Table,
    Search,
}

/// Why the open dialog is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Notice,
    ConfirmDelete { id: i64, name: String },
    ConfirmQuit,
}

#[derive(Debug, Clone)]
pub struct LibraryScreen {
    store_name: String,
    username: String,
    books: Vec<Book>,
    table: TableState,
    sort: Option<(BookColumn, SortDirection)>,
    pub search_field: SearchField,
    pub search_term: String,
    pub focus: LibraryFocus,
    form: Option<AddBookForm>,
    dialog: Option<(Dialog, Pending)>,
    status: Option<String>,
}

impl LibraryScreen {
    pub fn new(store_name: impl Into<String>, username: Option<String>) -> Self {
        LibraryScreen {
            store_name: store_name.into(),
            username: username
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| GUEST.to_string()),
            books: Vec::new(),
            table: TableState::default(),
            sort: None,
            search_field: SearchField::default(),
            search_term: String::new(),
            focus: LibraryFocus::Table,
            form: None,
            dialog: None,
            status: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref().map(|(d, _)| d)
    }

    pub fn form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.table.selected().and_then(|i| self.books.get(i))
    }

    /// Replaces the table contents, keeping the sort and selection position.
    pub fn set_books(&mut self, books: Vec<BookDto>) {
        self.books = books.into_iter().map(Book::from).collect();
        if let Some((column, direction)) = self.sort {
            sort_books(&mut self.books, column, direction);
        }

        let selected = match (self.table.selected(), self.books.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table.select(selected);
    }

    /// Sorts by `column`; choosing the sorted column again flips direction.
    pub fn sort_by(&mut self, column: BookColumn) {
        let direction = match self.sort {
            Some((current, direction)) if current == column => direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some((column, direction));
        sort_books(&mut self.books, column, direction);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.dialog = Some((Dialog::error(message), Pending::Notice));
    }

    pub fn show_info(&mut self, book: &Book) {
        let message = BookColumn::ALL
            .iter()
            .map(|c| format!("{}: {}", c.heading(), c.cell(book)))
            .collect::<Vec<_>>()
            .join("\n");
        self.dialog = Some((Dialog::info("Book Information", message), Pending::Notice));
    }

    /// Called after a successful add: clears the form and confirms.
    pub fn book_added(&mut self, book: &BookDto) {
        if let Some(form) = self.form.as_mut() {
            form.clear();
        }
        self.status = Some(format!("Added #{} '{}'", book.id, book.name));
        self.dialog = Some((Dialog::info("Add Book", ADDED_MESSAGE), Pending::Notice));
    }

    pub fn book_deleted(&mut self, name: &str) {
        self.status = Some(format!("Deleted '{}'", name));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LibraryAction {
        if let Some((dialog, pending)) = &self.dialog {
            let answer = dialog.handle_key(key);
            let pending = pending.clone();
            return match answer {
                None => LibraryAction::None,
                Some(answer) => {
                    self.dialog = None;
                    match (answer, pending) {
                        (DialogAnswer::Yes, Pending::ConfirmDelete { id, name }) => {
                            LibraryAction::DeleteBook { id, name }
                        }
                        (DialogAnswer::Yes, Pending::ConfirmQuit) => LibraryAction::Quit,
                        _ => LibraryAction::None,
                    }
                }
            };
        }

        if let Some(form) = self.form.as_mut() {
            return match form.handle_key(key) {
                FormAction::None => LibraryAction::None,
                FormAction::Close => {
                    self.form = None;
                    LibraryAction::None
                }
                FormAction::Submit(input) => LibraryAction::AddBook(input),
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.ask_quit();
            return LibraryAction::None;
        }

        match self.focus {
            LibraryFocus::Search => self.handle_search_key(key),
            LibraryFocus::Table => self.handle_table_key(key),
        }
    }

    fn ask_quit(&mut self) {
        self.dialog = Some((Dialog::confirm("Exit", CLOSE_QUESTION), Pending::ConfirmQuit));
    }

    fn clear_search(&mut self) -> LibraryAction {
        self.search_field = SearchField::default();
        self.search_term.clear();
        LibraryAction::Reload
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> LibraryAction {
        match key.code {
            KeyCode::Esc => self.focus = LibraryFocus::Table,
            KeyCode::Enter => {
                self.focus = LibraryFocus::Table;
                return LibraryAction::Reload;
            }
            KeyCode::Tab => self.search_field = self.search_field.next(),
            KeyCode::Backspace => {
                self.search_term.pop();
            }
            KeyCode::Char(c) => {
                if self.search_term.chars().count() < MAX_SEARCH_LEN {
                    self.search_term.push(c);
                }
            }
            _ => {}
        }
        LibraryAction::None
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> LibraryAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.ask_quit(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(PAGE as isize)),
            KeyCode::PageDown => self.move_selection(PAGE as isize),
            KeyCode::Home => self.table.select(if self.books.is_empty() { None } else { Some(0) }),
            KeyCode::End => self.table.select(self.books.len().checked_sub(1)),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                self.sort_by(BookColumn::ALL[idx]);
            }
            KeyCode::Char('/') | KeyCode::Char('s') => self.focus = LibraryFocus::Search,
            KeyCode::Char('f') => self.search_field = self.search_field.next(),
            KeyCode::Char('c') => return self.clear_search(),
            KeyCode::Char('r') | KeyCode::F(5) => return LibraryAction::Reload,
            KeyCode::Char('a') => self.form = Some(AddBookForm::new()),
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_book() {
                Some(book) => {
                    let (id, name) = (book.id, book.name.clone());
                    self.dialog = Some((
                        Dialog::confirm("Delete Book", format!("Delete '{}'?", name)),
                        Pending::ConfirmDelete { id, name },
                    ));
                }
                None => {
                    self.dialog = Some((
                        Dialog::warning("Please select a book to delete."),
                        Pending::Notice,
                    ));
                }
            },
            KeyCode::Char('i') | KeyCode::Enter => match self.selected_book() {
                Some(book) => return LibraryAction::ShowInfo(book.id),
                None => {
                    self.dialog = Some((
                        Dialog::warning("Please select a book to view."),
                        Pending::Notice,
                    ));
                }
            },
            _ => {}
        }
        LibraryAction::None
    }

    fn move_selection(&mut self, delta: isize) {
        if self.books.is_empty() {
            self.table.select(None);
            return;
        }
        let last = self.books.len() as isize - 1;
        let current = self.table.selected().map(|i| i as isize).unwrap_or(-1);
        let next = (current + delta).clamp(0, last);
        self.table.select(Some(next as usize));
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(20)])
            .split(area);

        self.draw_side_panel(frame, columns[0]);
        self.draw_table(frame, columns[1]);

        if let Some(form) = &self.form {
            form.draw(frame, area);
        }
        if let Some(dialog) = self.dialog() {
            dialog.render(frame, area);
        }
    }

    fn draw_side_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!(" {} ", self.store_name));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Welcome, "),
                Span::styled(
                    self.username.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ])),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(format!("Filter: ◄ {} ►", self.search_field.label())),
            rows[1],
        );
        frame.render_widget(
            text_input(
                "Search",
                &self.search_term,
                self.focus == LibraryFocus::Search,
                false,
            ),
            rows[2],
        );

        let actions: Vec<Line> = [
            ("/", "Search (Tab: filter)"),
            ("c", "Clear"),
            ("a", "Add Book"),
            ("d", "Delete Book"),
            ("i", "Book Information"),
            ("r", "Refresh"),
            ("1-9", "Sort column"),
            ("q", "Quit"),
        ]
        .iter()
        .map(|(k, a)| key_hints(&[(*k, *a)]))
        .collect();
        frame.render_widget(Paragraph::new(actions), rows[4]);

        if let Some(status) = &self.status {
            frame.render_widget(
                Paragraph::new(Line::styled(status.clone(), Style::default().fg(Color::Green))),
                rows[6],
            );
        }
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(BookColumn::ALL.iter().map(|column| {
            let text = match self.sort {
                Some((sorted, direction)) if sorted == *column => {
                    format!("{} {}", column.heading(), direction.arrow())
                }
                _ => column.heading().to_string(),
            };
            Cell::from(text)
        }))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

        let rows = self.books.iter().map(|book| {
            Row::new(BookColumn::ALL.iter().map(|column| Cell::from(column.cell(book))))
        });

        let widths = [
            Constraint::Length(9),
            Constraint::Percentage(20),
            Constraint::Percentage(12),
            Constraint::Percentage(15),
            Constraint::Length(6),
            Constraint::Percentage(12),
            Constraint::Length(9),
            Constraint::Percentage(13),
            Constraint::Length(9),
        ];

        let title = if self.search_term.trim().is_empty() {
            format!(" Books ({}) ", self.books.len())
        } else {
            format!(
                " Books ({}) {} contains '{}' ",
                self.books.len(),
                self.search_field.label(),
                self.search_term.trim()
            )
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT))
                    .title(title),
            )
            .row_highlight_style(Style::default().bg(ACCENT).fg(Color::Black))
            .highlight_symbol("» ");

        frame.render_stateful_widget(table, area, &mut self.table);

        let mut scrollbar = ScrollbarState::new(self.books.len())
            .position(self.table.selected().unwrap_or(0));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar,
        );

        if self.books.is_empty() {
            let message = if self.search_term.trim().is_empty() {
                "No books yet. Press 'a' to add one."
            } else {
                "No books match the search."
            };
            let inner = area.inner(Margin {
                vertical: 3,
                horizontal: 2,
            });
            frame.render_widget(
                Paragraph::new(message).alignment(Alignment::Center),
                inner,
            );
        }
    }
}

/// Loads the table for the current search.
fn reload(runtime: &Runtime, db: &DbState, screen: &LibraryScreen) -> Result<Vec<BookDto>, ApiError> {
    if screen.search_term.trim().is_empty() {
        runtime.block_on(book_commands::list_books(db))
    } else {
        runtime.block_on(book_commands::search_books(
            db,
            screen.search_field,
            screen.search_term.clone(),
        ))
    }
}

/// Runs the main window until the user quits.
pub fn run(
    terminal: &mut Tui,
    runtime: &Runtime,
    config: &ConfigState,
    username: Option<String>,
) -> AppResult<Outcome> {
    let mut screen = LibraryScreen::new(config.store_name.clone(), username);
    info!(username = %screen.username(), "Main window opened");

    let db = match runtime.block_on(startup::open_database(config)) {
        Ok(db) => Some(db),
        Err(e) => {
            error!(message = %e.message, "Main window could not open the database");
            screen.show_error(e.message);
            None
        }
    };

    if let Some(db) = &db {
        match reload(runtime, db, &screen) {
            Ok(books) => screen.set_books(books),
            Err(e) => screen.show_error(e.message),
        }
    }

    loop {
        terminal.draw(|frame| screen.draw(frame, frame.area()))?;

        let Some(key) = next_key(TICK_RATE)? else {
            continue;
        };

        let action = screen.handle_key(key);
        if action == LibraryAction::Quit {
            break;
        }

        let Some(db) = &db else {
            if action != LibraryAction::None {
                screen.show_error(crate::error::MSG_CONNECTION_FAILED);
            }
            continue;
        };

        let result = match action {
            LibraryAction::None | LibraryAction::Quit => Ok(()),
            LibraryAction::Reload => reload(runtime, db, &screen).map(|books| screen.set_books(books)),
            LibraryAction::AddBook(input) => runtime
                .block_on(book_commands::add_book(db, input))
                .and_then(|book| {
                    screen.book_added(&book);
                    reload(runtime, db, &screen).map(|books| screen.set_books(books))
                }),
            LibraryAction::DeleteBook { id, name } => runtime
                .block_on(book_commands::delete_book(db, id))
                .and_then(|()| {
                    screen.book_deleted(&name);
                    reload(runtime, db, &screen).map(|books| screen.set_books(books))
                }),
            LibraryAction::ShowInfo(id) => runtime
                .block_on(book_commands::get_book(db, id))
                .map(|book| screen.show_info(&Book::from(book))),
        };

        if let Err(e) = result {
            error!(code = ?e.code, message = %e.message, "Main window action failed");
            screen.show_error(e.message);
        }
    }

    if let Some(db) = db {
        runtime.block_on(db.inner().close());
    }
    info!("Main window closed");
    Ok(Outcome::Quit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dto(id: i64, name: &str, year: &str) -> BookDto {
        BookDto {
            id,
            name: name.to_string(),
            publisher: "Penguin".to_string(),
            author: "Author".to_string(),
            year: year.to_string(),
            genre: "Drama".to_string(),
            language: "EN".to_string(),
            isbn: format!("isbn-{}", id),
            quantity: "1".to_string(),
        }
    }

    fn screen_with_books() -> LibraryScreen {
        let mut screen = LibraryScreen::new("Books", Some("maria".to_string()));
        screen.set_books(vec![
            dto(1, "Emma", "1815"),
            dto(2, "Dune", "1965"),
            dto(3, "Beloved", "1987"),
        ]);
        screen
    }

    fn names(screen: &LibraryScreen) -> Vec<&str> {
        screen.books().iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_guest_when_no_username() {
        assert_eq!(LibraryScreen::new("Books", None).username(), "Guest");
        assert_eq!(LibraryScreen::new("Books", Some(" ".into())).username(), "Guest");
        assert_eq!(screen_with_books().username(), "maria");
    }

    #[test]
    fn test_first_row_selected_after_load() {
        let screen = screen_with_books();
        assert_eq!(screen.selected_book().unwrap().id, 1);
    }

    #[test]
    fn test_sort_and_flip() {
        let mut screen = screen_with_books();

        screen.handle_key(key(KeyCode::Char('2')));
        assert_eq!(names(&screen), vec!["Beloved", "Dune", "Emma"]);

        screen.handle_key(key(KeyCode::Char('2')));
        assert_eq!(names(&screen), vec!["Emma", "Dune", "Beloved"]);

        // Sort survives a reload
        screen.set_books(vec![dto(1, "Emma", "1815"), dto(2, "Beloved", "1987")]);
        assert_eq!(names(&screen), vec!["Emma", "Beloved"]);
    }

    #[test]
    fn test_delete_asks_for_confirmation() {
        let mut screen = screen_with_books();
        screen.handle_key(key(KeyCode::Down));

        assert_eq!(screen.handle_key(key(KeyCode::Char('d'))), LibraryAction::None);
        assert_eq!(screen.dialog().unwrap().message, "Delete 'Dune'?");

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('y'))),
            LibraryAction::DeleteBook {
                id: 2,
                name: "Dune".to_string()
            }
        );
        assert!(screen.dialog().is_none());
    }

    #[test]
    fn test_delete_cancelled() {
        let mut screen = screen_with_books();
        screen.handle_key(key(KeyCode::Delete));
        assert_eq!(screen.handle_key(key(KeyCode::Char('n'))), LibraryAction::None);
        assert_eq!(screen.books().len(), 3);
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let mut screen = LibraryScreen::new("Books", None);

        assert_eq!(screen.handle_key(key(KeyCode::Char('d'))), LibraryAction::None);
        assert_eq!(screen.dialog().unwrap().message, "Please select a book to delete.");
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let mut screen = screen_with_books();
        screen.handle_key(key(KeyCode::End));
        assert_eq!(screen.selected_book().unwrap().id, 3);

        screen.set_books(vec![dto(1, "Emma", "1815"), dto(2, "Dune", "1965")]);
        assert_eq!(screen.selected_book().unwrap().id, 2);

        screen.set_books(Vec::new());
        assert!(screen.selected_book().is_none());
    }

    #[test]
    fn test_search_flow() {
        let mut screen = screen_with_books();

        screen.handle_key(key(KeyCode::Char('/')));
        assert_eq!(screen.focus, LibraryFocus::Search);
        for c in "du".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.search_field, SearchField::Language);

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LibraryAction::Reload);
        assert_eq!(screen.focus, LibraryFocus::Table);
        assert_eq!(screen.search_term, "du");

        assert_eq!(screen.handle_key(key(KeyCode::Char('c'))), LibraryAction::Reload);
        assert!(screen.search_term.is_empty());
        assert_eq!(screen.search_field, SearchField::BookName);
    }

    #[test]
    fn test_add_form_flow() {
        let mut screen = screen_with_books();

        screen.handle_key(key(KeyCode::Char('a')));
        assert!(screen.form_open());

        // Keys go to the form while it is open
        screen.handle_key(key(KeyCode::Char('q')));
        assert!(screen.dialog().is_none());

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        match screen.handle_key(ctrl_s) {
            LibraryAction::AddBook(input) => assert_eq!(input.name, "q"),
            other => panic!("unexpected action: {other:?}"),
        }

        screen.book_added(&dto(4, "q", "2000"));
        assert_eq!(screen.dialog().unwrap().message, ADDED_MESSAGE);
        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.form_open());

        screen.handle_key(key(KeyCode::Esc));
        assert!(!screen.form_open());
    }

    #[test]
    fn test_info_and_quit() {
        let mut screen = screen_with_books();
        assert_eq!(screen.handle_key(key(KeyCode::Char('i'))), LibraryAction::ShowInfo(1));

        let first = screen.books()[0].clone();
        screen.show_info(&first);
        assert!(screen.dialog().unwrap().message.contains("Book Name: Emma"));
        screen.handle_key(key(KeyCode::Esc));

        screen.handle_key(key(KeyCode::Char('q')));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LibraryAction::Quit);
    }

    #[test]
    fn test_render_shows_welcome_and_rows() {
        let mut screen = screen_with_books();
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal
            .draw(|frame| screen.draw(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>() + "\n")
            .collect();

        assert!(text.contains("Welcome, maria"));
        assert!(text.contains("Book ID"));
        assert!(text.contains("Beloved"));
    }
}
