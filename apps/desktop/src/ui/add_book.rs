//! # Add Book Form
//!
//! Modal form over the main window. Genre and language cycle through their
//! allow-lists with Left/Right but also accept typed text, which is checked
//! on submit.
//!
//! ```text
//! ┌ Add Book ──────────────────────────────┐
//! │ Book Name:       [                  ]  │
//! │ Publisher Name:  [                  ]  │
//! │ Author Name:     [                  ]  │
//! │ Book Year:       [                  ]  │
//! │ Genre:          ◄[ Fiction          ]► │
//! │ Language:       ◄[ EN               ]► │
//! │ Book ISBN:       [                  ]  │
//! │ Book Quantity:   [                  ]  │
//! │        [ Submit ]     [ Clear ]        │
//! └────────────────────────────────────────┘
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::widgets::{button, centered_fixed, key_hints, text_input, ACCENT};
use crate::commands::book::NewBookInput;
use bookstore_core::{Genre, Language};

/// Shown after a successful submit.
pub const ADDED_MESSAGE: &str = "Book information added successfully!";

/// Focusable parts of the form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Publisher,
    Author,
    Year,
    Genre,
    Language,
    Isbn,
    Quantity,
    Submit,
    Clear,
}

impl FormField {
    const ORDER: [FormField; 10] = [
        FormField::Name,
        FormField::Publisher,
        FormField::Author,
        FormField::Year,
        FormField::Genre,
        FormField::Language,
        FormField::Isbn,
        FormField::Quantity,
        FormField::Submit,
        FormField::Clear,
    ];

    /// The eight text fields.
    const INPUTS: [FormField; 8] = [
        FormField::Name,
        FormField::Publisher,
        FormField::Author,
        FormField::Year,
        FormField::Genre,
        FormField::Language,
        FormField::Isbn,
        FormField::Quantity,
    ];

    fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Book Name:",
            FormField::Publisher => "Publisher Name:",
            FormField::Author => "Author Name:",
            FormField::Year => "Book Year:",
            FormField::Genre => "Genre: (◄ ►)",
            FormField::Language => "Language: (◄ ►)",
            FormField::Isbn => "Book ISBN:",
            FormField::Quantity => "Book Quantity:",
            FormField::Submit => "Submit",
            FormField::Clear => "Clear",
        }
    }

    fn step(self, forward: bool) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let next = if forward { idx + 1 } else { idx + len - 1 };
        Self::ORDER[next % len]
    }
}

/// What the main window should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit(NewBookInput),
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct AddBookForm {
    pub input: NewBookInput,
    focus: Option<FormField>,
}

impl AddBookForm {
    pub fn new() -> Self {
        AddBookForm::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus.unwrap_or(FormField::Name)
    }

    /// Empties every field and returns to the first one.
    pub fn clear(&mut self) {
        self.input = NewBookInput::default();
        self.focus = Some(FormField::Name);
    }

    fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        let input = &mut self.input;
        match field {
            FormField::Name => Some(&mut input.name),
            FormField::Publisher => Some(&mut input.publisher),
            FormField::Author => Some(&mut input.author),
            FormField::Year => Some(&mut input.year),
            FormField::Genre => Some(&mut input.genre),
            FormField::Language => Some(&mut input.language),
            FormField::Isbn => Some(&mut input.isbn),
            FormField::Quantity => Some(&mut input.quantity),
            FormField::Submit | FormField::Clear => None,
        }
    }

    fn value(&self, field: FormField) -> &str {
        let input = &self.input;
        match field {
            FormField::Name => &input.name,
            FormField::Publisher => &input.publisher,
            FormField::Author => &input.author,
            FormField::Year => &input.year,
            FormField::Genre => &input.genre,
            FormField::Language => &input.language,
            FormField::Isbn => &input.isbn,
            FormField::Quantity => &input.quantity,
            FormField::Submit | FormField::Clear => "",
        }
    }

    /// Moves the genre or language field through its allow-list.
    fn cycle_choice(&mut self, forward: bool) {
        let focus = self.focus();
        let labels: Vec<&'static str> = match focus {
            FormField::Genre => Genre::labels(),
            FormField::Language => Language::labels(),
            _ => return,
        };

        let Some(value) = self.value_mut(focus) else {
            return;
        };
        let next = match labels.iter().position(|l| *l == value.as_str()) {
            Some(idx) if forward => (idx + 1) % labels.len(),
            Some(idx) => (idx + labels.len() - 1) % labels.len(),
            None if forward => 0,
            None => labels.len() - 1,
        };
        *value = labels[next].to_string();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return FormAction::Submit(self.input.clone());
        }

        let focus = self.focus();
        match key.code {
            KeyCode::Esc => return FormAction::Close,
            KeyCode::Tab | KeyCode::Down => self.focus = Some(focus.step(true)),
            KeyCode::BackTab | KeyCode::Up => self.focus = Some(focus.step(false)),
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Enter => match focus {
                FormField::Submit => return FormAction::Submit(self.input.clone()),
                FormField::Clear => self.clear(),
                _ => self.focus = Some(focus.step(true)),
            },
            KeyCode::Backspace => {
                if let Some(value) = self.value_mut(focus) {
                    value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(value) = self.value_mut(focus) {
                    value.push(c);
                }
            }
            _ => {}
        }

        FormAction::None
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_fixed(60, 32, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Add Book ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut constraints: Vec<Constraint> =
            FormField::INPUTS.iter().map(|_| Constraint::Length(3)).collect();
        constraints.extend([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints(constraints)
            .split(inner);

        let focus = self.focus();
        for (i, field) in FormField::INPUTS.iter().enumerate() {
            frame.render_widget(
                text_input(field.label(), self.value(*field), focus == *field, false),
                rows[i],
            );
        }

        let n = FormField::INPUTS.len();

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[n + 1]);
        frame.render_widget(button("Submit", focus == FormField::Submit), buttons[0]);
        frame.render_widget(button("Clear", focus == FormField::Clear), buttons[1]);

        frame.render_widget(
            Paragraph::new(key_hints(&[
                ("Tab", "Next"),
                ("◄ ►", "Choose"),
                ("Ctrl+S", "Submit"),
                ("Esc", "Close"),
            ]))
            .alignment(Alignment::Center),
            rows[n + 3],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut AddBookForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn focus_on(form: &mut AddBookForm, field: FormField) {
        while form.focus() != field {
            form.handle_key(key(KeyCode::Tab));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut form = AddBookForm::new();
        type_text(&mut form, "Dune");
        form.handle_key(key(KeyCode::Enter));
        type_text(&mut form, "Chilton");

        assert_eq!(form.input.name, "Dune");
        assert_eq!(form.input.publisher, "Chilton");
        assert_eq!(form.focus(), FormField::Publisher);

        form.handle_key(key(KeyCode::Enter));
        assert_eq!(form.focus(), FormField::Author);
    }

    #[test]
    fn test_genre_cycles_allow_list() {
        let mut form = AddBookForm::new();
        focus_on(&mut form, FormField::Genre);

        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.input.genre, "Fiction");
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.input.genre, "Fantasy");
        form.handle_key(key(KeyCode::Left));
        form.handle_key(key(KeyCode::Left));
        assert_eq!(form.input.genre, "Other");
    }

    #[test]
    fn test_language_accepts_typed_text() {
        let mut form = AddBookForm::new();
        focus_on(&mut form, FormField::Language);

        type_text(&mut form, "ES");
        assert_eq!(form.input.language, "ES");
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.input.language, "RU");
    }

    #[test]
    fn test_submit_and_clear_buttons() {
        let mut form = AddBookForm::new();
        type_text(&mut form, "Dune");

        focus_on(&mut form, FormField::Submit);
        match form.handle_key(key(KeyCode::Enter)) {
            FormAction::Submit(input) => assert_eq!(input.name, "Dune"),
            other => panic!("unexpected action: {other:?}"),
        }

        focus_on(&mut form, FormField::Clear);
        form.handle_key(key(KeyCode::Enter));
        assert_eq!(form.input, NewBookInput::default());
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_render_shows_fields_and_buttons() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let mut form = AddBookForm::new();
        type_text(&mut form, "Dune");

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| form.draw(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>() + "\n")
            .collect();

        assert!(text.contains("Add Book"));
        assert!(text.contains("Book Quantity:"));
        assert!(text.contains("Dune"));
        assert!(text.contains("[ Submit ]"));
    }

    #[test]
    fn test_ctrl_s_submits_and_esc_closes() {
        let mut form = AddBookForm::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(matches!(form.handle_key(ctrl_s), FormAction::Submit(_)));
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Close);
    }
}
