//! Layout helpers and small widgets shared by the screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Accent color for borders and headings.
pub const ACCENT: Color = Color::Rgb(0xaa, 0x96, 0x5b);

/// A rectangle of `percent_x` by `percent_y` centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A `width` x `height` rectangle centered in `r`, shrunk to fit.
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// A bordered single-line text field.
///
/// Masked fields show one `*` per character.
pub fn text_input<'a>(label: &'a str, value: &str, focused: bool, masked: bool) -> Paragraph<'a> {
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let (border, cursor) = if focused {
        (Style::default().fg(ACCENT).add_modifier(Modifier::BOLD), "█")
    } else {
        (Style::default().fg(Color::DarkGray), "")
    };

    Paragraph::new(Line::from(vec![Span::raw(shown), Span::raw(cursor)])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(label),
    )
}

/// A button-like label; focused buttons are drawn inverted.
pub fn button(label: &str, focused: bool) -> Paragraph<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };

    Paragraph::new(Line::from(Span::styled(format!("[ {} ]", label), style)))
        .alignment(ratatui::layout::Alignment::Center)
}

/// Footer line listing key bindings as `key action` pairs.
pub fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }
    Line::from(spans)
}
