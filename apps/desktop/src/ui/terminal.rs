//! Terminal setup, teardown and input polling.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// The terminal every screen draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How long a screen waits for input before redrawing.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Enters raw mode and the alternate screen.
pub fn setup_terminal() -> io::Result<Tui> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

/// Leaves the alternate screen. Must run before handing off to the next
/// screen process, which sets the terminal up again.
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}

/// Waits up to `timeout` for a key press. Releases and repeats of other
/// event kinds are skipped.
pub fn next_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Keeps the current frame on screen for `duration`; Esc or Enter ends
/// the wait early.
pub fn hold(duration: Duration) -> io::Result<()> {
    let deadline = Instant::now() + duration;

    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        if let Some(key) = next_key(remaining.min(TICK_RATE))? {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                break;
            }
        }
    }

    Ok(())
}
