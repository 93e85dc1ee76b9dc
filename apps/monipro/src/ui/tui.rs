//! Interactive full-screen loop

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use monipro_common::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use super::dashboard;
use super::theme::CatppuccinTheme;
use crate::app::{App, Message};

/// How often keyboard input is checked between ticks
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Redraw on every tick until the user quits
///
/// Expects the terminal to already be in raw mode on the alternate screen.
pub async fn run(app: &mut App, mut ticks: UnboundedReceiver<Message>) -> Result<()> {
    let theme = CatppuccinTheme::mocha();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    while app.is_running() {
        terminal.draw(|f| dashboard::draw(f, app.title(), app.state(), &theme))?;

        tokio::select! {
            message = ticks.recv() => match message {
                Some(message) => app.update(message),
                None => app.update(Message::Quit),
            },
            _ = tokio::time::sleep(INPUT_POLL) => {}
        }

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit_key(key.code, key.modifiers) {
                    app.update(Message::Quit);
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
