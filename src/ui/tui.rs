use crate::{domain::traits::Classifier, ui::app::App, ui::view};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

/// Runs `restore` when dropped. Armed right after raw mode is
/// enabled, so a failed setup step, an early `?` return, or a panic
/// in the form loop all hand the shell back a cooked terminal.
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    pub fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            tracing::warn!("Failed to restore terminal: {e}");
        }
    }
}

/// The form's terminal: raw mode plus the alternate screen for as
/// long as this value lives.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard:   TerminalGuard,
}

impl Tui {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard::new(restore_terminal);
        execute!(stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal, _guard: guard })
    }

    /// Draws the whole form from scratch.
    pub fn draw<C: Classifier>(&mut self, app: &App<C>) -> Result<()> {
        self.terminal.draw(|frame| view::render(app, frame))?;
        Ok(())
    }
}

/// Leave the alternate screen and drop back to cooked mode.
fn restore_terminal() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}
