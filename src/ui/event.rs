use crate::ui::app::Action;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Handles terminal events and maps them to application `Action`s.
pub struct EventHandler {
    tick: Duration,
}

impl EventHandler {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    /// Blocks until a key press arrives or the tick elapses.
    pub fn next(&self) -> Result<Action> {
        if event::poll(self.tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
        }
        Ok(Action::Tick)
    }
}

/// Maps a `KeyEvent` to the `Action` it triggers.
pub fn map_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc        => Action::Quit,
        KeyCode::Tab | KeyCode::Down             => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up           => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l')      => Action::Step(1),
        KeyCode::Left | KeyCode::Char('h')       => Action::Step(-1),
        KeyCode::PageUp                          => Action::Step(10),
        KeyCode::PageDown                        => Action::Step(-10),
        KeyCode::Home                            => Action::ToMin,
        KeyCode::End                             => Action::ToMax,
        KeyCode::Char('r')                       => Action::Reset,
        _ => Action::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Action {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(press(KeyCode::Char('q')), Action::Quit);
        assert_eq!(press(KeyCode::Esc), Action::Quit);
        assert_eq!(press(KeyCode::Tab), Action::FocusNext);
        assert_eq!(press(KeyCode::BackTab), Action::FocusPrev);
        assert_eq!(press(KeyCode::Right), Action::Step(1));
        assert_eq!(press(KeyCode::Char('h')), Action::Step(-1));
        assert_eq!(press(KeyCode::PageDown), Action::Step(-10));
        assert_eq!(press(KeyCode::End), Action::ToMax);
        assert_eq!(press(KeyCode::Char('r')), Action::Reset);
        assert_eq!(press(KeyCode::Char('x')), Action::Tick);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Action::Quit);
    }
}
