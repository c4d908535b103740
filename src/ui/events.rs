//! Keyboard event handling for the viewer

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

/// Watches the keyboard for the dismiss keys
pub struct EventHandler {
    quit: bool,
    poll_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            quit: false,
            poll_interval: Duration::from_millis(250),
        }
    }

    /// Wait up to one poll interval for input, then report whether to close
    pub fn should_quit(&mut self) -> io::Result<bool> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }

        Ok(self.quit)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.quit = true;
            }
            _ => {}
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_dismiss_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut events = EventHandler::new();
            events.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            assert!(events.quit, "{:?}", code);
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut events = EventHandler::new();
        events.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        events.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!events.quit);
    }
}
