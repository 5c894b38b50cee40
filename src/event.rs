use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Left,
    Right,
    NextField,
    PrevField,
    Activate,
    Back,
    Help,
    Input(char),
    Backspace,
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Wait up to `timeout` for a key press. Releases and repeats are skipped.
pub fn next_key_event(timeout: Duration) -> color_eyre::Result<Option<KeyEvent>> {
    loop {
        match poll_event(timeout)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
}

/// Map a key to an action. While `typing`, printable keys go to the text
/// field instead of acting as shortcuts.
pub fn action_for(key: KeyEvent, typing: bool) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up => return Some(Action::Up),
        KeyCode::Down => return Some(Action::Down),
        KeyCode::Tab => return Some(Action::NextField),
        KeyCode::BackTab => return Some(Action::PrevField),
        KeyCode::Enter => return Some(Action::Activate),
        KeyCode::Esc => return Some(Action::Back),
        KeyCode::Backspace => return Some(Action::Backspace),
        _ => {}
    }

    if typing {
        return match key.code {
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
        KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_keys_and_arrows_navigate() {
        assert_eq!(action_for(key(KeyCode::Char('j')), false), Some(Action::Down));
        assert_eq!(action_for(key(KeyCode::Up), false), Some(Action::Up));
        assert_eq!(action_for(key(KeyCode::Char('h')), false), Some(Action::Left));
        assert_eq!(action_for(key(KeyCode::Char(' ')), false), Some(Action::Activate));
        assert_eq!(action_for(key(KeyCode::Backspace), false), Some(Action::Backspace));
        assert_eq!(action_for(key(KeyCode::Char('q')), false), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn typing_captures_printable_keys() {
        assert_eq!(action_for(key(KeyCode::Char('q')), true), Some(Action::Input('q')));
        assert_eq!(action_for(key(KeyCode::Char(' ')), true), Some(Action::Input(' ')));
        assert_eq!(action_for(key(KeyCode::Backspace), true), Some(Action::Backspace));
        assert_eq!(action_for(key(KeyCode::Tab), true), Some(Action::NextField));
        assert_eq!(action_for(key(KeyCode::Esc), true), Some(Action::Back));
        assert_eq!(action_for(key(KeyCode::Left), true), None);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c, true), Some(Action::Quit));
        assert_eq!(action_for(ctrl_c, false), Some(Action::Quit));
    }
}
