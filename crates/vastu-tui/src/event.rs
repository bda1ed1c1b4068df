//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use vastu_app::message::Message;
use vastu_app::InputKey;
use vastu_core::prelude::*;

/// Poll timeout; a timeout produces a tick (20 FPS)
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn convert(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_typed_characters() {
        assert_eq!(
            convert(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(InputKey::Char('a'))
        );
        assert_eq!(
            convert(KeyCode::Char('/'), KeyModifiers::SHIFT),
            Some(InputKey::Char('/'))
        );
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(
            convert(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('c'))
        );
        assert_eq!(
            convert(KeyCode::Char('r'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('r'))
        );
    }

    #[test]
    fn test_form_navigation_keys() {
        assert_eq!(convert(KeyCode::Tab, KeyModifiers::NONE), Some(InputKey::Tab));
        assert_eq!(
            convert(KeyCode::Tab, KeyModifiers::SHIFT),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            convert(KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            convert(KeyCode::Backspace, KeyModifiers::NONE),
            Some(InputKey::Backspace)
        );
        assert_eq!(convert(KeyCode::Enter, KeyModifiers::NONE), Some(InputKey::Enter));
    }

    #[test]
    fn test_view_and_scroll_keys() {
        assert_eq!(convert(KeyCode::F(3), KeyModifiers::NONE), Some(InputKey::F(3)));
        assert_eq!(
            convert(KeyCode::PageDown, KeyModifiers::NONE),
            Some(InputKey::PageDown)
        );
        assert_eq!(convert(KeyCode::Left, KeyModifiers::NONE), Some(InputKey::Left));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(convert(KeyCode::Insert, KeyModifiers::NONE), None);
        assert_eq!(convert(KeyCode::Delete, KeyModifiers::NONE), None);
    }
}
