//! Abstract input key event, independent of terminal library.
//!
//! Key handling in `handler::keys` works on [`InputKey`] rather than crossterm
//! types, so the state machine can be driven from tests and from the headless
//! runner without a terminal.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Digit `1`-`9` as a zero-based index.
    pub fn digit_index(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_index() {
        assert_eq!(InputKey::Char('1').digit_index(), Some(0));
        assert_eq!(InputKey::Char('5').digit_index(), Some(4));
        assert_eq!(InputKey::Char('0').digit_index(), None);
        assert_eq!(InputKey::Char('a').digit_index(), None);
        assert_eq!(InputKey::F(1).digit_index(), None);
    }
}
