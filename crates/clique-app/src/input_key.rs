//! Abstract input key event, independent of terminal library.
//!
//! Converted from crossterm key events at the TUI boundary so the
//! application logic can be driven without a terminal.

/// Abstract input key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key, including space
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+o, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}
