//! Entering and leaving full-screen mode.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen with bracketed paste enabled.
///
/// Raw mode is enabled separately by the caller.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Undo [`enter_tui_mode`] and raw mode, ignoring errors.
///
/// Safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore of stdout, for panic paths.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_writes_alternate_screen_and_paste_sequences() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();

        let out = String::from_utf8_lossy(&buffer);
        assert!(out.contains("\x1b[?1049h"), "alternate screen: {out:?}");
        assert!(out.contains("\x1b[?2004h"), "bracketed paste: {out:?}");
    }

    #[test]
    fn test_leave_tui_mode_is_repeatable() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        leave_tui_mode(&mut buffer);

        let out = String::from_utf8_lossy(&buffer);
        assert!(out.contains("\x1b[?1049l"));
        assert!(out.contains("\x1b[?25h"));
    }
}
