//! Actions the question screen understands.

/// A user intent, decoupled from the key that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Insert a character at the cursor
    Insert(char),
    /// Insert pasted text at the cursor (already flattened to one line)
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Scroll the answer by one row
    ScrollUp,
    ScrollDown,
    /// Scroll the answer by one panel height
    PageUp,
    PageDown,
    /// Empty the question
    ClearQuestion,
    /// Send the question
    Submit,
    Quit,
}

impl InputAction {
    /// Build a paste action. The question is one line, so line breaks
    /// become single spaces, as do tabs and other control characters.
    pub fn paste(text: &str) -> Self {
        let flattened = text
            .replace("\r\n", " ")
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        InputAction::Paste(flattened)
    }
}
