//! Default keybindings for the question screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use super::InputAction;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// A key combo with the Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Fixed key-to-action table. Printable characters are handled outside
/// the table so any layout can type into the question.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, InputAction>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), InputAction::Quit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('d')), InputAction::Quit);

        bindings.insert(KeyCombo::plain(KeyCode::Enter), InputAction::Submit);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), InputAction::ClearQuestion);
        bindings.insert(
            KeyCombo::ctrl(KeyCode::Char('u')),
            InputAction::ClearQuestion,
        );

        bindings.insert(KeyCombo::plain(KeyCode::Backspace), InputAction::Backspace);
        bindings.insert(KeyCombo::plain(KeyCode::Delete), InputAction::Delete);
        bindings.insert(KeyCombo::plain(KeyCode::Left), InputAction::CursorLeft);
        bindings.insert(KeyCombo::plain(KeyCode::Right), InputAction::CursorRight);
        bindings.insert(KeyCombo::plain(KeyCode::Home), InputAction::CursorHome);
        bindings.insert(KeyCombo::plain(KeyCode::End), InputAction::CursorEnd);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('a')), InputAction::CursorHome);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('e')), InputAction::CursorEnd);

        bindings.insert(KeyCombo::plain(KeyCode::Up), InputAction::ScrollUp);
        bindings.insert(KeyCombo::plain(KeyCode::Down), InputAction::ScrollDown);
        bindings.insert(KeyCombo::plain(KeyCode::PageUp), InputAction::PageUp);
        bindings.insert(KeyCombo::plain(KeyCode::PageDown), InputAction::PageDown);

        Self { bindings }
    }

    /// Look up the action for a key event. Release events map to nothing.
    pub fn action_for(&self, key: KeyEvent) -> Option<InputAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if let Some(action) = self.bindings.get(&KeyCombo::new(key.code, key.modifiers)) {
            return Some(action.clone());
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(InputAction::Insert(c))
            }
            _ => None,
        }
    }
}
