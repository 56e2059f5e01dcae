//! Keyboard and paste handling.
//!
//! ```text
//! KeyEvent -> KeybindingConfig::action_for() -> InputAction -> App::apply_action()
//! ```

mod action;
pub mod keybindings;

pub use action::InputAction;
pub use keybindings::{KeyCombo, KeybindingConfig};
