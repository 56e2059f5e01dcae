//! Panic hook that puts the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Install a hook that restores the terminal, logs the panic and then
/// defers to the previously installed hook.
///
/// Call before creating the [`super::TerminalManager`], and after
/// `color_eyre::install()` so its report is the one that prints.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}
