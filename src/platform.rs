//! Platform-specific configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Whether `key` is the form submit shortcut
pub fn is_submit_shortcut(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SUBMIT_MODIFIER))
}
