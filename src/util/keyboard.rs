//! Keyboard mapping: global shortcuts and header activation keys.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the platform command modifier (Ctrl or Cmd) is held.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Bulk action reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + E.
    ExpandAll,
    /// Ctrl/Cmd + C.
    CollapseAll,
    /// Ctrl/Cmd + P.
    Print,
}

/// Resolve a keydown into a shortcut.
///
/// `key` is the `KeyboardEvent.key` value. Only the lowercase letters match,
/// so Shift combinations fall through to the browser untouched.
#[must_use]
pub fn resolve_shortcut(key: &str, modifiers: Modifiers) -> Option<Shortcut> {
    if !modifiers.command() {
        return None;
    }
    match key {
        "e" => Some(Shortcut::ExpandAll),
        "c" => Some(Shortcut::CollapseAll),
        "p" => Some(Shortcut::Print),
        _ => None,
    }
}

/// Whether `key` activates a focused day header like a button press.
#[must_use]
pub fn activates_header(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
