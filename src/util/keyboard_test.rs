use super::*;

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Modifiers::default() }
}

fn meta() -> Modifiers {
    Modifiers { meta: true, ..Modifiers::default() }
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
    assert!(!m.command());
}

#[test]
fn ctrl_or_meta_is_command() {
    assert!(ctrl().command());
    assert!(meta().command());
    assert!(!Modifiers { shift: true, alt: true, ..Modifiers::default() }.command());
}

// =============================================================
// resolve_shortcut
// =============================================================

#[test]
fn ctrl_letters_map_to_bulk_actions() {
    assert_eq!(resolve_shortcut("e", ctrl()), Some(Shortcut::ExpandAll));
    assert_eq!(resolve_shortcut("c", ctrl()), Some(Shortcut::CollapseAll));
    assert_eq!(resolve_shortcut("p", ctrl()), Some(Shortcut::Print));
}

#[test]
fn meta_letters_map_to_bulk_actions() {
    assert_eq!(resolve_shortcut("e", meta()), Some(Shortcut::ExpandAll));
    assert_eq!(resolve_shortcut("p", meta()), Some(Shortcut::Print));
}

#[test]
fn bare_letters_are_not_intercepted() {
    assert_eq!(resolve_shortcut("e", Modifiers::default()), None);
    assert_eq!(resolve_shortcut("c", Modifiers::default()), None);
    assert_eq!(resolve_shortcut("p", Modifiers::default()), None);
}

#[test]
fn alt_alone_is_not_a_command() {
    let alt = Modifiers { alt: true, ..Modifiers::default() };
    assert_eq!(resolve_shortcut("e", alt), None);
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(resolve_shortcut("s", ctrl()), None);
    assert_eq!(resolve_shortcut("Enter", ctrl()), None);
}

#[test]
fn uppercase_letters_are_ignored() {
    let shifted = Modifiers { ctrl: true, shift: true, ..Modifiers::default() };
    assert_eq!(resolve_shortcut("E", shifted), None);
}

// =============================================================
// activates_header
// =============================================================

#[test]
fn enter_and_space_activate_headers() {
    assert!(activates_header("Enter"));
    assert!(activates_header(" "));
}

#[test]
fn other_keys_do_not_activate_headers() {
    assert!(!activates_header("Tab"));
    assert!(!activates_header("Escape"));
    assert!(!activates_header("Spacebar"));
}
