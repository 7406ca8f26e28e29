use super::*;

#[test]
fn visible_strictly_past_threshold() {
    assert!(!is_visible(0.0, 300.0));
    assert!(!is_visible(299.9, 300.0));
    assert!(!is_visible(300.0, 300.0));
    assert!(is_visible(300.5, 300.0));
    assert!(is_visible(5000.0, 300.0));
}

#[test]
fn starts_hidden_and_at_rest() {
    let state = ScrollTopState::new(300.0);
    assert!(!state.visible());
    assert!(!state.hovered());
    assert_eq!(state.opacity(), "0");
    assert_eq!(state.transform(), "translateY(0)");
}

#[test]
fn every_scroll_recomputes_visibility() {
    let mut state = ScrollTopState::new(300.0);
    state.on_scroll(301.0);
    assert_eq!(state.opacity(), "1");
    state.on_scroll(300.0);
    assert_eq!(state.opacity(), "0");
    state.on_scroll(900.0);
    assert!(state.visible());
}

#[test]
fn hover_lifts_button() {
    let mut state = ScrollTopState::new(300.0);
    state.set_hovered(true);
    assert_eq!(state.transform(), "translateY(-5px)");
    state.set_hovered(false);
    assert_eq!(state.transform(), "translateY(0)");
}

#[test]
fn custom_threshold() {
    let mut state = ScrollTopState::new(50.0);
    state.on_scroll(60.0);
    assert!(state.visible());
}
