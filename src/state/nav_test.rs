use super::*;

fn link(href: &str) -> NavLinkSnapshot {
    NavLinkSnapshot { href: href.to_string(), target_present: true }
}

fn spy() -> NavSpy {
    NavSpy::new(&[link("#day1"), link("#day2"), link("#day3"), link("#bookings")])
}

fn seen(section: &str) -> Intersection {
    Intersection { section: section.to_string(), intersecting: true }
}

fn left(section: &str) -> Intersection {
    Intersection { section: section.to_string(), intersecting: false }
}

// =============================================================
// resolve / activate
// =============================================================

#[test]
fn nothing_active_initially() {
    let spy = spy();
    assert_eq!(spy.active(), None);
    assert_eq!(spy.active_target(), None);
}

#[test]
fn resolve_strips_anchor() {
    let spy = spy();
    assert_eq!(spy.resolve(1), Some("day2"));
    assert_eq!(spy.resolve(9), None);
}

#[test]
fn resolve_skips_missing_targets() {
    let spy = NavSpy::new(&[NavLinkSnapshot { href: "#day7".into(), target_present: false }]);
    assert_eq!(spy.resolve(0), None);
}

#[test]
fn resolve_skips_external_links() {
    let spy = NavSpy::new(&[link("https://example.com"), link("#")]);
    assert_eq!(spy.resolve(0), None);
    assert_eq!(spy.resolve(1), None);
}

#[test]
fn activate_makes_single_entry_active() {
    let mut spy = spy();
    spy.activate(0);
    let effect = spy.activate(2);
    assert_eq!(effect, Effect::SetActiveNav { index: Some(2) });
    assert_eq!(spy.active_target(), Some("day3"));
}

// =============================================================
// observe
// =============================================================

#[test]
fn intersecting_section_becomes_active() {
    let mut spy = spy();
    let effect = spy.observe(&[seen("day2")]);
    assert_eq!(effect, Some(Effect::SetActiveNav { index: Some(1) }));
    assert_eq!(spy.active_target(), Some("day2"));
}

#[test]
fn leaving_section_does_not_change_highlight() {
    let mut spy = spy();
    spy.observe(&[seen("day2")]);
    assert_eq!(spy.observe(&[left("day2")]), None);
    assert_eq!(spy.active(), Some(1));
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let mut spy = spy();
    spy.observe(&[seen("day1"), left("day2"), seen("day3")]);
    assert_eq!(spy.active_target(), Some("day3"));
}

#[test]
fn unlinked_section_is_ignored() {
    let mut spy = spy();
    spy.observe(&[seen("day1")]);
    assert_eq!(spy.observe(&[seen("appendix")]), None);
    assert_eq!(spy.active_target(), Some("day1"));
}

#[test]
fn repeated_report_is_not_a_change() {
    let mut spy = spy();
    spy.observe(&[seen("bookings")]);
    assert_eq!(spy.observe(&[seen("bookings")]), None);
}

// =============================================================
// scroll_target
// =============================================================

#[test]
fn scroll_target_subtracts_clearance() {
    assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
    assert_eq!(scroll_target(40.0, 80.0), -40.0);
}
