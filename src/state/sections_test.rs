use super::*;

fn three_days() -> Sections {
    let snapshots = [
        SectionSnapshot::collapsed("day1"),
        SectionSnapshot::collapsed("day2"),
        SectionSnapshot::collapsed("day3"),
    ];
    Sections::new(&snapshots, 100)
}

fn expanded_ids(sections: &Sections) -> Vec<&str> {
    sections.iter().filter(|s| s.expanded).map(|s| s.id.as_str()).collect()
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_prepares_every_header() {
    let mut sections = three_days();
    let effects = sections.initialize(false);
    assert_eq!(effects.len(), 3);
    assert!(effects.iter().all(|e| matches!(e, Effect::PrepareHeader { expanded: false, .. })));
    assert!(expanded_ids(&sections).is_empty());
}

#[test]
fn initialize_opens_first_day() {
    let mut sections = three_days();
    let effects = sections.initialize(true);
    assert_eq!(expanded_ids(&sections), vec!["day1"]);
    assert!(effects.contains(&Effect::PrepareHeader { section: "day1".into(), expanded: true }));
    assert!(effects.contains(&Effect::SetSectionExpanded { section: "day1".into(), expanded: true }));
}

#[test]
fn initialize_skips_sections_without_content() {
    let snapshots = [
        SectionSnapshot { id: "intro".into(), has_content: false, expanded: false },
        SectionSnapshot::collapsed("day1"),
    ];
    let mut sections = Sections::new(&snapshots, 100);
    sections.initialize(true);
    assert_eq!(expanded_ids(&sections), vec!["day1"]);
}

#[test]
fn initialize_leaves_already_open_first_day_alone() {
    let snapshots = [SectionSnapshot { id: "day1".into(), has_content: true, expanded: true }];
    let mut sections = Sections::new(&snapshots, 100);
    let effects = sections.initialize(true);
    assert_eq!(effects, vec![Effect::PrepareHeader { section: "day1".into(), expanded: true }]);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_opens_and_schedules_scroll() {
    let mut sections = three_days();
    let effects = sections.toggle("day2");
    assert_eq!(sections.is_expanded("day2"), Some(true));
    assert_eq!(
        effects,
        vec![
            Effect::SetSectionExpanded { section: "day2".into(), expanded: true },
            Effect::ScrollIntoView { section: "day2".into() }
                .after(Trigger::SectionSettled { section: "day2".into(), fallback_ms: 100 }),
        ]
    );
}

#[test]
fn toggle_closing_does_not_scroll() {
    let mut sections = three_days();
    sections.toggle("day2");
    let effects = sections.toggle("day2");
    assert_eq!(sections.is_expanded("day2"), Some(false));
    assert_eq!(effects, vec![Effect::SetSectionExpanded { section: "day2".into(), expanded: false }]);
}

#[test]
fn toggle_twice_restores_every_section() {
    let mut sections = three_days();
    sections.toggle("day1");
    for id in ["day1", "day2", "day3"] {
        let before = sections.is_expanded(id);
        sections.toggle(id);
        sections.toggle(id);
        assert_eq!(sections.is_expanded(id), before, "{id}");
    }
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut sections = three_days();
    assert!(sections.toggle("day9").is_empty());
    assert!(expanded_ids(&sections).is_empty());
}

#[test]
fn toggle_section_without_content_is_noop() {
    let snapshots = [SectionSnapshot { id: "notes".into(), has_content: false, expanded: false }];
    let mut sections = Sections::new(&snapshots, 100);
    assert!(sections.toggle("notes").is_empty());
    assert_eq!(sections.is_expanded("notes"), None);
}

// =============================================================
// expand / expand_all / collapse_all
// =============================================================

#[test]
fn expand_opens_without_scroll() {
    let mut sections = three_days();
    let effects = sections.expand("day3");
    assert_eq!(effects, vec![Effect::SetSectionExpanded { section: "day3".into(), expanded: true }]);
}

#[test]
fn expand_open_section_is_noop() {
    let mut sections = three_days();
    sections.expand("day3");
    assert!(sections.expand("day3").is_empty());
}

#[test]
fn expand_all_touches_every_section_without_scroll() {
    let mut sections = three_days();
    sections.toggle("day2");
    let effects = sections.expand_all();
    assert_eq!(effects.len(), 3);
    assert!(effects.iter().all(|e| matches!(e, Effect::SetSectionExpanded { expanded: true, .. })));
    assert_eq!(expanded_ids(&sections), vec!["day1", "day2", "day3"]);
}

#[test]
fn collapse_all_closes_everything() {
    let mut sections = three_days();
    sections.expand_all();
    let effects = sections.collapse_all();
    assert_eq!(effects.len(), 3);
    assert!(effects.iter().all(|e| matches!(e, Effect::SetSectionExpanded { expanded: false, .. })));
    assert!(expanded_ids(&sections).is_empty());
}
