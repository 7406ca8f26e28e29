use super::*;

use crate::util::storage::MemoryStore;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn controller() -> ThemeController {
    ThemeController::new(&ItineraryConfig::default())
}

fn stored(store: &MemoryStore) -> Option<&str> {
    store.raw("londonTheme")
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_toggled_alternates() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn theme_toggle_button_text() {
    assert_eq!(Theme::Dark.toggle_glyph(), "\u{2600}");
    assert_eq!(Theme::Light.toggle_glyph(), "\u{263E}");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
}

#[test]
fn parse_stored_accepts_json_and_bare_values() {
    assert_eq!(Theme::parse_stored("\"light\""), Some(Theme::Light));
    assert_eq!(Theme::parse_stored("\"dark\""), Some(Theme::Dark));
    assert_eq!(Theme::parse_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::parse_stored("dark"), Some(Theme::Dark));
}

#[test]
fn parse_stored_rejects_other_values() {
    assert_eq!(Theme::parse_stored("sepia"), None);
    assert_eq!(Theme::parse_stored("\"Dark\""), None);
    assert_eq!(Theme::parse_stored(""), None);
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn stored_preference_wins_over_os() {
    let theme = ThemeController::resolve_initial(Ok(Some("\"light\"".into())), Some(true));
    assert_eq!(theme, Theme::Light);
}

#[test]
fn os_signal_used_when_nothing_stored() {
    assert_eq!(ThemeController::resolve_initial(Ok(None), Some(true)), Theme::Dark);
    assert_eq!(ThemeController::resolve_initial(Ok(None), Some(false)), Theme::Light);
}

#[test]
fn missing_os_signal_defaults_to_dark() {
    assert_eq!(ThemeController::resolve_initial(Ok(None), None), Theme::Dark);
}

#[test]
fn read_failure_forces_dark() {
    assert_eq!(ThemeController::resolve_initial(Err(StorageError::Unavailable), Some(false)), Theme::Dark);
}

#[test]
fn unknown_stored_value_falls_back_to_os() {
    assert_eq!(ThemeController::resolve_initial(Ok(Some("sepia".into())), Some(false)), Theme::Light);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn initialize_persists_inferred_theme() {
    let mut storage = Storage::new(MemoryStore::new());
    let mut themes = controller();
    let effect = themes.initialize(&mut storage, Some(false));
    assert_eq!(themes.current(), Theme::Light);
    assert_eq!(stored(storage.store()), Some("\"light\""));
    assert!(matches!(effect, Effect::ApplyTheme(ThemeView { theme: Theme::Light, .. })));
}

#[test]
fn initialize_with_broken_storage_is_dark() {
    let mut storage = Storage::new(BrokenStore);
    let mut themes = controller();
    let effect = themes.initialize(&mut storage, Some(false));
    assert_eq!(themes.current(), Theme::Dark);
    assert!(matches!(effect, Effect::ApplyTheme(ThemeView { theme: Theme::Dark, .. })));
}

#[test]
fn toggle_alternates_dark_light_dark() {
    let mut storage = Storage::new(MemoryStore::new());
    let mut themes = controller();
    themes.apply(Theme::Dark, &mut storage);

    themes.toggle(&mut storage);
    assert_eq!(themes.current(), Theme::Light);
    assert_eq!(stored(storage.store()), Some("\"light\""));

    themes.toggle(&mut storage);
    assert_eq!(themes.current(), Theme::Dark);
    assert_eq!(stored(storage.store()), Some("\"dark\""));
}

#[test]
fn double_apply_is_idempotent() {
    let mut storage = Storage::new(MemoryStore::new());
    let mut themes = controller();
    let first = themes.apply(Theme::Light, &mut storage);
    let after_first = storage.store().clone();
    let second = themes.apply(Theme::Light, &mut storage);
    assert_eq!(first, second);
    assert_eq!(themes.current(), Theme::Light);
    assert_eq!(storage.store(), &after_first);
}

#[test]
fn view_uses_configured_chrome_colors() {
    let config = ItineraryConfig {
        dark_chrome_color: "#000000".into(),
        light_chrome_color: "#fafafa".into(),
        ..ItineraryConfig::default()
    };
    let mut storage = Storage::new(MemoryStore::new());
    let mut themes = ThemeController::new(&config);

    themes.apply(Theme::Dark, &mut storage);
    assert_eq!(themes.view().chrome_color, "#000000");
    themes.apply(Theme::Light, &mut storage);
    assert_eq!(themes.view().chrome_color, "#fafafa");
}

#[test]
fn default_chrome_colors() {
    let mut storage = Storage::new(MemoryStore::new());
    let mut themes = controller();
    themes.apply(Theme::Dark, &mut storage);
    assert_eq!(themes.view().chrome_color, "#1c1e26");
    themes.apply(Theme::Light, &mut storage);
    assert_eq!(themes.view().chrome_color, "#ffffff");
}

#[test]
fn persisted_theme_survives_reload() {
    let mut storage = Storage::new(MemoryStore::new());
    let mut themes = controller();
    themes.apply(Theme::Light, &mut storage);

    let mut reloaded = controller();
    reloaded.initialize(&mut storage, Some(true));
    assert_eq!(reloaded.current(), Theme::Light);
}
