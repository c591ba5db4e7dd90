use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored preference first, then the system "prefers light" signal, then dark.
/// A stored value that is neither `light` nor `dark` counts as absent.
pub fn initial_theme(stored: Option<&str>, prefers_light: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    match prefers_light {
        Some(true) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Best-effort key-value storage. Writes never report failure.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Where the active theme becomes visible (the document root in a browser).
pub trait ThemeSurface {
    fn apply_theme(&self, theme: Theme);
    fn applied_theme(&self) -> Theme;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value)
    }
}

impl<D: ThemeSurface + ?Sized> ThemeSurface for &D {
    fn apply_theme(&self, theme: Theme) {
        (**self).apply_theme(theme)
    }

    fn applied_theme(&self) -> Theme {
        (**self).applied_theme()
    }
}

pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    key: String,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(store: S, surface: D) -> Self {
        Self::with_key(store, surface, THEME_KEY)
    }

    pub fn with_key(store: S, surface: D, key: &str) -> Self {
        Self {
            store,
            surface,
            key: key.to_string(),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.surface.apply_theme(theme);
        self.store.save(&self.key, theme.as_str());
    }

    /// `prefers_light` is only consulted when nothing usable is stored.
    pub fn init_theme<F>(&self, prefers_light: F) -> Theme
    where
        F: FnOnce() -> Option<bool>,
    {
        let stored = self.store.load(&self.key);
        let theme = match stored.as_deref().and_then(Theme::parse) {
            Some(theme) => theme,
            None => initial_theme(None, prefers_light()),
        };
        self.set_theme(theme);
        theme
    }

    pub fn toggle(&self) -> Theme {
        let next = self.surface.applied_theme().toggled();
        self.set_theme(next);
        next
    }

    pub fn current(&self) -> Theme {
        self.surface.applied_theme()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().toggled(), Theme::Light);
    }

    #[derive(Default)]
    struct FakeRoot {
        light: Cell<bool>,
    }

    impl ThemeSurface for FakeRoot {
        fn apply_theme(&self, theme: Theme) {
            self.light.set(theme == Theme::Light);
        }

        fn applied_theme(&self) -> Theme {
            if self.light.get() {
                Theme::Light
            } else {
                Theme::Dark
            }
        }
    }

    #[test]
    fn stored_value_wins_over_system_preference() {
        assert_eq!(initial_theme(Some("light"), Some(false)), Theme::Light);
        assert_eq!(initial_theme(Some("dark"), Some(true)), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_then_dark() {
        assert_eq!(initial_theme(None, Some(true)), Theme::Light);
        assert_eq!(initial_theme(None, Some(false)), Theme::Dark);
        assert_eq!(initial_theme(None, None), Theme::Dark);
        assert_eq!(initial_theme(Some("sepia"), Some(true)), Theme::Light);
    }

    #[test]
    fn init_skips_media_query_when_stored() {
        let store = MemoryStore::with_entry(THEME_KEY, "light");
        let root = FakeRoot::default();
        let controller = ThemeController::new(&store, &root);
        let theme = controller.init_theme(|| panic!("media query should not be read"));
        assert_eq!(theme, Theme::Light);
        assert_eq!(root.applied_theme(), Theme::Light);
    }

    #[test]
    fn init_persists_detected_theme() {
        let store = MemoryStore::new();
        let root = FakeRoot::default();
        let controller = ThemeController::new(&store, &root);
        controller.init_theme(|| Some(true));
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_twice_round_trips_and_persists() {
        for start in [Theme::Light, Theme::Dark] {
            let store = MemoryStore::new();
            let root = FakeRoot::default();
            let controller = ThemeController::new(&store, &root);
            controller.set_theme(start);

            let flipped = controller.toggle();
            assert_eq!(flipped, start.toggled());
            assert_eq!(store.load(THEME_KEY).as_deref(), Some(flipped.as_str()));

            let back = controller.toggle();
            assert_eq!(back, start);
            assert_eq!(root.applied_theme(), start);
            assert_eq!(store.load(THEME_KEY).as_deref(), Some(start.as_str()));
        }
    }
}
