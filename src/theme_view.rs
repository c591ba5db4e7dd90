use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{SiteConfig, Theme, ThemeController, ThemeSurface};
use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::bindings::{self, BindingError};
use crate::persisted_store::{self, LocalPreferenceStore};

const THEME_ATTR: &str = "data-theme";

/// Light mode is `data-theme="light"` on the root element; dark is the
/// attribute's absence.
pub(crate) struct DocumentTheme {
    root: Element,
}

impl DocumentTheme {
    pub(crate) fn new(root: Element) -> Self {
        Self { root }
    }
}

impl ThemeSurface for DocumentTheme {
    fn apply_theme(&self, theme: Theme) {
        let _ = match theme {
            Theme::Light => self.root.set_attribute(THEME_ATTR, Theme::Light.as_str()),
            Theme::Dark => self.root.remove_attribute(THEME_ATTR),
        };
    }

    fn applied_theme(&self) -> Theme {
        match self.root.get_attribute(THEME_ATTR).as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

pub(crate) type DocumentThemeController = ThemeController<LocalPreferenceStore, DocumentTheme>;

pub(crate) fn controller(document: &Document, config: &SiteConfig) -> Result<DocumentThemeController, BindingError> {
    let root = bindings::root_element(document)?;
    Ok(ThemeController::with_key(
        LocalPreferenceStore,
        DocumentTheme::new(root),
        &config.theme_key,
    ))
}

/// Runs before any toggle is bound so the page never paints in the wrong mode.
pub(crate) fn apply_initial_theme(document: &Document, config: &SiteConfig) -> Result<Theme, BindingError> {
    let controller = controller(document, config)?;
    let theme = controller.init_theme(persisted_store::prefers_light_scheme);
    gloo::console::log!("theme: applied", theme.as_str());
    Ok(theme)
}

pub(crate) struct ThemeView {
    controller: DocumentThemeController,
    toggle: Element,
    listeners: RefCell<Vec<EventListener>>,
}

impl ThemeView {
    pub(crate) fn bind(document: &Document, config: &SiteConfig) -> Result<Rc<Self>, BindingError> {
        let toggle = bindings::by_id::<Element>(document, "themeToggle")?;
        let view = Rc::new(Self {
            controller: controller(document, config)?,
            toggle,
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new(&self.toggle, "click", move |_| {
            view.controller.toggle();
        });
        self.listeners.borrow_mut().push(listener);
    }

    #[cfg(test)]
    pub(crate) fn current(&self) -> Theme {
        self.controller.current()
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}
