use std::cell::RefCell;

use folio_core::SiteConfig;

pub(crate) const SITE_CONFIG_ID: &str = "site-config";

thread_local! {
    static SITE_CONFIG: RefCell<Option<SiteConfig>> = RefCell::new(None);
}

pub(crate) fn set_site_config(config: SiteConfig) {
    SITE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

pub(crate) fn site_config() -> SiteConfig {
    SITE_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(load_site_config)
}

/// Reads the optional `<script type="application/json" id="site-config">`
/// block. A missing block means defaults; a broken one is reported and
/// ignored.
pub(crate) fn load_site_config() -> SiteConfig {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return SiteConfig::default();
    };
    let Some(raw) = document
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("config: using defaults", err.to_string());
            SiteConfig::default()
        }
    }
}
