use std::cell::RefCell;
use std::collections::HashMap;

use folio_core::PreferenceStore;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use web_sys::Storage;

const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

thread_local! {
    static PREFERENCE_CACHE: RefCell<HashMap<String, Option<String>>> = RefCell::new(HashMap::new());
}

/// `localStorage`-backed preferences. Reads are cached per key; writes go
/// through the cache and are dropped when storage refuses them.
#[derive(Clone, Copy, Default)]
pub(crate) struct LocalPreferenceStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        if let Some(cached) = PREFERENCE_CACHE.with(|cache| cache.borrow().get(key).cloned()) {
            return cached;
        }
        let value = local_storage().and_then(|storage| storage.get_item(key).ok().flatten());
        PREFERENCE_CACHE.with(|cache| {
            cache.borrow_mut().insert(key.to_string(), value.clone());
        });
        value
    }

    fn save(&self, key: &str, value: &str) {
        PREFERENCE_CACHE.with(|cache| {
            cache
                .borrow_mut()
                .insert(key.to_string(), Some(value.to_string()));
        });
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            gloo::console::warn!("preferences: write dropped", key.to_string());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) fn clear_cache() {
    PREFERENCE_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// `None` when the browser has no `matchMedia`.
pub(crate) fn prefers_light_scheme() -> Option<bool> {
    let window = web_sys::window()?;
    let match_media = Reflect::get(&window, &"matchMedia".into()).ok()?;
    let match_media = match_media.dyn_into::<Function>().ok()?;
    let query = match_media
        .call1(&window, &PREFERS_LIGHT_QUERY.into())
        .ok()?;
    Reflect::get(&query, &"matches".into())
        .ok()
        .and_then(|value| value.as_bool())
}
