use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

#[derive(Debug, thiserror::Error)]
pub(crate) enum BindingError {
    #[error("no element matches `{0}`")]
    Missing(String),
    #[error("`{selector}` is not a {expected}")]
    WrongType {
        selector: String,
        expected: &'static str,
    },
    #[error("selector `{0}` was rejected")]
    BadSelector(String),
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, BindingError> {
    let selector = format!("#{id}");
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| BindingError::Missing(selector.clone()))?;
    element
        .dyn_into::<T>()
        .map_err(|_| BindingError::WrongType {
            selector,
            expected: short_type_name::<T>(),
        })
}

pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, BindingError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| BindingError::BadSelector(selector.to_string()))?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        let element = node.dyn_into::<T>().map_err(|_| BindingError::WrongType {
            selector: selector.to_string(),
            expected: short_type_name::<T>(),
        })?;
        elements.push(element);
    }
    Ok(elements)
}

/// Like `query_all`, but an empty match is a missing-markup error.
pub(crate) fn query_some<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, BindingError> {
    let elements = query_all(document, selector)?;
    if elements.is_empty() {
        return Err(BindingError::Missing(selector.to_string()));
    }
    Ok(elements)
}

pub(crate) fn root_element(document: &Document) -> Result<Element, BindingError> {
    document
        .document_element()
        .ok_or_else(|| BindingError::Missing(":root".to_string()))
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        if let Some(message) = error.message().as_string() {
            return message;
        }
    }
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

/// Which page features were wired at startup. A feature whose markup is
/// missing stays off and keeps the reason.
#[derive(Default)]
pub(crate) struct FeatureReport {
    entries: Vec<(&'static str, Option<String>)>,
}

impl FeatureReport {
    pub(crate) fn record<T>(
        &mut self,
        feature: &'static str,
        result: Result<T, BindingError>,
    ) -> Option<T> {
        match result {
            Ok(value) => {
                self.entries.push((feature, None));
                Some(value)
            }
            Err(err) => {
                let reason = err.to_string();
                gloo::console::warn!("bindings: feature disabled", feature, reason.clone());
                self.entries.push((feature, Some(reason)));
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_enabled(&self, feature: &str) -> bool {
        self.entries
            .iter()
            .any(|(name, reason)| *name == feature && reason.is_none())
    }

    pub(crate) fn disabled(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .filter_map(|(name, reason)| reason.as_deref().map(|reason| (*name, reason)))
    }

    pub(crate) fn enabled_count(&self) -> usize {
        self.entries.iter().filter(|(_, reason)| reason.is_none()).count()
    }
}
