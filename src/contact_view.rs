use std::cell::RefCell;
use std::rc::Rc;

use folio_core::contact::{copy_address, mailto_href};
use folio_core::{
    ClipboardError, ClipboardWriter, ContactForm, FormSurface, FormTransport, SiteConfig,
    SubmissionState, TransportError,
};
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, FormData, Headers, HtmlButtonElement, HtmlFormElement, RequestInit, Response};

use crate::bindings::{self, js_err, BindingError};

/// Status line under the form. Every part is optional; a missing hint just
/// means nobody sees the message.
#[derive(Clone)]
pub(crate) struct FormElements {
    form: Option<HtmlFormElement>,
    hint: Option<Element>,
    send: Option<HtmlButtonElement>,
}

impl FormElements {
    pub(crate) fn bind(document: &Document) -> Self {
        Self {
            form: bindings::by_id(document, "contactForm").ok(),
            hint: bindings::by_id(document, "formHint").ok(),
            send: bindings::by_id(document, "sendBtn").ok(),
        }
    }

    #[cfg(test)]
    pub(crate) fn hint_text(&self) -> Option<String> {
        self.hint.as_ref().and_then(|hint| hint.text_content())
    }
}

impl FormSurface for FormElements {
    fn set_status(&self, text: &str) {
        if let Some(hint) = &self.hint {
            hint.set_text_content(Some(text));
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(send) = &self.send {
            send.set_disabled(!enabled);
        }
    }

    fn reset_fields(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }
}

/// Multipart POST of the live form fields through `fetch`.
pub(crate) struct FetchTransport {
    form: HtmlFormElement,
}

impl FormTransport for FetchTransport {
    async fn post_form(&self, endpoint: &str) -> Result<u16, TransportError> {
        let fail = |err: JsValue| TransportError(js_err(err));
        let window = web_sys::window().ok_or_else(|| TransportError("no window".to_string()))?;
        let body = FormData::new_with_form(&self.form).map_err(fail)?;
        let headers = Headers::new().map_err(fail)?;
        headers.set("Accept", "application/json").map_err(fail)?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&body);
        init.set_headers(&headers);
        let response = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
            .await
            .map_err(fail)?;
        let response: Response = response.dyn_into().map_err(fail)?;
        Ok(response.status())
    }
}

pub(crate) struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let blocked = |err: JsValue| ClipboardError::Blocked(js_err(err));
        let window = web_sys::window().ok_or_else(|| ClipboardError::Blocked("no window".to_string()))?;
        let navigator = Reflect::get(&window, &"navigator".into()).map_err(blocked)?;
        let clipboard = Reflect::get(&navigator, &"clipboard".into()).map_err(blocked)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Blocked("clipboard unavailable".to_string()));
        }
        let write = Reflect::get(&clipboard, &"writeText".into())
            .map_err(blocked)?
            .dyn_into::<Function>()
            .map_err(blocked)?;
        let promise = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(blocked)?
            .dyn_into::<Promise>()
            .map_err(blocked)?;
        JsFuture::from(promise).await.map_err(blocked)?;
        Ok(())
    }
}

pub(crate) struct ContactView {
    form: HtmlFormElement,
    contact: ContactForm<FetchTransport, FormElements>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ContactView {
    pub(crate) fn bind(document: &Document, config: &SiteConfig) -> Result<Rc<Self>, BindingError> {
        let form = bindings::by_id::<HtmlFormElement>(document, "contactForm")?;
        let surface = FormElements::bind(document);
        let transport = FetchTransport { form: form.clone() };
        let view = Rc::new(Self {
            form,
            contact: ContactForm::with_placeholder(transport, surface, &config.form_placeholder),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let view = Rc::clone(&view);
                spawn_local(async move {
                    view.submit().await;
                });
            },
        );
        self.listeners.borrow_mut().push(listener);
    }

    /// The raw `action` attribute; the resolved `form.action` property would
    /// fall back to the page URL when the attribute is missing.
    pub(crate) async fn submit(&self) -> SubmissionState {
        let action = self.form.get_attribute("action");
        let state = self.contact.submit(action.as_deref()).await;
        if let SubmissionState::Failed(err) = &state {
            gloo::console::warn!("contact: submission failed", format!("{err:?}"));
        }
        state
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &FormElements {
        self.contact.surface()
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}

pub(crate) struct CopyEmailView {
    button: Element,
    surface: FormElements,
    address: String,
    listeners: RefCell<Vec<EventListener>>,
}

impl CopyEmailView {
    pub(crate) fn bind(document: &Document, config: &SiteConfig) -> Result<Rc<Self>, BindingError> {
        let button = bindings::by_id::<Element>(document, "copyEmail")?;
        let view = Rc::new(Self {
            button,
            surface: FormElements::bind(document),
            address: config.contact_email.clone(),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new(&self.button, "click", move |_| {
            let view = Rc::clone(&view);
            spawn_local(async move {
                let _ = view.copy().await;
            });
        });
        self.listeners.borrow_mut().push(listener);
    }

    pub(crate) async fn copy(&self) -> Result<(), ClipboardError> {
        copy_address(&NavigatorClipboard, &self.surface, &self.address).await
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}

/// Writes the address into the `mailto:` link.
pub(crate) fn bind_email_link(document: &Document, config: &SiteConfig) -> Result<(), BindingError> {
    let link = bindings::by_id::<Element>(document, "emailLink")?;
    link.set_text_content(Some(&config.contact_email));
    let _ = link.set_attribute("href", &mailto_href(&config.contact_email));
    Ok(())
}
