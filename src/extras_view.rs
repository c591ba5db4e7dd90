use std::cell::RefCell;
use std::rc::Rc;

use folio_core::extras::{download_request, footer_year, DownloadRequest};
use folio_core::SiteConfig;
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Date;
use web_sys::{Document, Element, Window};

use crate::bindings::{self, BindingError};

pub(crate) struct DownloadView {
    window: Window,
    button: Element,
    request: DownloadRequest,
    listeners: RefCell<Vec<EventListener>>,
}

impl DownloadView {
    pub(crate) fn bind(window: &Window, document: &Document, config: &SiteConfig) -> Result<Rc<Self>, BindingError> {
        let button = bindings::by_id::<Element>(document, "downloadBtn")?;
        let view = Rc::new(Self {
            window: window.clone(),
            button,
            request: download_request(&config.resume_file),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                view.open();
            },
        );
        self.listeners.borrow_mut().push(listener);
    }

    pub(crate) fn open(&self) {
        let request = &self.request;
        if let Err(err) = self.window.open_with_url_and_target_and_features(
            &request.url,
            request.target,
            request.features,
        ) {
            gloo::console::warn!("download: window.open failed", bindings::js_err(err));
        }
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}

pub(crate) fn stamp_footer_year(document: &Document) -> Result<(), BindingError> {
    let year = bindings::by_id::<Element>(document, "year")?;
    let full_year = Date::new_0().get_full_year();
    year.set_text_content(Some(&footer_year(full_year)));
    Ok(())
}
