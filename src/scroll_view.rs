use std::cell::RefCell;
use std::rc::Rc;

use folio_core::scroll::{self, progress_width};
use folio_core::{ScrollMetrics, Section, SiteConfig};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::bindings::{self, BindingError};
use crate::nav_view::NAV_LINK_SELECTOR;

const ACTIVE_CLASS: &str = "is-active";

pub(crate) struct ScrollView {
    window: Window,
    document: Document,
    root: Element,
    progress: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
    lookahead: f64,
    listeners: RefCell<Vec<EventListener>>,
}

impl ScrollView {
    /// `progress` is optional: without the bar the tracker still highlights
    /// nav links.
    pub(crate) fn bind(
        window: &Window,
        document: &Document,
        config: &SiteConfig,
        progress: Option<HtmlElement>,
    ) -> Result<Rc<Self>, BindingError> {
        let root = bindings::root_element(document)?;
        let links = bindings::query_all::<Element>(document, NAV_LINK_SELECTOR)?;
        let sections = config
            .sections
            .iter()
            .filter_map(|id| bindings::by_id::<HtmlElement>(document, id).ok())
            .collect::<Vec<_>>();
        if progress.is_none() && (sections.is_empty() || links.is_empty()) {
            return Err(BindingError::Missing(format!(
                "#progress or sections with {NAV_LINK_SELECTOR}"
            )));
        }
        let view = Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            root,
            progress,
            sections,
            links,
            lookahead: config.section_lookahead_px,
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        view.update();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.window,
            "scroll",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: true,
            },
            move |_| view.update(),
        );
        self.listeners.borrow_mut().push(listener);
    }

    fn metrics(&self) -> ScrollMetrics {
        let mut scroll_top = self.root.scroll_top();
        if scroll_top == 0 {
            if let Some(body) = self.document.body() {
                scroll_top = body.scroll_top();
            }
        }
        ScrollMetrics {
            scroll_top: scroll_top as f64,
            scroll_height: self.root.scroll_height() as f64,
            client_height: self.root.client_height() as f64,
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
        }
    }

    fn section_offsets(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|section| Section::new(section.id(), section.offset_top() as f64))
            .collect()
    }

    /// Recomputes everything from the live layout; nothing carries over
    /// between calls.
    pub(crate) fn update(&self) {
        let reading = scroll::read_scroll(self.metrics(), &self.section_offsets(), self.lookahead);
        if let Some(progress) = &self.progress {
            let _ = progress
                .style()
                .set_property("width", &progress_width(reading.progress_pct));
        }
        let current = reading.current.as_deref();
        for link in &self.links {
            let href = link.get_attribute("href");
            let active = scroll::link_is_active(href.as_deref(), current);
            let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}
