use std::cell::RefCell;
use std::rc::Rc;

use folio_core::modal::is_dismiss_key;
use folio_core::{CardData, ModalState, ProjectDetails};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::bindings::{self, BindingError};
use crate::filter_view::PROJECT_CARD_SELECTOR;

const OPEN_CLASS: &str = "is-open";
const DISMISS_ATTR: &str = "data-close";

struct ModalParts {
    root: HtmlElement,
    close: Element,
    title: Element,
    desc: Element,
    tech: Element,
    link: Element,
    points: Element,
    badge: Element,
}

pub(crate) struct ModalView {
    document: Document,
    body: HtmlElement,
    parts: ModalParts,
    cards: Vec<HtmlElement>,
    state: RefCell<ModalState>,
    listeners: RefCell<Vec<EventListener>>,
}

fn card_data(card: &HtmlElement) -> CardData {
    let data = card.dataset();
    CardData {
        category: data.get("type"),
        title: data.get("title"),
        desc: data.get("desc"),
        tech: data.get("tech"),
        link: data.get("link"),
        points: data.get("points"),
    }
}

fn is_dismiss_target(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.get_attribute(DISMISS_ATTR))
        .is_some_and(|value| !value.is_empty())
}

impl ModalView {
    pub(crate) fn bind(document: &Document) -> Result<Rc<Self>, BindingError> {
        let body = document
            .body()
            .ok_or_else(|| BindingError::Missing("body".to_string()))?;
        let parts = ModalParts {
            root: bindings::by_id(document, "modal")?,
            close: bindings::by_id(document, "modalClose")?,
            title: bindings::by_id(document, "modalTitle")?,
            desc: bindings::by_id(document, "modalDesc")?,
            tech: bindings::by_id(document, "modalTech")?,
            link: bindings::by_id(document, "modalLink")?,
            points: bindings::by_id(document, "modalPoints")?,
            badge: bindings::by_id(document, "modalBadge")?,
        };
        let cards = bindings::query_all::<HtmlElement>(document, PROJECT_CARD_SELECTOR)?;
        let view = Rc::new(Self {
            document: document.clone(),
            body,
            parts,
            cards,
            state: RefCell::new(ModalState::Closed),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        for card in &self.cards {
            let view = Rc::clone(self);
            let card_for_click = card.clone();
            listeners.push(EventListener::new(card, "click", move |_| {
                view.open(card_data(&card_for_click).into());
            }));
        }

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.parts.close, "click", move |_| {
            view.close();
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.parts.root, "click", move |event: &Event| {
            if is_dismiss_target(event) {
                view.close();
            }
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_dismiss_key(&event.key()) {
                view.close();
            }
        }));

        self.listeners.borrow_mut().extend(listeners);
    }

    pub(crate) fn open(&self, details: ProjectDetails) {
        self.state.borrow_mut().open(details);
        self.render(&self.state.borrow());
    }

    pub(crate) fn close(&self) {
        self.state.borrow_mut().close();
        self.render(&self.state.borrow());
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn render(&self, state: &ModalState) {
        let parts = &self.parts;
        if let Some(content) = state.content() {
            parts.title.set_text_content(Some(&content.title));
            parts.desc.set_text_content(Some(&content.description));
            parts.tech.set_text_content(Some(&content.tech));
            let _ = parts.link.set_attribute("href", &content.link);
            parts.badge.set_text_content(Some(&content.badge));
            parts.points.set_inner_html("");
            for point in &content.points {
                let Ok(item) = self.document.create_element("li") else {
                    continue;
                };
                item.set_text_content(Some(point));
                let _ = parts.points.append_child(&item);
            }
        }
        let _ = parts
            .root
            .class_list()
            .toggle_with_force(OPEN_CLASS, state.is_open());
        let _ = parts.root.set_attribute("aria-hidden", state.aria_hidden());
        let _ = self
            .body
            .style()
            .set_property("overflow", state.body_overflow());
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}
