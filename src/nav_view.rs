use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{NavEvent, NavState};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

use crate::bindings::{self, BindingError};

pub(crate) const NAV_LINK_SELECTOR: &str = ".nav__link";
const OPEN_CLASS: &str = "is-open";

pub(crate) struct NavView {
    document: Document,
    toggle: Element,
    panel: Element,
    links: Vec<Element>,
    state: RefCell<NavState>,
    listeners: RefCell<Vec<EventListener>>,
}

impl NavView {
    pub(crate) fn bind(document: &Document) -> Result<Rc<Self>, BindingError> {
        let toggle = bindings::by_id::<Element>(document, "navToggle")?;
        let panel = bindings::by_id::<Element>(document, "navList")?;
        let links = bindings::query_all::<Element>(document, NAV_LINK_SELECTOR)?;
        let state = NavState::default();
        let view = Rc::new(Self {
            document: document.clone(),
            toggle,
            panel,
            links,
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.toggle, "click", move |_| {
            view.dispatch(NavEvent::ToggleClicked);
        }));

        for link in &self.links {
            let view = Rc::clone(self);
            listeners.push(EventListener::new(link, "click", move |_| {
                view.dispatch(NavEvent::LinkClicked);
            }));
        }

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.document, "click", move |event: &Event| {
            let inside = view.contains_target(event);
            view.dispatch(NavEvent::DocumentClicked { inside });
        }));

        self.listeners.borrow_mut().extend(listeners);
    }

    fn contains_target(&self, event: &Event) -> bool {
        let Some(target) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
            return false;
        };
        self.panel.contains(Some(&target)) || self.toggle.contains(Some(&target))
    }

    fn dispatch(&self, event: NavEvent) {
        let state = {
            let mut state = self.state.borrow_mut();
            state.handle(event);
            *state
        };
        render(&self.panel, &self.toggle, &state);
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}

fn render(panel: &Element, toggle: &Element, state: &NavState) {
    let _ = panel
        .class_list()
        .toggle_with_force(OPEN_CLASS, state.is_open());
    let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
}
