use std::cell::RefCell;
use std::rc::Rc;

use folio_core::filter::{card_display, visible_cards};
use folio_core::{FilterBar, ProjectFilter};
use gloo::events::EventListener;
use web_sys::{Document, HtmlElement};

use crate::bindings::{self, BindingError};

pub(crate) const PROJECT_CARD_SELECTOR: &str = ".projects__grid .card";
const FILTER_BUTTON_SELECTOR: &str = ".fbtn";
const ACTIVE_CLASS: &str = "is-active";

pub(crate) struct FilterView {
    buttons: Vec<HtmlElement>,
    cards: Vec<HtmlElement>,
    bar: RefCell<FilterBar>,
    listeners: RefCell<Vec<EventListener>>,
}

impl FilterView {
    pub(crate) fn bind(document: &Document) -> Result<Rc<Self>, BindingError> {
        let buttons = bindings::query_some::<HtmlElement>(document, FILTER_BUTTON_SELECTOR)?;
        let cards = bindings::query_all::<HtmlElement>(document, PROJECT_CARD_SELECTOR)?;
        let initially_active = buttons
            .iter()
            .position(|button| button.class_list().contains(ACTIVE_CLASS));
        let view = Rc::new(Self {
            bar: RefCell::new(FilterBar::new(buttons.len(), initially_active)),
            buttons,
            cards,
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::with_capacity(self.buttons.len());
        for (index, button) in self.buttons.iter().enumerate() {
            let view = Rc::clone(self);
            listeners.push(EventListener::new(button, "click", move |_| {
                view.select(index);
            }));
        }
        self.listeners.borrow_mut().extend(listeners);
    }

    pub(crate) fn select(&self, index: usize) {
        if !self.bar.borrow_mut().select(index) {
            return;
        }
        self.render(&self.bar.borrow());
    }

    fn render(&self, bar: &FilterBar) {
        for (button, active) in self.buttons.iter().zip(bar.button_states()) {
            let _ = button.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }
        let Some(button) = self.buttons.get(bar.active()) else {
            return;
        };
        let filter = ProjectFilter::from_tag(button.dataset().get("filter").as_deref());
        let categories: Vec<Option<String>> = self
            .cards
            .iter()
            .map(|card| card.dataset().get("type"))
            .collect();
        let categories: Vec<Option<&str>> = categories.iter().map(Option::as_deref).collect();
        for (card, visible) in self.cards.iter().zip(visible_cards(&filter, &categories)) {
            let _ = card.style().set_property("display", card_display(visible));
        }
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}
