use std::cell::RefCell;
use std::rc::Rc;

use folio_core::tilt::tilt_at;
use folio_core::{CardBounds, SiteConfig, TiltCoefficients};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::bindings::{self, BindingError};

const CARD_SELECTOR: &str = ".card";

pub(crate) struct TiltView {
    cards: Vec<HtmlElement>,
    coefficients: TiltCoefficients,
    listeners: RefCell<Vec<EventListener>>,
}

impl TiltView {
    pub(crate) fn bind(document: &Document, config: &SiteConfig) -> Result<Rc<Self>, BindingError> {
        let cards = bindings::query_some::<HtmlElement>(document, CARD_SELECTOR)?;
        let view = Rc::new(Self {
            cards,
            coefficients: config.tilt,
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners();
        Ok(view)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::with_capacity(self.cards.len() * 2);
        for card in &self.cards {
            let view = Rc::clone(self);
            let target = card.clone();
            listeners.push(EventListener::new(card, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                view.track(&target, event.client_x() as f64, event.client_y() as f64);
            }));

            let target = card.clone();
            listeners.push(EventListener::new(card, "mouseleave", move |_| {
                reset(&target);
            }));
        }
        self.listeners.borrow_mut().extend(listeners);
    }

    pub(crate) fn track(&self, card: &HtmlElement, client_x: f64, client_y: f64) {
        let rect = card.get_bounding_client_rect();
        let bounds = CardBounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        let Some(tilt) = tilt_at(bounds, client_x, client_y, self.coefficients) else {
            return;
        };
        let style = card.style();
        let _ = style.set_property("--mx", &tilt.mx());
        let _ = style.set_property("--my", &tilt.my());
        let _ = style.set_property("transform", &tilt.transform(self.coefficients.lift_px));
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }
}

pub(crate) fn reset(card: &HtmlElement) {
    let style = card.style();
    let _ = style.set_property("transform", "");
    let _ = style.remove_property("--mx");
    let _ = style.remove_property("--my");
}
