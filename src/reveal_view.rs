use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{RevealEntry, RevealOutcome, RevealTracker, SiteConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::bindings::{self, js_err, BindingError};

const REVEAL_SELECTOR: &str = ".reveal";
const VISIBLE_CLASS: &str = "is-visible";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub(crate) struct RevealView {
    elements: Vec<Element>,
    tracker: RefCell<RevealTracker>,
    observer: RefCell<Option<IntersectionObserver>>,
    callback: RefCell<Option<ObserverCallback>>,
}

impl RevealView {
    pub(crate) fn bind(document: &Document, config: &SiteConfig) -> Result<Rc<Self>, BindingError> {
        let elements = bindings::query_some::<Element>(document, REVEAL_SELECTOR)?;
        let view = Rc::new(Self {
            tracker: RefCell::new(RevealTracker::new(elements.len(), config.reveal_threshold)),
            elements,
            observer: RefCell::new(None),
            callback: RefCell::new(None),
        });
        if let Err(err) = view.observe_all() {
            gloo::console::warn!("reveal: no IntersectionObserver, showing everything", js_err(err));
            view.reveal_all();
        }
        Ok(view)
    }

    fn observe_all(self: &Rc<Self>) -> Result<(), JsValue> {
        let weak: Weak<Self> = Rc::downgrade(self);
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let Some(view) = weak.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    view.handle_entry(&entry, &observer);
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.tracker.borrow().threshold()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for element in &self.elements {
            observer.observe(element);
        }
        *self.observer.borrow_mut() = Some(observer);
        *self.callback.borrow_mut() = Some(callback);
        Ok(())
    }

    fn handle_entry(&self, entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
        let target = entry.target();
        let Some(index) = self.elements.iter().position(|element| *element == target) else {
            return;
        };
        let outcome = self.tracker.borrow_mut().observe(RevealEntry {
            index,
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        });
        if outcome == RevealOutcome::Reveal {
            let _ = target.class_list().add_1(VISIBLE_CLASS);
            observer.unobserve(&target);
        }
    }

    fn reveal_all(&self) {
        let mut tracker = self.tracker.borrow_mut();
        for (index, element) in self.elements.iter().enumerate() {
            let outcome = tracker.observe(RevealEntry {
                index,
                is_intersecting: true,
                ratio: 1.0,
            });
            if outcome == RevealOutcome::Reveal {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            }
        }
    }

    pub(crate) fn detach(&self) {
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.callback.borrow_mut().take();
    }
}
