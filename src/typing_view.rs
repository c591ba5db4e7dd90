use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::typing::parse_phrases;
use folio_core::{SiteConfig, TypingMachine};
use gloo::timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::bindings::{self, BindingError};

/// Drives the typing machine one frame per timeout. Dropping the pending
/// `Timeout` cancels the loop, so `stop` is deterministic.
pub(crate) struct TypingView {
    element: HtmlElement,
    machine: RefCell<TypingMachine>,
    timer: RefCell<Option<Timeout>>,
}

impl TypingView {
    /// `Ok(None)` when the element is present but has no phrases.
    pub(crate) fn bind(document: &Document, config: &SiteConfig) -> Result<Option<Rc<Self>>, BindingError> {
        let element = bindings::by_id::<HtmlElement>(document, "typing")?;
        let phrases = parse_phrases(element.dataset().get("words").as_deref());
        let Some(machine) = TypingMachine::new(phrases, config.typing) else {
            gloo::console::log!("typing: no phrases, animation idle");
            return Ok(None);
        };
        Ok(Some(Rc::new(Self {
            element,
            machine: RefCell::new(machine),
            timer: RefCell::new(None),
        })))
    }

    pub(crate) fn start(self: &Rc<Self>) {
        if self.is_running() {
            return;
        }
        self.tick();
    }

    fn tick(self: &Rc<Self>) {
        let frame = self.machine.borrow_mut().next_frame();
        self.element.set_text_content(Some(&frame.text));
        let weak: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(frame.delay_ms, move || {
            if let Some(view) = weak.upgrade() {
                view.tick();
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    pub(crate) fn stop(&self) {
        self.timer.borrow_mut().take();
    }

    pub(crate) fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }
}
