use std::cell::RefCell;
use std::rc::Rc;

use folio_core::SiteConfig;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, PageTransitionEvent, Window};

use crate::app_runtime;
use crate::bindings::{self, FeatureReport};
use crate::contact_view::{self, ContactView, CopyEmailView};
use crate::extras_view::{self, DownloadView};
use crate::filter_view::FilterView;
use crate::modal_view::ModalView;
use crate::nav_view::NavView;
use crate::reveal_view::RevealView;
use crate::scroll_view::ScrollView;
use crate::theme_view::{self, ThemeView};
use crate::tilt_view::TiltView;
use crate::typing_view::TypingView;

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

/// Everything wired onto the document. Each feature is bound once at startup;
/// a feature whose markup is missing stays `None` and is listed in `report`.
pub(crate) struct Page {
    pub(crate) report: FeatureReport,
    pub(crate) theme: Option<Rc<ThemeView>>,
    pub(crate) nav: Option<Rc<NavView>>,
    pub(crate) scroll: Option<Rc<ScrollView>>,
    pub(crate) reveal: Option<Rc<RevealView>>,
    pub(crate) typing: Option<Rc<TypingView>>,
    pub(crate) filter: Option<Rc<FilterView>>,
    pub(crate) modal: Option<Rc<ModalView>>,
    pub(crate) contact: Option<Rc<ContactView>>,
    pub(crate) copy_email: Option<Rc<CopyEmailView>>,
    pub(crate) tilt: Option<Rc<TiltView>>,
    pub(crate) download: Option<Rc<DownloadView>>,
    lifecycle: Vec<EventListener>,
}

impl Page {
    pub(crate) fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Self {
        let mut report = FeatureReport::default();

        report.record("theme", theme_view::apply_initial_theme(document, config));
        let theme = report.record("theme toggle", ThemeView::bind(document, config));
        let nav = report.record("navigation", NavView::bind(document));
        let progress = report.record(
            "scroll progress",
            bindings::by_id::<HtmlElement>(document, "progress"),
        );
        let scroll = report.record(
            "scroll tracking",
            ScrollView::bind(window, document, config, progress),
        );
        let reveal = report.record("reveal", RevealView::bind(document, config));
        let typing = report
            .record("typing", TypingView::bind(document, config))
            .flatten();
        if let Some(typing) = &typing {
            typing.start();
        }
        let filter = report.record("project filter", FilterView::bind(document));
        let modal = report.record("project modal", ModalView::bind(document));
        let contact = report.record("contact form", ContactView::bind(document, config));
        let copy_email = report.record("copy email", CopyEmailView::bind(document, config));
        report.record("email link", contact_view::bind_email_link(document, config));
        let download = report.record("resume download", DownloadView::bind(window, document, config));
        report.record("footer year", extras_view::stamp_footer_year(document));
        let tilt = report.record("card tilt", TiltView::bind(document, config));

        Self {
            report,
            theme,
            nav,
            scroll,
            reveal,
            typing,
            filter,
            modal,
            contact,
            copy_email,
            tilt,
            download,
            lifecycle: Vec::new(),
        }
    }

    /// Stops timers and drops every listener so nothing keeps the views alive.
    pub(crate) fn teardown(&self) {
        if let Some(typing) = &self.typing {
            typing.stop();
        }
        if let Some(view) = &self.theme {
            view.detach();
        }
        if let Some(view) = &self.nav {
            view.detach();
        }
        if let Some(view) = &self.scroll {
            view.detach();
        }
        if let Some(view) = &self.reveal {
            view.detach();
        }
        if let Some(view) = &self.filter {
            view.detach();
        }
        if let Some(view) = &self.modal {
            view.detach();
        }
        if let Some(view) = &self.contact {
            view.detach();
        }
        if let Some(view) = &self.copy_email {
            view.detach();
        }
        if let Some(view) = &self.tilt {
            view.detach();
        }
        if let Some(view) = &self.download {
            view.detach();
        }
    }

    fn suspend(&self) {
        if let Some(typing) = &self.typing {
            typing.stop();
        }
    }

    fn resume(&self) {
        if let Some(typing) = &self.typing {
            typing.start();
        }
    }
}

fn persisted(event: &Event) -> bool {
    event
        .dyn_ref::<PageTransitionEvent>()
        .is_some_and(PageTransitionEvent::persisted)
}

/// A page kept in the back/forward cache only pauses; anything else is torn
/// down for good.
fn install_lifecycle(window: &Window) -> Vec<EventListener> {
    let hide = EventListener::new(window, "pagehide", |event: &Event| {
        if persisted(event) {
            with_page(Page::suspend);
        } else {
            teardown();
        }
    });
    let show = EventListener::new(window, "pageshow", |event: &Event| {
        if persisted(event) {
            with_page(Page::resume);
        }
    });
    vec![hide, show]
}

fn with_page(action: impl FnOnce(&Page)) {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow().as_ref() {
            action(page);
        }
    });
}

pub(crate) fn teardown() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(page) = page {
        page.teardown();
        gloo::console::log!("folio: torn down");
    }
}

pub(crate) fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let config = app_runtime::site_config();
        app_runtime::set_site_config(config.clone());

        let mut page = Page::mount(&window, &document, &config);
        page.lifecycle = install_lifecycle(&window);
        let disabled: Vec<String> = page
            .report
            .disabled()
            .map(|(feature, reason)| format!("{feature}: {reason}"))
            .collect();
        gloo::console::log!(
            "folio: ready",
            page.report.enabled_count(),
            disabled.join("; ")
        );
        PAGE.with(|slot| {
            *slot.borrow_mut() = Some(page);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("folio only runs in a browser (wasm32 target)");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::persisted_store;
    use folio_core::Theme;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE_MARKUP: &str = r##"
        <div id="progress"></div>
        <button id="themeToggle">theme</button>
        <button id="navToggle" aria-expanded="false">menu</button>
        <ul id="navList">
          <li><a class="nav__link" href="#about">About</a></li>
          <li><a class="nav__link" href="#projects">Projects</a></li>
        </ul>
        <section id="about" class="reveal"><span id="typing" data-words='["Rust","Wasm"]'></span></section>
        <section id="projects" class="reveal">
          <button class="fbtn is-active" data-filter="all">All</button>
          <button class="fbtn" data-filter="ui">UI</button>
          <div class="projects__grid">
            <article class="card" data-type="wp" data-title="Shop" data-tech="PHP"></article>
            <article class="card" data-type="ui" data-title="Kit" data-desc="Components"
              data-link="https://example.com/kit" data-points='["tokens","themes"]'></article>
          </div>
        </section>
        <div id="modal" aria-hidden="true">
          <div data-close="1"></div>
          <button id="modalClose">x</button>
          <span id="modalBadge"></span><h3 id="modalTitle"></h3><p id="modalDesc"></p>
          <span id="modalTech"></span><a id="modalLink"></a><ul id="modalPoints"></ul>
        </div>
        <form id="contactForm" action="https://formspree.io/f/PUT_YOUR_FORM_ID_HERE">
          <button id="sendBtn" type="submit">send</button>
        </form>
        <p id="formHint"></p>
        <button id="copyEmail">copy</button>
        <a id="emailLink"></a>
        <a id="downloadBtn" href="resume.pdf">cv</a>
        <span id="year"></span>
    "##;

    fn fixture(markup: &str) -> (Window, Document) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        document.body().unwrap().set_inner_html(markup);
        (window, document)
    }

    fn html(document: &Document, id: &str) -> HtmlElement {
        document.get_element_by_id(id).unwrap().dyn_into().unwrap()
    }

    fn cards(document: &Document) -> Vec<HtmlElement> {
        bindings::query_all(document, ".projects__grid .card").unwrap()
    }

    #[wasm_bindgen_test]
    fn full_markup_enables_every_feature() {
        let (window, document) = fixture(PAGE_MARKUP);
        let page = Page::mount(&window, &document, &SiteConfig::default());

        assert_eq!(page.report.disabled().count(), 0);
        assert!(page.typing.as_ref().is_some_and(|typing| typing.is_running()));
        assert_eq!(
            html(&document, "emailLink").get_attribute("href").as_deref(),
            Some("mailto:msxaladzegiorgi87@gmail.com")
        );
        assert_eq!(html(&document, "year").text_content().map(|year| year.len()), Some(4));

        page.teardown();
        assert!(!page.typing.as_ref().is_some_and(|typing| typing.is_running()));
    }

    #[wasm_bindgen_test]
    fn missing_markup_only_disables_its_feature() {
        let (window, document) = fixture(r#"<button id="themeToggle">theme</button>"#);
        let page = Page::mount(&window, &document, &SiteConfig::default());

        assert!(page.report.is_enabled("theme toggle"));
        assert!(!page.report.is_enabled("project modal"));
        assert!(!page.report.is_enabled("contact form"));
        assert!(page.modal.is_none());
        assert!(page.typing.is_none());
        page.teardown();
    }

    #[wasm_bindgen_test]
    fn filter_button_hides_other_categories() {
        let (window, document) = fixture(PAGE_MARKUP);
        let page = Page::mount(&window, &document, &SiteConfig::default());
        let buttons: Vec<HtmlElement> = bindings::query_all(&document, ".fbtn").unwrap();

        buttons[1].click();
        let displays: Vec<String> = cards(&document)
            .iter()
            .map(|card| card.style().get_property_value("display").unwrap())
            .collect();
        assert_eq!(displays, vec!["none", "block"]);
        assert!(!buttons[0].class_list().contains("is-active"));
        assert!(buttons[1].class_list().contains("is-active"));

        buttons[0].click();
        assert!(cards(&document)
            .iter()
            .all(|card| card.style().get_property_value("display").unwrap() == "block"));
        page.teardown();
    }

    #[wasm_bindgen_test]
    fn card_click_opens_modal_and_close_button_hides_it() {
        let (window, document) = fixture(PAGE_MARKUP);
        let page = Page::mount(&window, &document, &SiteConfig::default());
        let modal = html(&document, "modal");
        let body = document.body().unwrap();

        cards(&document)[1].click();
        assert!(page.modal.as_ref().is_some_and(|modal| modal.is_open()));
        assert_eq!(html(&document, "modalTitle").text_content().as_deref(), Some("Kit"));
        assert_eq!(html(&document, "modalBadge").text_content().as_deref(), Some("UI"));
        assert_eq!(html(&document, "modalTech").text_content().as_deref(), Some("—"));
        assert_eq!(html(&document, "modalPoints").child_element_count(), 2);
        assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("false"));
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

        html(&document, "modalClose").click();
        assert!(!modal.class_list().contains("is-open"));
        assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("true"));
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
        page.teardown();
    }

    #[wasm_bindgen_test]
    fn nav_link_closes_open_menu() {
        let (window, document) = fixture(PAGE_MARKUP);
        let page = Page::mount(&window, &document, &SiteConfig::default());
        let toggle = html(&document, "navToggle");

        toggle.click();
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert!(html(&document, "navList").class_list().contains("is-open"));
        assert!(page.nav.as_ref().is_some_and(|nav| nav.is_open()));

        let links: Vec<HtmlElement> = bindings::query_all(&document, ".nav__link").unwrap();
        links[0].click();
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
        page.teardown();
    }

    #[wasm_bindgen_test]
    fn theme_toggle_flips_and_persists() {
        let (window, document) = fixture(PAGE_MARKUP);
        let storage = window.local_storage().unwrap().unwrap();
        storage.set_item("theme", "dark").unwrap();
        persisted_store::clear_cache();
        let root = document.document_element().unwrap();

        let page = Page::mount(&window, &document, &SiteConfig::default());
        assert_eq!(root.get_attribute("data-theme"), None);

        html(&document, "themeToggle").click();
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(page.theme.as_ref().map(|theme| theme.current()), Some(Theme::Light));

        page.teardown();
        storage.remove_item("theme").unwrap();
        root.remove_attribute("data-theme").unwrap();
        persisted_store::clear_cache();
    }

    #[wasm_bindgen_test]
    fn detached_views_ignore_clicks() {
        let (window, document) = fixture(PAGE_MARKUP);
        let page = Page::mount(&window, &document, &SiteConfig::default());
        page.teardown();

        let toggle = html(&document, "navToggle");
        toggle.click();
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    }
}
