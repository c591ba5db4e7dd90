use folio_core::filter::{card_display, visible_cards};
use folio_core::modal::{DEFAULT_TECH, DEFAULT_TITLE};
use folio_core::{CardData, FilterBar, ModalState, ProjectDetails, ProjectFilter};

const CARD_TYPES: [Option<&str>; 4] = [Some("wp"), Some("ui"), Some("web"), Some("ui")];

#[test]
fn ui_filter_shows_second_and_fourth_cards() {
    let visible = visible_cards(&ProjectFilter::from_tag(Some("ui")), &CARD_TYPES);
    assert_eq!(visible, vec![false, true, false, true]);
    let displays: Vec<&str> = visible.into_iter().map(card_display).collect();
    assert_eq!(displays, vec!["none", "block", "none", "block"]);
}

#[test]
fn all_filter_shows_every_card() {
    let visible = visible_cards(&ProjectFilter::from_tag(Some("all")), &CARD_TYPES);
    assert_eq!(visible, vec![true; 4]);
}

#[test]
fn reapplying_a_filter_is_idempotent() {
    let filter = ProjectFilter::from_tag(Some("wp"));
    let first = visible_cards(&filter, &CARD_TYPES);
    let second = visible_cards(&filter, &CARD_TYPES);
    assert_eq!(first, second);
}

#[test]
fn clicking_buttons_moves_the_single_active_flag() {
    let mut bar = FilterBar::new(4, None);
    assert_eq!(bar.button_states(), vec![true, false, false, false]);
    bar.select(3);
    bar.select(3);
    assert_eq!(bar.button_states().iter().filter(|active| **active).count(), 1);
    assert_eq!(bar.active(), 3);
}

fn card(category: &str, title: &str, points: &str) -> CardData {
    CardData {
        category: Some(category.to_string()),
        title: Some(title.to_string()),
        desc: Some(format!("{title} description")),
        tech: Some("Rust, WebAssembly".to_string()),
        link: Some(format!("https://example.com/{title}")),
        points: Some(points.to_string()),
    }
}

#[test]
fn open_then_close_leaves_modal_closed_and_unlocked() {
    let mut modal = ModalState::default();
    modal.open(ProjectDetails {
        title: Some("X".to_string()),
        ..ProjectDetails::default()
    });
    assert!(modal.is_open());
    assert_eq!(modal.aria_hidden(), "false");
    assert_eq!(modal.body_overflow(), "hidden");
    let content = modal.content().expect("open");
    assert_eq!(content.title, "X");
    assert_eq!(content.tech, DEFAULT_TECH);

    assert!(modal.close());
    assert!(!modal.is_open());
    assert_eq!(modal.aria_hidden(), "true");
    assert_eq!(modal.body_overflow(), "");
    assert!(!modal.close());
}

#[test]
fn second_open_replaces_first_card_entirely() {
    let mut modal = ModalState::default();
    modal.open(card("wp", "shop", r#"["one","two","three"]"#).into());
    modal.open(CardData {
        category: Some("ui".to_string()),
        ..CardData::default()
    }
    .into());

    let content = modal.content().expect("open");
    assert_eq!(content.title, DEFAULT_TITLE);
    assert_eq!(content.badge, "UI");
    assert!(content.description.is_empty());
    assert!(content.points.is_empty());
    assert_eq!(content.link, "#");
}

#[test]
fn card_points_keep_their_order() {
    let mut modal = ModalState::default();
    modal.open(card("web", "blog", r#"["first","second"]"#).into());
    let content = modal.content().expect("open");
    assert_eq!(content.badge, "Web");
    assert_eq!(content.points, vec!["first", "second"]);
    assert_eq!(content.link, "https://example.com/blog");
}
