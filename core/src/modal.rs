use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "Project";
pub const DEFAULT_TECH: &str = "—";
pub const DEFAULT_LINK: &str = "#";
pub const DEFAULT_BADGE: &str = "Project";
pub const DISMISS_KEY: &str = "Escape";

/// Detail payload for the modal. Every field is optional; empty strings count
/// as missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectDetails {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub tech: Option<String>,
    pub link: Option<String>,
    pub badge: Option<String>,
    pub points: Vec<String>,
}

/// Raw data attributes of a project card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardData {
    pub category: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub tech: Option<String>,
    pub link: Option<String>,
    pub points: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub link: String,
    pub badge: String,
    pub points: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContent),
}

pub fn badge_label(category: Option<&str>) -> &'static str {
    match category {
        Some("wp") => "WordPress",
        Some("ui") => "UI",
        _ => "Web",
    }
}

pub fn parse_points(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .unwrap_or_default()
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == DISMISS_KEY
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl From<CardData> for ProjectDetails {
    fn from(card: CardData) -> Self {
        Self {
            badge: Some(badge_label(card.category.as_deref()).to_string()),
            title: card.title,
            desc: card.desc,
            tech: card.tech,
            link: card.link,
            points: parse_points(card.points.as_deref()),
        }
    }
}

impl From<ProjectDetails> for ModalContent {
    fn from(details: ProjectDetails) -> Self {
        Self {
            title: or_default(details.title, DEFAULT_TITLE),
            description: or_default(details.desc, ""),
            tech: or_default(details.tech, DEFAULT_TECH),
            link: or_default(details.link, DEFAULT_LINK),
            badge: or_default(details.badge, DEFAULT_BADGE),
            points: details.points,
        }
    }
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn content(&self) -> Option<&ModalContent> {
        match self {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }

    /// Replaces whatever is showing; there is no stacking.
    pub fn open(&mut self, details: ProjectDetails) {
        *self = ModalState::Open(details.into());
    }

    /// Returns whether the modal was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = ModalState::Closed;
        was_open
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            ""
        }
    }
}
