pub const FILTER_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    /// A button without a tag behaves like "all".
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some(FILTER_ALL) => ProjectFilter::All,
            Some(tag) => ProjectFilter::Category(tag.to_string()),
        }
    }

    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(tag) => category == Some(tag.as_str()),
        }
    }
}

pub fn visible_cards(filter: &ProjectFilter, categories: &[Option<&str>]) -> Vec<bool> {
    categories
        .iter()
        .map(|category| filter.shows(*category))
        .collect()
}

pub fn card_display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Button group with exactly one active member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBar {
    active: usize,
    len: usize,
}

impl FilterBar {
    pub fn new(len: usize, initially_active: Option<usize>) -> Self {
        let active = initially_active.filter(|index| *index < len).unwrap_or(0);
        Self { active, len }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn button_states(&self) -> Vec<bool> {
        (0..self.len).map(|index| index == self.active).collect()
    }
}
