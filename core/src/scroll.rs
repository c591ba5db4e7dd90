pub const SECTION_LOOKAHEAD_PX: f64 = 120.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub scroll_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset_top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollReading {
    pub progress_pct: f64,
    pub current: Option<String>,
}

pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if !(range > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Last section in page order whose top is at or above `scroll_y + lookahead`.
/// Sections are not sorted; page order is the slice order.
pub fn current_section(sections: &[Section], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let y = scroll_y + lookahead;
    let mut current = None;
    for section in sections {
        if section.offset_top <= y {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Anchor target of a nav link: the href with its first `#` removed.
pub fn link_target(href: &str) -> String {
    href.replacen('#', "", 1)
}

/// No current section reads as the empty target, which a bare `#` link matches.
pub fn link_is_active(href: Option<&str>, current: Option<&str>) -> bool {
    href.is_some_and(|href| link_target(href) == current.unwrap_or_default())
}

pub fn read_scroll(metrics: ScrollMetrics, sections: &[Section], lookahead: f64) -> ScrollReading {
    ScrollReading {
        progress_pct: scroll_progress(
            metrics.scroll_top,
            metrics.scroll_height,
            metrics.client_height,
        ),
        current: current_section(sections, metrics.scroll_y, lookahead).map(str::to_string),
    }
}

pub fn progress_width(pct: f64) -> String {
    format!("{pct}%")
}
