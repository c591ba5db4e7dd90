#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    ToggleClicked,
    LinkClicked,
    /// `inside` is true when the click landed in the panel or on the toggle.
    DocumentClicked { inside: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn handle(&mut self, event: NavEvent) -> bool {
        match event {
            NavEvent::ToggleClicked => {
                self.toggle();
            }
            NavEvent::LinkClicked | NavEvent::DocumentClicked { inside: false } => self.close(),
            NavEvent::DocumentClicked { inside: true } => {}
        }
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_mirrors_aria() {
        let mut nav = NavState::default();
        assert_eq!(nav.aria_expanded(), "false");
        assert!(nav.handle(NavEvent::ToggleClicked));
        assert_eq!(nav.aria_expanded(), "true");
        assert!(!nav.handle(NavEvent::ToggleClicked));
    }

    #[test]
    fn link_and_outside_clicks_close() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(!nav.handle(NavEvent::LinkClicked));

        nav.toggle();
        assert!(nav.handle(NavEvent::DocumentClicked { inside: true }));
        assert!(!nav.handle(NavEvent::DocumentClicked { inside: false }));
        assert!(!nav.handle(NavEvent::DocumentClicked { inside: false }));
    }
}
