//! Navigation bar state: mobile menu, scroll styling, and scroll-spy.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::scroll_spy::{self, SectionBounds};

/// Section highlighted before any scroll event arrives.
pub const INITIAL_SECTION: &str = "hero";

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    /// Whether the mobile menu is expanded.
    pub menu_open: bool,
    /// Whether the page has scrolled past the solid-navbar threshold.
    pub scrolled: bool,
    /// Section id currently highlighted in the nav.
    pub active_section: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self { menu_open: false, scrolled: false, active_section: INITIAL_SECTION.to_owned() }
    }
}

impl NavState {
    /// Apply a scroll event. The highlighted section only changes when the
    /// probe lands inside a measured section.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds<'_>]) {
        self.scrolled = scroll_spy::is_scrolled(scroll_y);
        if let Some(id) = scroll_spy::active_section(sections, scroll_y) {
            if self.active_section != id {
                id.clone_into(&mut self.active_section);
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Record navigation to `section` and collapse the mobile menu.
    pub fn navigated(&mut self, section: &str) {
        self.menu_open = false;
        section.clone_into(&mut self.active_section);
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section == section
    }
}
