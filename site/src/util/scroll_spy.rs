//! Scroll position helpers for the navigation bar.
//!
//! The pure functions decide which section is active; the hydrate-only
//! helpers measure sections and scroll to them.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// Page offset past which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

/// Probe offset below the viewport top, so a section activates slightly
/// before its heading reaches the navbar.
pub const SPY_OFFSET_PX: f64 = 100.0;

/// Document-relative vertical extent of one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds<'_> {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Section containing `scroll_y + SPY_OFFSET_PX`.
///
/// Sections are scanned last to first so the later section wins where two
/// overlap.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], scroll_y: f64) -> Option<&'a str> {
    let probe = scroll_y + SPY_OFFSET_PX;
    sections.iter().rev().find(|s| s.contains(probe)).map(|s| s.id)
}

/// Current vertical scroll offset of the window.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Measure the document-relative bounds of each section id present in the DOM.
pub fn measure_sections<'a>(ids: &[&'a str]) -> Vec<SectionBounds<'a>> {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let scroll_y = window_scroll_y();
        ids.iter()
            .filter_map(|&id| {
                let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
                Some(SectionBounds { id, top: rect.top() + scroll_y, height: rect.height() })
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Vec::new()
    }
}

/// Smooth-scroll the section with `id` into view. Returns whether it exists.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(section) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
