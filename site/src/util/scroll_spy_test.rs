use super::*;

fn layout() -> Vec<SectionBounds<'static>> {
    vec![
        SectionBounds { id: "hero", top: 0.0, height: 800.0 },
        SectionBounds { id: "about", top: 800.0, height: 600.0 },
        SectionBounds { id: "skills", top: 1400.0, height: 900.0 },
    ]
}

#[test]
fn is_scrolled_uses_strict_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(10.0));
    assert!(is_scrolled(10.5));
}

#[test]
fn active_section_at_top_is_first() {
    assert_eq!(active_section(&layout(), 0.0), Some("hero"));
}

#[test]
fn active_section_switches_before_section_top() {
    // 700 + 100 offset lands exactly on the start of `about`.
    assert_eq!(active_section(&layout(), 699.0), Some("hero"));
    assert_eq!(active_section(&layout(), 700.0), Some("about"));
}

#[test]
fn active_section_past_last_section_is_none() {
    assert_eq!(active_section(&layout(), 2300.0), None);
}

#[test]
fn active_section_prefers_later_section_on_overlap() {
    let sections = [
        SectionBounds { id: "a", top: 0.0, height: 1000.0 },
        SectionBounds { id: "b", top: 200.0, height: 300.0 },
    ];
    assert_eq!(active_section(&sections, 150.0), Some("b"));
}

#[test]
fn active_section_handles_empty_layout() {
    assert_eq!(active_section(&[], 500.0), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn dom_helpers_are_inert_without_browser() {
    assert_eq!(window_scroll_y(), 0.0);
    assert!(measure_sections(&["hero"]).is_empty());
    assert!(!scroll_to_section("hero"));
}
