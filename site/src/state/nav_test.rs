use super::*;

fn sections() -> Vec<SectionBounds<'static>> {
    vec![
        SectionBounds { id: "hero", top: 0.0, height: 700.0 },
        SectionBounds { id: "about", top: 700.0, height: 700.0 },
    ]
}

#[test]
fn nav_state_default_highlights_hero() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
    assert!(state.is_active("hero"));
}

#[test]
fn on_scroll_updates_scrolled_and_active_section() {
    let mut state = NavState::default();
    state.on_scroll(650.0, &sections());
    assert!(state.scrolled);
    assert!(state.is_active("about"));
}

#[test]
fn on_scroll_keeps_previous_section_when_probe_misses() {
    let mut state = NavState::default();
    state.on_scroll(650.0, &sections());
    state.on_scroll(5000.0, &sections());
    assert!(state.is_active("about"));
}

#[test]
fn on_scroll_back_to_top_clears_scrolled() {
    let mut state = NavState::default();
    state.on_scroll(650.0, &sections());
    state.on_scroll(0.0, &sections());
    assert!(!state.scrolled);
    assert!(state.is_active("hero"));
}

#[test]
fn toggle_menu_flips() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn navigated_closes_menu_and_highlights_target() {
    let mut state = NavState { menu_open: true, ..NavState::default() };
    state.navigated("contact");
    assert!(!state.menu_open);
    assert!(state.is_active("contact"));
}
