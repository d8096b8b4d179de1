use super::*;

#[test]
fn header_class_reflects_scroll() {
    assert_eq!(header_class(false), "navbar");
    assert_eq!(header_class(true), "navbar navbar--scrolled");
}

#[test]
fn link_class_marks_active_link() {
    assert_eq!(link_class(true), "navbar__link navbar__link--active");
    assert_eq!(link_class(false), "navbar__link");
}

#[test]
fn menu_icon_switches_on_open() {
    assert_eq!(menu_icon(false), "☰");
    assert_eq!(menu_icon(true), "✕");
}
