use super::*;

#[test]
fn reveal_class_without_base() {
    assert_eq!(reveal_class("", FADE, false), "reveal reveal--fade");
}

#[test]
fn reveal_class_marks_revealed_state() {
    assert_eq!(reveal_class("card", SCALE, true), "card reveal is-revealed reveal--scale");
}
