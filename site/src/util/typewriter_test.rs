use super::*;

#[test]
fn typed_prefix_grows_by_characters() {
    assert_eq!(typed_prefix("hello", 0), "");
    assert_eq!(typed_prefix("hello", 3), "hel");
    assert_eq!(typed_prefix("hello", 5), "hello");
}

#[test]
fn typed_prefix_saturates_past_end() {
    assert_eq!(typed_prefix("hi", 10), "hi");
}

#[test]
fn typed_prefix_respects_multibyte_boundaries() {
    assert_eq!(typed_prefix("héllo ☀", 2), "hé");
    assert_eq!(typed_prefix("héllo ☀", 7), "héllo ☀");
}

#[test]
fn is_complete_counts_characters_not_bytes() {
    assert!(!is_complete("☀☾", 1));
    assert!(is_complete("☀☾", 2));
}
