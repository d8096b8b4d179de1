use super::*;

#[test]
fn copyright_names_owner_and_year() {
    assert_eq!(copyright_line(2031), "© 2031 Madi Manish Reddy. All rights reserved.");
}
