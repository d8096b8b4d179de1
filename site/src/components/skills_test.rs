use super::*;

#[test]
fn stagger_delay_starts_at_one_step() {
    assert_eq!(stagger_delay_ms(0), 100);
    assert_eq!(stagger_delay_ms(5), 600);
}
