use super::*;

#[test]
fn submit_label_reflects_sending() {
    assert_eq!(submit_label(SubmitStatus::Sending), "Sending...");
    assert_eq!(submit_label(SubmitStatus::Idle), "Send Message");
    assert_eq!(submit_label(SubmitStatus::Sent), "Send Message");
}
