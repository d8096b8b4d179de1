use super::*;

fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
    ContactDraft { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

#[test]
fn validate_trims_fields() {
    let msg = draft("  Ada ", " ada@example.com ", "\nhello\n").validate();
    assert_eq!(
        msg,
        Ok(ContactMessage {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "hello".to_owned(),
        })
    );
}

#[test]
fn validate_requires_every_field() {
    assert_eq!(draft("", "a@b.c", "hi").validate(), Err(MSG_MISSING_FIELDS));
    assert_eq!(draft("Ada", "  ", "hi").validate(), Err(MSG_MISSING_FIELDS));
    assert_eq!(draft("Ada", "a@b.c", "   ").validate(), Err(MSG_MISSING_FIELDS));
}

#[test]
fn validate_rejects_malformed_email() {
    for email in ["ada", "@example.com", "ada@", "ada@@example.com", "a da@example.com"] {
        assert_eq!(draft("Ada", email, "hi").validate(), Err(MSG_INVALID_EMAIL), "{email}");
    }
}

#[test]
fn submit_status_default_is_idle() {
    assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
    assert!(!SubmitStatus::Idle.is_sending());
    assert!(SubmitStatus::Sending.is_sending());
}

#[test]
fn submit_status_notice_only_after_outcome() {
    assert_eq!(SubmitStatus::Idle.notice(), None);
    assert_eq!(SubmitStatus::Sending.notice(), None);
    assert_eq!(SubmitStatus::Sent.notice(), Some((MSG_SENT, "contact-notice--success")));
    assert_eq!(
        SubmitStatus::Rejected(MSG_INVALID_EMAIL).notice(),
        Some((MSG_INVALID_EMAIL, "contact-notice--error"))
    );
}
