//! Contact form draft, validation, and simulated submission status.
//!
//! The form never leaves the browser: submission waits `SEND_DELAY_MS`,
//! reports success, and clears the notice after `NOTICE_TTL_MS`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const SEND_DELAY_MS: u32 = 1_500;
pub const NOTICE_TTL_MS: u32 = 5_000;

pub const MSG_MISSING_FIELDS: &str = "Please fill in your name, email, and message.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_SENT: &str = "Message sent successfully!";

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trimmed, validated message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Rejected(&'static str),
}

impl SubmitStatus {
    pub fn is_sending(self) -> bool {
        self == Self::Sending
    }

    /// Notice text and CSS modifier shown under the form, if any.
    pub fn notice(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Idle | Self::Sending => None,
            Self::Sent => Some((MSG_SENT, "contact-notice--success")),
            Self::Rejected(reason) => Some((reason, "contact-notice--error")),
        }
    }
}

impl ContactDraft {
    /// Validate the draft into a sendable message.
    ///
    /// # Errors
    ///
    /// Returns the user-facing reason when a field is blank or the email is
    /// not of the form `local@domain`.
    pub fn validate(&self) -> Result<ContactMessage, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(MSG_MISSING_FIELDS);
        }
        if !is_plausible_email(email) {
            return Err(MSG_INVALID_EMAIL);
        }
        Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
