//! Contact form model.
//!
//! There is no delivery backend: a valid submission is serialized and logged,
//! and the caller clears the form.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::core::encode_json;
use crate::i18n::Language;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name is required")]
    NameRequired,
    #[error("email address is invalid")]
    EmailInvalid,
    #[error("message is required")]
    MessageRequired,
}

impl ContactError {
    /// Key of the user-facing message in the contact table.
    pub fn message_key(self) -> &'static str {
        match self {
            ContactError::NameRequired => "error-name-required",
            ContactError::EmailInvalid => "error-email-invalid",
            ContactError::MessageRequired => "error-message-required",
        }
    }
}

#[derive(Serialize)]
struct Submission<'a> {
    #[serde(flatten)]
    form: &'a ContactForm,
    language: &'static str,
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// First failing field, checked in form order.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::NameRequired);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MessageRequired);
        }
        Ok(())
    }

    /// Validate and record the submission. Returns the logged payload.
    pub fn submit(&self, language: Language) -> Result<String, ContactError> {
        self.validate()?;
        let submission = Submission {
            form: self,
            language: language.code(),
        };
        let payload = encode_json(&submission, "contact submission").unwrap_or_default();
        info!(%payload, "contact form submitted");
        Ok(payload)
    }
}

fn looks_like_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !raw.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn reports_first_missing_field() {
        assert_eq!(ContactForm::default().validate(), Err(ContactError::NameRequired));

        let mut form = filled();
        form.message = "   ".into();
        assert_eq!(form.validate(), Err(ContactError::MessageRequired));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "ada", "ada@", "@example.com", "a@b@c", "ada @example.com"] {
            let form = ContactForm {
                email: email.into(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ContactError::EmailInvalid), "{email:?}");
        }
    }

    #[test]
    fn submission_payload_includes_language() {
        let payload = filled().submit(Language::Es).expect("valid form");
        let value: serde_json::Value = serde_json::from_str(&payload).expect("json");
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["language"], "es");
    }

    #[test]
    fn error_keys_point_at_contact_messages() {
        assert_eq!(ContactError::EmailInvalid.message_key(), "error-email-invalid");
        assert!(ContactForm::default().is_empty());
        assert!(!filled().is_empty());
    }
}
