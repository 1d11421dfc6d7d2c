//! Contact message domain model and contact form validation.

use chrono::{DateTime, Utc};

use crate::model::contact::{ContactErrors, ContactForm};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const EMAIL_MAX: usize = 120;
const SUBJECT_MIN: usize = 2;
const SUBJECT_MAX: usize = 40;
const MESSAGE_MIN: usize = 10;

/// Message left through the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            timestamp: entity.timestamp,
        }
    }
}

/// Validated contact form contents ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMessageParam {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl CreateMessageParam {
    /// Validates a submitted contact form.
    ///
    /// Every field is checked so that all problems are reported at once. Values are
    /// stored as submitted; lengths count characters, not bytes.
    ///
    /// # Returns
    /// - `Ok(CreateMessageParam)` - All fields valid
    /// - `Err(ContactErrors)` - At least one field invalid, with a message per field
    pub fn from_form(form: &ContactForm) -> Result<Self, ContactErrors> {
        let errors = ContactErrors {
            form: None,
            name: check_length(&form.name, NAME_MIN, Some(NAME_MAX)),
            email: check_email(&form.email),
            subject: check_length(&form.subject, SUBJECT_MIN, Some(SUBJECT_MAX)),
            message: check_length(&form.message, MESSAGE_MIN, None),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: form.name.clone(),
            email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        })
    }
}

fn check_required(value: &str) -> Option<String> {
    value
        .trim()
        .is_empty()
        .then(|| "This field is required.".to_string())
}

fn check_length(value: &str, min: usize, max: Option<usize>) -> Option<String> {
    if let Some(err) = check_required(value) {
        return Some(err);
    }

    let len = value.chars().count();
    match max {
        Some(max) if len < min || len > max => Some(format!(
            "Field must be between {} and {} characters long.",
            min, max
        )),
        None if len < min => Some(format!("Field must be at least {} characters long.", min)),
        _ => None,
    }
}

fn check_email(value: &str) -> Option<String> {
    if let Some(err) = check_required(value) {
        return Some(err);
    }

    if value.chars().count() > EMAIL_MAX || !is_email_shaped(value) {
        return Some("Invalid email address.".to_string());
    }

    None
}

/// Shape check only: `local@domain.tld` with no whitespace and no empty labels.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I enjoyed your projects page.".to_string(),
            csrf_token: String::new(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let param = CreateMessageParam::from_form(&valid_form()).unwrap();

        assert_eq!(param.name, "Ada");
        assert_eq!(param.email, "ada@example.com");
        assert_eq!(param.subject, "Hello");
    }

    #[test]
    fn rejects_blank_fields() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..valid_form()
        };

        let errors = CreateMessageParam::from_form(&form).unwrap_err();

        assert_eq!(errors.name.as_deref(), Some("This field is required."));
        assert!(errors.email.is_none());
    }

    #[test]
    fn enforces_length_bounds() {
        let form = ContactForm {
            name: "A".to_string(),
            subject: "x".repeat(41),
            message: "too short".to_string(),
            ..valid_form()
        };

        let errors = CreateMessageParam::from_form(&form).unwrap_err();

        assert!(errors.name.is_some());
        assert!(errors.subject.is_some());
        assert_eq!(
            errors.message.as_deref(),
            Some("Field must be at least 10 characters long.")
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let form = ContactForm {
            name: "Zoë".to_string(),
            subject: "é".repeat(40),
            ..valid_form()
        };

        assert!(CreateMessageParam::from_form(&form).is_ok());
    }

    #[test]
    fn checks_email_shape() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "a da@example.com", "a@b@c.com"] {
            assert!(!is_email_shaped(email), "{email} should be rejected");
        }

        for email in ["ada@example.com", "ada.lovelace+site@mail.example.org"] {
            assert!(is_email_shaped(email), "{email} should be accepted");
        }
    }
}
