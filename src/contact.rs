use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_MESSAGE_CHARS: usize = 10;
pub const SUCCESS_RESET_MS: u32 = 3_000;
pub const ERROR_RESET_MS: u32 = 4_000;

/// Form fields in document order; `ALL` drives which invalid field
/// receives focus after a failed submit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Subject => "contact-subject",
            Self::Message => "contact-message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValidationError {
    MissingField,
    InvalidEmailShape,
    MessageTooShort,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingField => "This field is required",
            Self::InvalidEmailShape => "Enter an email like name@example.com",
            Self::MessageTooShort => "Message must be at least 10 characters",
        }
    }
}

/// Only fields that currently fail validation appear as keys.
pub type ErrorMap = BTreeMap<ContactField, ValidationError>;

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            ok: false,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Delay after which the status falls back to `Idle`, for the two
    /// terminal display states only.
    pub fn reset_delay_ms(self) -> Option<u32> {
        match self {
            Self::Success => Some(SUCCESS_RESET_MS),
            Self::Error => Some(ERROR_RESET_MS),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// `local@domain.tld` shape: one `@`, non-empty local part, dotted domain
/// with no empty labels, no whitespace anywhere.
pub fn is_valid_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let mut labels = 0usize;
    for label in domain.split('.') {
        if label.is_empty() {
            return false;
        }
        labels += 1;
    }

    labels >= 2
}

/// Recomputes the whole error map from scratch; a field absent from the
/// result currently passes.
pub fn validate(form: &ContactForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.name.trim().is_empty() {
        errors.insert(ContactField::Name, ValidationError::MissingField);
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert(ContactField::Email, ValidationError::MissingField);
    } else if !is_valid_email_shape(email) {
        errors.insert(ContactField::Email, ValidationError::InvalidEmailShape);
    }

    if form.subject.trim().is_empty() {
        errors.insert(ContactField::Subject, ValidationError::MissingField);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(ContactField::Message, ValidationError::MissingField);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(ContactField::Message, ValidationError::MessageTooShort);
    }

    errors
}

/// First failing field in document order, for focus after a failed submit.
pub fn first_invalid(errors: &ErrorMap) -> Option<ContactField> {
    ContactField::ALL
        .into_iter()
        .find(|field| errors.contains_key(field))
}

/// Applies a keystroke: the new value lands and the field's stale error
/// is cleared within the same step, never waiting for a re-submit.
pub fn apply_edit(
    form: &mut ContactForm,
    errors: &mut ErrorMap,
    field: ContactField,
    value: String,
) {
    form.set_field(field, value);
    errors.remove(&field);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Swaraj Kumar".to_string(),
            email: "user@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I would like to discuss a project.".to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate(&filled_form()).is_empty());
    }

    #[test]
    fn each_missing_field_is_flagged_alone() {
        for field in ContactField::ALL {
            let mut form = filled_form();
            form.set_field(field, String::new());

            let errors = validate(&form);
            assert_eq!(errors.len(), 1, "{field:?} should be the only error");
            assert_eq!(errors.get(&field), Some(&ValidationError::MissingField));
        }
    }

    #[test]
    fn email_shape_is_enforced() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert_eq!(
            validate(&form).get(&ContactField::Email),
            Some(&ValidationError::InvalidEmailShape)
        );

        form.email = "user@example.com".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn email_shape_rejects_degenerate_inputs() {
        for bad in [
            "user@",
            "@example.com",
            "user@example",
            "user@@example.com",
            "user@.com",
            "user@example..com",
            "us er@example.com",
        ] {
            assert!(!is_valid_email_shape(bad), "{bad} should fail");
        }

        for good in ["user@example.com", "a@b.co", "first.last@mail.example.org"] {
            assert!(is_valid_email_shape(good), "{good} should pass");
        }
    }

    #[test]
    fn message_length_boundary() {
        let mut form = filled_form();

        form.message = "123456789".to_string();
        assert_eq!(
            validate(&form).get(&ContactField::Message),
            Some(&ValidationError::MessageTooShort)
        );

        form.message = "1234567890".to_string();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::default();
        let mut errors = validate(&form);
        assert_eq!(errors.len(), 4);

        apply_edit(
            &mut form,
            &mut errors,
            ContactField::Email,
            "user@example.com".to_string(),
        );

        assert!(!errors.contains_key(&ContactField::Email));
        assert_eq!(errors.len(), 3);
        assert_eq!(form.email, "user@example.com");
    }

    #[test]
    fn first_invalid_follows_document_order() {
        let mut form = filled_form();
        form.subject = String::new();
        form.message = String::new();

        let errors = validate(&form);
        assert_eq!(first_invalid(&errors), Some(ContactField::Subject));

        form.email = "broken".to_string();
        let errors = validate(&form);
        assert_eq!(first_invalid(&errors), Some(ContactField::Email));

        assert_eq!(first_invalid(&ErrorMap::new()), None);
    }

    #[test]
    fn reset_delays_only_for_terminal_states() {
        assert_eq!(SubmitStatus::Success.reset_delay_ms(), Some(SUCCESS_RESET_MS));
        assert_eq!(SubmitStatus::Error.reset_delay_ms(), Some(ERROR_RESET_MS));
        assert_eq!(SubmitStatus::Idle.reset_delay_ms(), None);
        assert_eq!(SubmitStatus::Submitting.reset_delay_ms(), None);
    }
}
