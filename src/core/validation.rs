//! Validation rules for the contact form fields
//!
//! Messages are hard-coded in Russian, matching the page copy.

use std::sync::LazyLock;

use regex::Regex;

/// Shown when a required field keyed `name` is empty
pub const MSG_NAME_REQUIRED: &str = "Пожалуйста, введите ваше имя";
/// Shown when a required field keyed `email` is empty
pub const MSG_EMAIL_REQUIRED: &str = "Пожалуйста, введите ваш email";
/// Shown when a required field keyed `message` is empty
pub const MSG_MESSAGE_REQUIRED: &str = "Пожалуйста, введите ваше сообщение";
/// Shown for any other empty required field
pub const MSG_FIELD_REQUIRED: &str = "Это поле обязательно для заполнения";
/// Shown when an email value does not match [`EMAIL_PATTERN`]
pub const MSG_INVALID_EMAIL: &str = "Пожалуйста, введите корректный email адрес";
/// Acknowledgment shown after a successful submission
pub const MSG_FORM_SUBMITTED: &str = "Форма успешно отправлена! (В демонстрационных целях)";

/// Local part, `@`, domain, `.`, top-level part; no whitespace anywhere
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Field validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Required field is empty after trimming
    #[error("{}", required_message(.field))]
    RequiredFieldEmpty { field: String },

    /// Email field holds a value that is not an email address
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmailFormat,
}

impl FieldError {
    /// Localized message displayed next to the field
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::RequiredFieldEmpty { field } => required_message(field),
            FieldError::InvalidEmailFormat => MSG_INVALID_EMAIL,
        }
    }
}

/// Message for an empty required field, keyed by field name or id
pub fn required_message(field: &str) -> &'static str {
    match field {
        "name" => MSG_NAME_REQUIRED,
        "email" => MSG_EMAIL_REQUIRED,
        "message" => MSG_MESSAGE_REQUIRED,
        _ => MSG_FIELD_REQUIRED,
    }
}

/// Check a value against [`EMAIL_PATTERN`]. The value is not trimmed.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// What the validator needs to know about a field besides its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules<'a> {
    /// Field `name`, or its `id` when the name is empty
    pub key: &'a str,
    pub required: bool,
    /// Whether the field is an `<input type="email">`
    pub is_email: bool,
}

impl<'a> FieldRules<'a> {
    /// Build rules from raw field attributes
    pub fn new(name: &'a str, id: &'a str, input_type: &str, required: bool) -> Self {
        Self {
            key: if name.is_empty() { id } else { name },
            required,
            is_email: input_type.eq_ignore_ascii_case("email"),
        }
    }
}

/// Validate a single field value. Whitespace around the value is ignored.
pub fn validate_field_value(rules: &FieldRules<'_>, value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if rules.required && value.is_empty() {
        return Err(FieldError::RequiredFieldEmpty {
            field: rules.key.to_string(),
        });
    }

    if rules.is_email && !value.is_empty() && !validate_email(value) {
        return Err(FieldError::InvalidEmailFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a@b.c"));
        assert!(validate_email("first.last@sub.domain.org"));
        assert!(validate_email("x+tag@host.co.uk"));
        assert!(validate_email("имя@почта.рф"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email(""));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user@example."));
        assert!(!validate_email("us er@example.com"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email(" user@example.com"));
    }

    #[test]
    fn test_required_messages() {
        assert_eq!(required_message("name"), MSG_NAME_REQUIRED);
        assert_eq!(required_message("email"), MSG_EMAIL_REQUIRED);
        assert_eq!(required_message("message"), MSG_MESSAGE_REQUIRED);
        assert_eq!(required_message("phone"), MSG_FIELD_REQUIRED);
        assert_eq!(required_message(""), MSG_FIELD_REQUIRED);
    }

    #[test]
    fn test_rules_key_falls_back_to_id() {
        let rules = FieldRules::new("", "message", "text", true);
        assert_eq!(rules.key, "message");

        let rules = FieldRules::new("name", "contact-name", "text", true);
        assert_eq!(rules.key, "name");
    }

    #[test]
    fn test_required_field_empty() {
        let rules = FieldRules::new("name", "name", "text", true);
        assert_eq!(
            validate_field_value(&rules, "   "),
            Err(FieldError::RequiredFieldEmpty {
                field: "name".to_string()
            })
        );
        assert!(validate_field_value(&rules, " Иван ").is_ok());
    }

    #[test]
    fn test_optional_empty_field_passes() {
        let rules = FieldRules::new("company", "company", "text", false);
        assert!(validate_field_value(&rules, "").is_ok());

        let rules = FieldRules::new("backup", "backup", "email", false);
        assert!(validate_field_value(&rules, "").is_ok());
    }

    #[test]
    fn test_email_field_format() {
        let rules = FieldRules::new("email", "email", "email", true);
        assert_eq!(
            validate_field_value(&rules, "bad"),
            Err(FieldError::InvalidEmailFormat)
        );
        assert!(validate_field_value(&rules, "  user@example.com  ").is_ok());
    }

    #[test]
    fn test_email_format_only_checked_for_email_type() {
        let rules = FieldRules::new("email", "email", "text", true);
        assert!(validate_field_value(&rules, "bad").is_ok());
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::RequiredFieldEmpty {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), MSG_EMAIL_REQUIRED);
        assert_eq!(err.message(), MSG_EMAIL_REQUIRED);

        let err = FieldError::RequiredFieldEmpty {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), MSG_FIELD_REQUIRED);

        assert_eq!(FieldError::InvalidEmailFormat.to_string(), MSG_INVALID_EMAIL);
    }
}
