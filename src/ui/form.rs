//! Contact form validation
//!
//! Fields are checked when they lose focus and all together on submit.
//! Typing into a field clears its error right away; the error only comes
//! back on the next blur or submit.

use crate::core::validation::{
    FieldError, FieldRules, MSG_FORM_SUBMITTED, MSG_INVALID_EMAIL, validate_email,
    validate_field_value,
};
use crate::ui::host::{FormInput, PageElement, PageHost};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every check passed; the acknowledgment was shown and the form reset
    Accepted,
    /// At least one field failed; errors are displayed next to the fields
    Rejected { failed_fields: Vec<String> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Validates the fields of one form
pub struct FormValidator<H: PageHost> {
    host: H,
    /// Fields checked on blur and cleared on input
    fields: Vec<H::Input>,
    /// Fields checked on submit
    required: Vec<H::Input>,
    email_field: Option<H::Input>,
    error_class: String,
    error_suffix: String,
}

impl<H: PageHost> FormValidator<H> {
    pub fn new(
        host: H,
        fields: Vec<H::Input>,
        required: Vec<H::Input>,
        email_field: Option<H::Input>,
        error_class: impl Into<String>,
        error_suffix: impl Into<String>,
    ) -> Self {
        Self {
            host,
            fields,
            required,
            email_field,
            error_class: error_class.into(),
            error_suffix: error_suffix.into(),
        }
    }

    pub fn fields(&self) -> &[H::Input] {
        &self.fields
    }

    /// Check one field and update its error decoration
    pub fn validate_field(&self, field: &H::Input) -> Result<(), FieldError> {
        let (name, id, input_type) = (field.name(), field.id(), field.input_type());
        let rules = FieldRules::new(&name, &id, &input_type, field.is_required());

        match validate_field_value(&rules, &field.value()) {
            Ok(()) => {
                self.clear_error(field);
                Ok(())
            }
            Err(err) => {
                self.show_error(field, err.message());
                Err(err)
            }
        }
    }

    /// Check every required field plus the email field
    pub fn validate_form(&self) -> SubmitOutcome {
        let mut failed_fields = Vec::new();

        for field in self.required.iter().filter(|f| f.is_required()) {
            if self.validate_field(field).is_err() {
                failed_fields.push(field.id());
            }
        }

        // The email field is re-checked on its raw value even when it is
        // empty, so an empty address reports the format message.
        if let Some(email) = &self.email_field
            && !validate_email(&email.value())
        {
            self.show_error(email, MSG_INVALID_EMAIL);
            let id = email.id();
            if !failed_fields.contains(&id) {
                failed_fields.push(id);
            }
        }

        if failed_fields.is_empty() {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected { failed_fields }
        }
    }

    /// Submit handler: validate, then acknowledge and reset on success
    pub fn handle_submit(&self) -> SubmitOutcome {
        let outcome = self.validate_form();
        if outcome.is_accepted() {
            self.host.alert(MSG_FORM_SUBMITTED);
            self.reset();
        }
        outcome
    }

    /// Input handler
    pub fn handle_input(&self, field: &H::Input) {
        self.clear_error(field);
    }

    /// Empty every field value
    pub fn reset(&self) {
        for field in self.fields.iter().chain(&self.required) {
            field.set_value("");
        }
    }

    pub fn show_error(&self, field: &H::Input, message: &str) {
        self.clear_error(field);
        field.element().add_class(&self.error_class);
        if let Some(slot) = self.error_slot(field) {
            slot.set_text(message);
        }
    }

    pub fn clear_error(&self, field: &H::Input) {
        field.element().remove_class(&self.error_class);
        if let Some(slot) = self.error_slot(field) {
            slot.set_text("");
        }
    }

    fn error_slot(&self, field: &H::Input) -> Option<H::Element> {
        self.host
            .element_by_id(&format!("{}{}", field.id(), self.error_suffix))
    }
}
