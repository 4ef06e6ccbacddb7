//! Page configuration: selectors, class names and reveal options.
//!
//! Every value has a default matching the landing page markup. A page may
//! override any subset through an embedded JSON block (see
//! [`CONFIG_ELEMENT_ID`]) or by passing an object to `hydrate_with_config`.

use serde::Deserialize;

use crate::core::error::PageError;
use crate::core::reveal::RevealOptions;

/// Id of the optional `<script type="application/json">` configuration block
pub const CONFIG_ELEMENT_ID: &str = "page-interactions-config";

/// CSS selectors used once at startup to locate the page elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_toggle: String,
    pub nav: String,
    pub menu_bar: String,
    pub contact_form: String,
    /// Fields inside the contact form that get blur/input handling
    pub form_fields: String,
    /// Controls inside the contact form checked on submit
    pub required_fields: String,
    pub anchor_links: String,
    pub sections: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: ".header__menu-toggle".to_string(),
            nav: ".header__nav".to_string(),
            menu_bar: ".header__menu-bar".to_string(),
            contact_form: ".contact-form".to_string(),
            form_fields: "input, textarea".to_string(),
            required_fields: "[required]".to_string(),
            anchor_links: "a[href^=\"#\"]".to_string(),
            sections: "section".to_string(),
        }
    }
}

/// Class names toggled by the controllers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub nav_open: String,
    pub field_error: String,
    pub reveal: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            nav_open: "header__nav--open".to_string(),
            field_error: "form-input--error".to_string(),
            reveal: "animate-in".to_string(),
        }
    }
}

/// Complete controller configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: ClassNames,
    pub reveal: RevealOptions,
    /// Id of the field re-checked against the email pattern on submit
    pub email_field_id: String,
    /// Suffix appended to a field id to find its error message element
    pub error_suffix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            reveal: RevealOptions::default(),
            email_field_id: "email".to_string(),
            error_suffix: "-error".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        serde_json::from_str(json).map_err(|e| PageError::InvalidConfig(e.to_string()))
    }
}
