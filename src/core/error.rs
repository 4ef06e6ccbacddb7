//! Error types shared by the controllers and the browser bindings

/// Failure to attach the controller to the host page.
///
/// Missing optional elements are not errors; they disable the affected
/// component. These variants cover the host itself misbehaving.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PageError {
    #[error("No global window available")]
    MissingWindow,

    #[error("Window has no document")]
    MissingDocument,

    #[error("Invalid page configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Browser API call failed: {0}")]
    Js(String),
}
