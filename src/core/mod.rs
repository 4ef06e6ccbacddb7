//! Host-independent page logic: configuration, validation rules, menu and
//! reveal state, timing and the debounce helper

pub mod config;
pub mod debounce;
pub mod error;
pub mod menu;
pub mod perf;
pub mod reveal;
pub mod validation;

pub use config::{ClassNames, PageConfig, Selectors};
pub use debounce::{Debouncer, TimerScheduler};
pub use error::PageError;
pub use menu::{BarStyle, MenuState, bar_style};
pub use perf::LoadTiming;
pub use reveal::{IntersectionSample, RevealOptions, RevealState};
pub use validation::{FieldError, FieldRules, validate_email, validate_field_value};
