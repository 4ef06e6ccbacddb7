pub mod anchors;
pub mod controller;
pub mod form;
pub mod host;
pub mod menu;
pub mod reveal;

pub use anchors::{AnchorNavigator, AnchorOutcome};
pub use controller::{PageController, PageElements};
pub use form::{FormValidator, SubmitOutcome};
pub use host::{FormInput, PageElement, PageHost};
pub use menu::MenuController;
pub use reveal::ScrollReveal;
