//! Page interaction controller
//!
//! Built once at startup from element references located by the caller.
//! Each part is optional: a page without a contact form, for example, simply
//! gets no form validator.

use std::rc::Rc;

use leptos::logging::{log, warn};

use crate::core::config::PageConfig;
use crate::ui::anchors::AnchorNavigator;
use crate::ui::form::FormValidator;
use crate::ui::host::PageHost;
use crate::ui::menu::MenuController;
use crate::ui::reveal::ScrollReveal;

/// Elements located at startup
pub struct PageElements<H: PageHost> {
    pub menu_toggle: Option<H::Element>,
    pub nav: Option<H::Element>,
    pub menu_bars: Vec<H::Element>,
    /// Fields of the contact form; `None` when the page has no form
    pub form_fields: Option<Vec<H::Input>>,
    /// Controls marked required anywhere in the form, selects included
    pub required_fields: Vec<H::Input>,
    pub email_field: Option<H::Input>,
    pub sections: Vec<H::Element>,
}

/// Owns every sub-controller for the lifetime of the page
pub struct PageController<H: PageHost> {
    pub menu: Option<Rc<MenuController<H::Element>>>,
    pub anchors: AnchorNavigator<H>,
    pub form: Option<FormValidator<H>>,
    pub reveal: ScrollReveal<H::Element>,
}

impl<H: PageHost> PageController<H> {
    pub fn new(host: H, elements: PageElements<H>, config: &PageConfig) -> Self {
        let menu = match (elements.menu_toggle, elements.nav) {
            (Some(toggle), Some(nav)) => {
                log!("Mobile menu enabled ({} indicator bars)", elements.menu_bars.len());
                Some(Rc::new(MenuController::new(
                    toggle,
                    nav,
                    elements.menu_bars,
                    config.classes.nav_open.clone(),
                )))
            }
            _ => {
                warn!("Mobile menu disabled: toggle or nav element not found");
                None
            }
        };

        let anchors = AnchorNavigator::new(host.clone(), menu.clone());

        let form = match elements.form_fields {
            Some(fields) => {
                log!(
                    "Contact form validation enabled ({} fields, {} required)",
                    fields.len(),
                    elements.required_fields.len()
                );
                Some(FormValidator::new(
                    host.clone(),
                    fields,
                    elements.required_fields,
                    elements.email_field,
                    config.classes.field_error.clone(),
                    config.error_suffix.clone(),
                ))
            }
            None => {
                log!("No contact form on this page");
                None
            }
        };

        let reveal = ScrollReveal::new(
            elements.sections,
            config.classes.reveal.clone(),
            config.reveal.clone(),
        );
        reveal.install_styles(&host, &config.selectors.sections);
        log!(
            "Scroll reveal registered for {} sections",
            reveal.sections().len()
        );

        Self {
            menu,
            anchors,
            form,
            reveal,
        }
    }
}
