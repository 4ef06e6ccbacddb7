//! Smooth scrolling for in-page anchor links

use std::rc::Rc;

use crate::ui::host::{PageElement, PageHost};
use crate::ui::menu::MenuController;

/// Fragment identifier of an in-page link, without the leading `#`.
/// `None` for other links and for a bare `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Result of activating an anchor link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Target found and scrolled into view
    Scrolled,
    /// No element with that id; the jump is suppressed and nothing happens
    NoTarget,
}

/// Turns fragment links into smooth scrolls and closes the mobile menu after
pub struct AnchorNavigator<H: PageHost> {
    host: H,
    menu: Option<Rc<MenuController<H::Element>>>,
}

impl<H: PageHost> AnchorNavigator<H> {
    pub fn new(host: H, menu: Option<Rc<MenuController<H::Element>>>) -> Self {
        Self { host, menu }
    }

    /// Handle activation of a link with the given raw `href`. The caller
    /// suppresses the default jump regardless of the outcome.
    pub fn follow(&self, href: &str) -> AnchorOutcome {
        let Some(target) = fragment_id(href).and_then(|id| self.host.element_by_id(id)) else {
            return AnchorOutcome::NoTarget;
        };

        target.scroll_into_view();
        if let Some(menu) = &self.menu {
            menu.close();
        }
        AnchorOutcome::Scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#contact"), Some("contact"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/about#team"), None);
        assert_eq!(fragment_id("https://example.com"), None);
    }
}
