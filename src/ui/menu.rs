//! Mobile navigation menu controller

use crate::core::menu::{CLOSE_KEY, MenuState, bar_style};
use crate::ui::host::PageElement;

/// Opens and closes the mobile nav.
///
/// The open flag lives on the nav element as a class, so the controller holds
/// no state of its own besides the element handles.
pub struct MenuController<E: PageElement> {
    toggle: E,
    nav: E,
    bars: Vec<E>,
    open_class: String,
}

impl<E: PageElement> MenuController<E> {
    pub fn new(toggle: E, nav: E, bars: Vec<E>, open_class: impl Into<String>) -> Self {
        Self {
            toggle,
            nav,
            bars,
            open_class: open_class.into(),
        }
    }

    pub fn state(&self) -> MenuState {
        if self.nav.has_class(&self.open_class) {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn open(&self) {
        self.nav.add_class(&self.open_class);
        self.apply(MenuState::Open);
    }

    pub fn close(&self) {
        self.nav.remove_class(&self.open_class);
        self.apply(MenuState::Closed);
    }

    pub fn toggle(&self) {
        match self.state() {
            MenuState::Open => self.close(),
            MenuState::Closed => self.open(),
        }
    }

    /// Document click: close unless the click landed in the nav or the toggle.
    /// `None` means the target was not an element.
    pub fn handle_document_click(&self, target: Option<&E>) {
        let inside = target.is_some_and(|t| self.nav.contains(t) || self.toggle.contains(t));
        if !inside {
            self.close();
        }
    }

    pub fn handle_key(&self, key: &str) {
        if key == CLOSE_KEY {
            self.close();
        }
    }

    pub fn toggle_element(&self) -> &E {
        &self.toggle
    }

    fn apply(&self, state: MenuState) {
        self.toggle
            .set_attribute("aria-expanded", state.aria_expanded());

        for (index, bar) in self.bars.iter().enumerate() {
            let style = bar_style(state, index);
            if let Some(transform) = style.transform {
                bar.set_style("transform", transform);
            }
            if let Some(opacity) = style.opacity {
                bar.set_style("opacity", opacity);
            }
        }
    }
}
