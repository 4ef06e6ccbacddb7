//! Scroll-reveal controller

use crate::core::reveal::{IntersectionSample, REVEAL_STYLE_ID, RevealOptions, RevealState};
use crate::ui::host::{PageElement, PageHost};

/// Marks sections with the reveal class the first time they become visible
pub struct ScrollReveal<E: PageElement> {
    sections: Vec<E>,
    reveal_class: String,
    options: RevealOptions,
}

impl<E: PageElement> ScrollReveal<E> {
    pub fn new(sections: Vec<E>, reveal_class: impl Into<String>, options: RevealOptions) -> Self {
        Self {
            sections,
            reveal_class: reveal_class.into(),
            options,
        }
    }

    pub fn sections(&self) -> &[E] {
        &self.sections
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Install the hidden/revealed stylesheet once per document
    pub fn install_styles<H: PageHost<Element = E>>(&self, host: &H, section_selector: &str) {
        let css = self
            .options
            .stylesheet(section_selector, &self.reveal_class);
        host.install_stylesheet(REVEAL_STYLE_ID, &css);
    }

    /// Current state of a section, read from its class list
    pub fn state_of(&self, section: &E) -> RevealState {
        if section.has_class(&self.reveal_class) {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    /// Observer callback for one section. Returns true when this sample
    /// revealed it; later samples for the same section return false.
    pub fn on_intersection(&self, section: &E, sample: IntersectionSample) -> bool {
        let mut state = self.state_of(section);
        let revealed = state.observe(sample);
        if revealed {
            section.add_class(&self.reveal_class);
        }
        revealed
    }
}
