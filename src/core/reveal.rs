//! Scroll-triggered reveal animation
//!
//! Sections start hidden and shifted down; once one enters the viewport
//! it receives the reveal class, which transitions it into place. Reveal is
//! one-way: a section never goes back to hidden.

use serde::Deserialize;

/// Id of the injected `<style>` element, used to install it only once
pub const REVEAL_STYLE_ID: &str = "scroll-reveal-styles";

/// Observer and transition parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Visible fraction at which the observer reports a crossing
    pub threshold: f64,
    /// Pixels the viewport's bottom edge is pulled in by
    pub bottom_margin_px: u32,
    /// Initial downward offset of hidden sections
    pub offset_px: u32,
    pub duration_secs: f64,
    pub easing: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
            offset_px: 30,
            duration_secs: 0.6,
            easing: "ease".to_string(),
        }
    }
}

impl RevealOptions {
    /// `rootMargin` for the intersection observer
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// Global stylesheet for `section_selector` and the reveal class
    pub fn stylesheet(&self, section_selector: &str, reveal_class: &str) -> String {
        let transition = format!("{}s {}", self.duration_secs, self.easing);
        format!(
            "{section_selector} {{\n    \
                opacity: 0;\n    \
                transform: translateY({offset}px);\n    \
                transition: opacity {transition}, transform {transition};\n\
            }}\n\n\
            {section_selector}.{reveal_class} {{\n    \
                opacity: 1;\n    \
                transform: translateY(0);\n\
            }}\n",
            offset = self.offset_px,
        )
    }
}

/// One observer notification for a section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    /// Whether the sample counts as having entered the viewport.
    ///
    /// The observer threshold only controls when samples are delivered; the
    /// ratio itself is not checked again, so sections taller than the
    /// viewport still reveal.
    pub fn entered(&self) -> bool {
        self.is_intersecting
    }
}

/// Per-section animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Apply a sample. Returns true only on the Hidden -> Revealed transition.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if *self == RevealState::Hidden && sample.entered() {
            *self = RevealState::Revealed;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn test_stylesheet_content() {
        let css = RevealOptions::default().stylesheet("section", "animate-in");

        assert!(css.contains("section {"));
        assert!(css.contains("opacity: 0;"));
        assert!(css.contains("transform: translateY(30px);"));
        assert!(css.contains("transition: opacity 0.6s ease, transform 0.6s ease;"));
        assert!(css.contains("section.animate-in {"));
        assert!(css.contains("opacity: 1;"));
        assert!(css.contains("transform: translateY(0);"));
    }

    #[test]
    fn test_sample_entered() {
        assert!(IntersectionSample::new(true, 0.1).entered());
        assert!(IntersectionSample::new(true, 0.6).entered());
        // Tall sections never reach the threshold ratio but still count
        assert!(IntersectionSample::new(true, 0.05).entered());
        assert!(IntersectionSample::new(true, 0.09999).entered());
        assert!(!IntersectionSample::new(false, 0.0).entered());
        assert!(!IntersectionSample::new(false, 0.2).entered());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut state = RevealState::default();

        assert!(!state.observe(IntersectionSample::new(false, 0.0)));
        assert_eq!(state, RevealState::Hidden);

        assert!(state.observe(IntersectionSample::new(true, 0.02)));
        assert_eq!(state, RevealState::Revealed);

        // Leaving and re-entering the viewport changes nothing
        assert!(!state.observe(IntersectionSample::new(false, 0.0)));
        assert!(!state.observe(IntersectionSample::new(true, 0.9)));
        assert_eq!(state, RevealState::Revealed);
    }
}
