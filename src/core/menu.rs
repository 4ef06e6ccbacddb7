//! Mobile menu state and the hamburger indicator styles

/// Menu visibility, derived from the open class on the nav element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Value written to the toggle's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        match self {
            MenuState::Open => "true",
            MenuState::Closed => "false",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }
}

/// Inline style for one indicator bar. `None` leaves the property untouched,
/// an empty string removes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

impl BarStyle {
    const CLEARED: BarStyle = BarStyle {
        transform: Some(""),
        opacity: Some(""),
    };

    const UNTOUCHED: BarStyle = BarStyle {
        transform: None,
        opacity: None,
    };
}

/// Style for the bar at `index` in the given state.
///
/// Open turns the three bars into an "X": the top and bottom bars rotate
/// towards each other and the middle one fades out.
pub fn bar_style(state: MenuState, index: usize) -> BarStyle {
    match (state, index) {
        (MenuState::Closed, _) => BarStyle::CLEARED,
        (MenuState::Open, 0) => BarStyle {
            transform: Some("rotate(45deg) translate(5px, 5px)"),
            opacity: None,
        },
        (MenuState::Open, 1) => BarStyle {
            transform: None,
            opacity: Some("0"),
        },
        (MenuState::Open, 2) => BarStyle {
            transform: Some("rotate(-45deg) translate(7px, -6px)"),
            opacity: None,
        },
        (MenuState::Open, _) => BarStyle::UNTOUCHED,
    }
}

/// Key that closes the menu
pub const CLOSE_KEY: &str = "Escape";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_state_toggle() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
        assert!(MenuState::Open.is_open());
    }

    #[test]
    fn test_aria_expanded() {
        assert_eq!(MenuState::Open.aria_expanded(), "true");
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
    }

    #[test]
    fn test_open_bar_styles() {
        assert_eq!(
            bar_style(MenuState::Open, 0).transform,
            Some("rotate(45deg) translate(5px, 5px)")
        );
        assert_eq!(bar_style(MenuState::Open, 1).opacity, Some("0"));
        assert_eq!(bar_style(MenuState::Open, 1).transform, None);
        assert_eq!(
            bar_style(MenuState::Open, 2).transform,
            Some("rotate(-45deg) translate(7px, -6px)")
        );
        assert_eq!(bar_style(MenuState::Open, 3), BarStyle::UNTOUCHED);
    }

    #[test]
    fn test_closed_bar_styles_clear_everything() {
        for index in 0..4 {
            let style = bar_style(MenuState::Closed, index);
            assert_eq!(style.transform, Some(""));
            assert_eq!(style.opacity, Some(""));
        }
    }
}
