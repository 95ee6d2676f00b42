//! Reveal State
//!
//! Two-state presentation machine for the drawing result page and the
//! visibility it implies for the animation, gift container and award table.

/// Default wait after the animation has loaded, matched to the GIF playback
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 3750;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    AwaitingReveal,
    Revealed,
}

impl RevealState {
    pub fn initial(pending_reveal: bool) -> Self {
        if pending_reveal {
            RevealState::AwaitingReveal
        } else {
            RevealState::Revealed
        }
    }

    /// Returns the state after the finish signal. Revealed stays revealed.
    pub fn reveal(self) -> Self {
        RevealState::Revealed
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    pub fn visibility(self) -> Visibility {
        match self {
            RevealState::AwaitingReveal => Visibility {
                animation: Display::Inherit,
                gift_container: Display::None,
                award_table: Display::None,
            },
            RevealState::Revealed => Visibility {
                animation: Display::None,
                gift_container: Display::Flex,
                award_table: Display::Flex,
            },
        }
    }
}

/// CSS `display` to apply to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Leave it to the page stylesheet
    Inherit,
    None,
    Flex,
}

impl Display {
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Display::Inherit => None,
            Display::None => Some("none"),
            Display::Flex => Some("flex"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub animation: Display,
    pub gift_container: Display,
    pub award_table: Display,
}

/// Reveal timing, overridable per page through `data-reveal-delay-ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    pub delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { delay_ms: DEFAULT_REVEAL_DELAY_MS }
    }
}

impl RevealConfig {
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, String> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => value
                .parse::<u32>()
                .map(|delay_ms| Self { delay_ms })
                .map_err(|e| format!("invalid data-reveal-delay-ms {:?}: {}", value, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_from_flag() {
        assert_eq!(RevealState::initial(true), RevealState::AwaitingReveal);
        assert_eq!(RevealState::initial(false), RevealState::Revealed);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let state = RevealState::AwaitingReveal.reveal();
        assert!(state.is_revealed());
        assert_eq!(state.reveal(), RevealState::Revealed);
    }

    #[test]
    fn test_awaiting_hides_results() {
        let vis = RevealState::AwaitingReveal.visibility();
        assert_eq!(vis.gift_container, Display::None);
        assert_eq!(vis.award_table, Display::None);
        assert_eq!(vis.animation.css_value(), None);
    }

    #[test]
    fn test_revealed_shows_results() {
        let vis = RevealState::Revealed.visibility();
        assert_eq!(vis.animation.css_value(), Some("none"));
        assert_eq!(vis.gift_container.css_value(), Some("flex"));
        assert_eq!(vis.award_table.css_value(), Some("flex"));
    }

    #[test]
    fn test_reveal_config_override() {
        assert_eq!(RevealConfig::from_attribute(None).unwrap().delay_ms, 3750);
        assert_eq!(RevealConfig::from_attribute(Some("")).unwrap().delay_ms, 3750);
        assert_eq!(RevealConfig::from_attribute(Some(" 5000 ")).unwrap().delay_ms, 5000);
        assert!(RevealConfig::from_attribute(Some("soon")).is_err());
        assert!(RevealConfig::from_attribute(Some("-1")).is_err());
    }
}
