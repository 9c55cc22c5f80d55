//! UI state and the scope it maps to.

/// Host UI state at the moment an event is handled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UiState {
    /// The deck overview screen.
    Overview,
    /// Reviewing, question side shown.
    Question,
    /// Reviewing, answer side shown.
    Answer,
    /// In the reviewer but showing neither side (the congratulations screen).
    ReviewOther,
    /// Anywhere else.
    Elsewhere,
}

impl UiState {
    /// Parse the host's textual state pair: the main window state
    /// (`"overview"`, `"review"`, ...) and, while reviewing, the reviewer's own
    /// state (`"question"`, `"answer"`, ...). Unrecognized main states map to
    /// [`UiState::Elsewhere`].
    pub fn from_host(main: &str, reviewer: Option<&str>) -> Self {
        match (main, reviewer) {
            ("overview", _) => Self::Overview,
            ("review", Some("question")) => Self::Question,
            ("review", Some("answer")) => Self::Answer,
            ("review", _) => Self::ReviewOther,
            _ => Self::Elsewhere,
        }
    }
}

/// Logical scope that selects which bindings apply.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Scope {
    /// Deck overview (`o`).
    Overview,
    /// Question side (`q`).
    Question,
    /// Answer side (`a`).
    Answer,
    /// Congratulations screen (`c`).
    Congrats,
    /// Fallback for every other state (`x`).
    Other,
}

impl Scope {
    /// Scope for a UI state.
    pub const fn resolve(state: UiState) -> Self {
        match state {
            UiState::Overview => Self::Overview,
            UiState::Question => Self::Question,
            UiState::Answer => Self::Answer,
            UiState::ReviewOther => Self::Congrats,
            UiState::Elsewhere => Self::Other,
        }
    }

    /// Single-letter tag that prefixes hotkey strings.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Overview => "o",
            Self::Question => "q",
            Self::Answer => "a",
            Self::Congrats => "c",
            Self::Other => "x",
        }
    }

    /// True for the scopes that belong to the reviewer.
    pub const fn is_reviewing(self) -> bool {
        matches!(self, Self::Question | Self::Answer | Self::Congrats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_states() {
        assert_eq!(UiState::from_host("overview", None), UiState::Overview);
        assert_eq!(
            UiState::from_host("review", Some("question")),
            UiState::Question
        );
        assert_eq!(UiState::from_host("review", Some("answer")), UiState::Answer);
        assert_eq!(
            UiState::from_host("review", Some("transition")),
            UiState::ReviewOther
        );
        assert_eq!(UiState::from_host("review", None), UiState::ReviewOther);
        assert_eq!(UiState::from_host("deckBrowser", None), UiState::Elsewhere);
        assert_eq!(UiState::from_host("", Some("answer")), UiState::Elsewhere);
    }

    #[test]
    fn tags() {
        let tags: Vec<&str> = [
            UiState::Overview,
            UiState::Question,
            UiState::Answer,
            UiState::ReviewOther,
            UiState::Elsewhere,
        ]
        .into_iter()
        .map(|s| Scope::resolve(s).tag())
        .collect();
        assert_eq!(tags, vec!["o", "q", "a", "c", "x"]);
    }

    #[test]
    fn reviewing_scopes() {
        assert!(Scope::Congrats.is_reviewing());
        assert!(!Scope::Overview.is_reviewing());
        assert!(!Scope::Other.is_reviewing());
    }
}
