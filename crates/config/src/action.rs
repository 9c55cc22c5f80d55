//! Named actions that shortcuts can be bound to.

use std::fmt;

/// Actions understood by hotmouse.
///
/// The set is fixed at build time. Shortcut tables store action *names*; use
/// [`Action::from_name`] to resolve one. The empty name is [`Action::Noop`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    /// Does nothing.
    Noop,
    /// Enable hotmouse.
    On,
    /// Disable hotmouse.
    Off,
    /// Toggle hotmouse.
    OnOff,
    /// Undo the last review operation.
    Undo,
    /// Reveal the answer side of the current card.
    ShowAnswer,
    /// Rate the card "again".
    Again,
    /// Rate the card "hard".
    Hard,
    /// Rate the card "good".
    Good,
    /// Rate the card "easy".
    Easy,
    /// Delete the current note.
    Delete,
    /// Suspend the current card.
    SuspendCard,
    /// Suspend the current note.
    SuspendNote,
    /// Bury the current card.
    BuryCard,
    /// Bury the current note.
    BuryNote,
    /// Toggle the mark on the current note.
    Mark,
    /// Set the red flag.
    Red,
    /// Set the orange flag.
    Orange,
    /// Set the green flag.
    Green,
    /// Set the blue flag.
    Blue,
    /// Replay card audio.
    Audio,
    /// Record a voice sample.
    RecordVoice,
    /// Replay the recorded voice sample.
    ReplayVoice,
    /// Start studying from the deck overview.
    StudyNow,
    /// Go to the deck browser.
    DeckBrowser,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 25] = [
        Self::Noop,
        Self::On,
        Self::Off,
        Self::OnOff,
        Self::Undo,
        Self::ShowAnswer,
        Self::Again,
        Self::Hard,
        Self::Good,
        Self::Easy,
        Self::Delete,
        Self::SuspendCard,
        Self::SuspendNote,
        Self::BuryCard,
        Self::BuryNote,
        Self::Mark,
        Self::Red,
        Self::Orange,
        Self::Green,
        Self::Blue,
        Self::Audio,
        Self::RecordVoice,
        Self::ReplayVoice,
        Self::StudyNow,
        Self::DeckBrowser,
    ];

    /// Name as written in shortcut tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noop => "",
            Self::On => "on",
            Self::Off => "off",
            Self::OnOff => "on_off",
            Self::Undo => "undo",
            Self::ShowAnswer => "show_ans",
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
            Self::Delete => "delete",
            Self::SuspendCard => "suspend_card",
            Self::SuspendNote => "suspend_note",
            Self::BuryCard => "bury_card",
            Self::BuryNote => "bury_note",
            Self::Mark => "mark",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Audio => "audio",
            Self::RecordVoice => "record_voice",
            Self::ReplayVoice => "replay_voice",
            Self::StudyNow => "study_now",
            Self::DeckBrowser => "deck_browser",
        }
    }

    /// Resolve a shortcut-table name. Names are exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// True for the actions that must still run while hotmouse is disabled.
    pub const fn enables(self) -> bool {
        matches!(self, Self::On | Self::OnOff)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
