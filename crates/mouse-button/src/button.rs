use std::fmt;

use serde::{Deserialize, Serialize};

/// A physical pointer button.
///
/// Variant order is the canonical order used whenever a set of buttons is
/// rendered, so reordering variants changes every derived hotkey string.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button or wheel press.
    Middle,
    /// First extra button (usually "back").
    Xbutton1,
    /// Second extra button (usually "forward").
    Xbutton2,
}

impl Button {
    /// All buttons in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Left,
        Self::Right,
        Self::Middle,
        Self::Xbutton1,
        Self::Xbutton2,
    ];

    /// Token name used in hotkey strings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
            Self::Xbutton1 => "xbutton1",
            Self::Xbutton2 => "xbutton2",
        }
    }

    /// Parse a token name. Case-insensitive; accepts the generic aliases
    /// `primary`, `secondary`, `extra1` and `extra2`.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "primary" => Some(Self::Left),
            "right" | "secondary" => Some(Self::Right),
            "middle" => Some(Self::Middle),
            "xbutton1" | "extra1" => Some(Self::Xbutton1),
            "xbutton2" | "extra2" => Some(Self::Xbutton2),
            _ => None,
        }
    }

    /// Position of this button in canonical order.
    pub(crate) const fn index(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
            Self::Xbutton1 => 3,
            Self::Xbutton2 => 4,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
