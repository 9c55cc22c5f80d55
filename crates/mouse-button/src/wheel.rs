use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a scroll delta came from.
///
/// Native UI events and embedded web content report the same physical
/// direction with opposite delta signs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelSource {
    /// Toolkit wheel events: positive delta scrolls up.
    Native,
    /// Embedded web content (`WheelEvent.deltaY`): negative delta scrolls up.
    Embedded,
}

/// Direction of a single wheel tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelDirection {
    /// Away from the user.
    Up,
    /// Towards the user.
    Down,
}

impl WheelDirection {
    /// Derive a direction from a signed delta. A zero delta has no direction.
    pub fn from_delta(delta: i32, source: WheelSource) -> Option<Self> {
        let delta = match source {
            WheelSource::Native => delta,
            WheelSource::Embedded => delta.saturating_neg(),
        };
        match delta {
            0 => None,
            d if d > 0 => Some(Self::Up),
            _ => Some(Self::Down),
        }
    }

    /// Shorthand for `from_delta(delta, WheelSource::Native)`.
    pub fn from_native(delta: i32) -> Option<Self> {
        Self::from_delta(delta, WheelSource::Native)
    }

    /// Shorthand for `from_delta(delta, WheelSource::Embedded)`.
    pub fn from_embedded(delta: i32) -> Option<Self> {
        Self::from_delta(delta, WheelSource::Embedded)
    }

    /// Token name used in hotkey strings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for WheelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_sign() {
        assert_eq!(WheelDirection::from_native(120), Some(WheelDirection::Up));
        assert_eq!(WheelDirection::from_native(-120), Some(WheelDirection::Down));
        assert_eq!(WheelDirection::from_native(0), None);
    }

    #[test]
    fn embedded_sign_is_inverted() {
        assert_eq!(WheelDirection::from_embedded(-1), Some(WheelDirection::Up));
        assert_eq!(WheelDirection::from_embedded(3), Some(WheelDirection::Down));
        assert_eq!(WheelDirection::from_embedded(0), None);
    }

    #[test]
    fn extreme_deltas() {
        assert_eq!(WheelDirection::from_embedded(i32::MIN), Some(WheelDirection::Up));
        assert_eq!(WheelDirection::from_native(i32::MIN), Some(WheelDirection::Down));
    }
}
