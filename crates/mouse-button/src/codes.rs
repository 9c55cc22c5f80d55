use crate::{Button, ButtonSet};

/// Translation table between `Button` values and a host's raw button codes.
///
/// Hosts report a pressed button as a single code and the held buttons as a
/// bitmask of the same codes. The default table uses the common layout shared
/// by most toolkits and the DOM `MouseEvent.buttons` field: one bit per button
/// in canonical order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ButtonCodes {
    /// Raw code for each button, indexed by canonical order.
    codes: [u32; 5],
}

impl Default for ButtonCodes {
    fn default() -> Self {
        Self::new([0x01, 0x02, 0x04, 0x08, 0x10])
    }
}

impl ButtonCodes {
    /// Build a table from raw codes listed in canonical button order
    /// (left, right, middle, xbutton1, xbutton2).
    pub const fn new(codes: [u32; 5]) -> Self {
        Self { codes }
    }

    /// Raw code for `b`.
    pub const fn encode(&self, b: Button) -> u32 {
        self.codes[b.index() as usize]
    }

    /// Button for a raw code, if the code is one of ours.
    pub fn decode(&self, code: u32) -> Option<Button> {
        Button::ALL.into_iter().find(|b| self.encode(*b) == code)
    }

    /// Held buttons from a raw bitmask. Unknown bits are ignored.
    pub fn held(&self, mask: u32) -> ButtonSet {
        Button::ALL
            .into_iter()
            .filter(|b| mask & self.encode(*b) != 0)
            .collect()
    }

    /// Raw bitmask for a set of buttons.
    pub fn mask(&self, set: &ButtonSet) -> u32 {
        set.iter().fold(0, |acc, b| acc | self.encode(b))
    }
}
