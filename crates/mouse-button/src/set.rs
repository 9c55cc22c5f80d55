use std::fmt;

use crate::Button;

/// An ordered set of pointer buttons.
///
/// Iteration always yields buttons in canonical `Button` order, regardless of
/// insertion order. This is what makes hotkey strings built from a set
/// independent of the order in which the buttons were pressed.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ButtonSet {
    /// One bit per button, indexed by `Button::index`.
    bits: u8,
}

impl ButtonSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Bit for a single button.
    const fn bit(b: Button) -> u8 {
        1 << b.index()
    }

    /// Add a button; returns true if it was not already present.
    pub fn insert(&mut self, b: Button) -> bool {
        let had = self.contains(b);
        self.bits |= Self::bit(b);
        !had
    }

    /// Remove a button; returns true if it was present.
    pub fn remove(&mut self, b: Button) -> bool {
        let had = self.contains(b);
        self.bits &= !Self::bit(b);
        had
    }

    /// Return a copy of this set without `b`.
    pub fn without(mut self, b: Button) -> Self {
        self.remove(b);
        self
    }

    /// Return true if `b` is in the set.
    pub const fn contains(&self, b: Button) -> bool {
        self.bits & Self::bit(b) != 0
    }

    /// Return true if the set holds no buttons.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of buttons in the set.
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate buttons in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = Self::new();
        for b in iter {
            set.insert(b);
        }
        set
    }
}

impl fmt::Debug for ButtonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_canonical() {
        let set: ButtonSet = [Button::Xbutton2, Button::Left, Button::Middle]
            .into_iter()
            .collect();
        let order: Vec<Button> = set.iter().collect();
        assert_eq!(order, vec![Button::Left, Button::Middle, Button::Xbutton2]);
    }

    #[test]
    fn insert_remove() {
        let mut set = ButtonSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Button::Right));
        assert!(!set.insert(Button::Right));
        assert_eq!(set.len(), 1);
        assert!(set.remove(Button::Right));
        assert!(!set.remove(Button::Right));
        assert!(set.is_empty());
    }

    #[test]
    fn without_leaves_original() {
        let set: ButtonSet = [Button::Left, Button::Right].into_iter().collect();
        let less = set.without(Button::Right);
        assert!(set.contains(Button::Right));
        assert!(!less.contains(Button::Right));
        assert!(less.contains(Button::Left));
    }
}
