//! Shortcut table checks.
//!
//! None of these conditions stop a config from loading: a bad binding simply
//! never matches, and an unknown action is a no-op. They exist so that the
//! loader can point the user at bindings that will silently do nothing.

use std::fmt;

use mouse_button::Button;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Action, Shortcuts};

/// Grammar of a canonical hotkey string.
static KEY_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<scope>[oqacx])",
        r"(?P<press>(?:_press_(?:left|right|middle|xbutton1|xbutton2))*)",
        r"(?:_click_(?P<click>left|right|middle|xbutton1|xbutton2))?",
        r"(?:_wheel_(?P<wheel>up|down))?$",
    ))
    .ok()
});

/// A problem with a single shortcut binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The key does not follow the hotkey grammar.
    Malformed {
        /// Offending key.
        key: String,
    },
    /// The key parses but held buttons are out of canonical order, repeated,
    /// or include the clicked button, so composed keys never equal it.
    NonCanonical {
        /// Offending key.
        key: String,
    },
    /// The key has neither a click nor a wheel token; no gesture produces it.
    Unreachable {
        /// Offending key.
        key: String,
    },
    /// The bound action name is not one hotmouse knows.
    UnknownAction {
        /// Key the action is bound to.
        key: String,
        /// Unknown action name.
        action: String,
    },
}

impl Warning {
    /// The key this warning is about.
    pub fn key(&self) -> &str {
        match self {
            Self::Malformed { key }
            | Self::NonCanonical { key }
            | Self::Unreachable { key }
            | Self::UnknownAction { key, .. } => key,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { key } => write!(f, "shortcut '{}' is not a valid hotkey", key),
            Self::NonCanonical { key } => write!(
                f,
                "shortcut '{}' lists held buttons out of order or repeats one; it will never match",
                key
            ),
            Self::Unreachable { key } => write!(
                f,
                "shortcut '{}' has no click or wheel part; it will never trigger",
                key
            ),
            Self::UnknownAction { key, action } => {
                write!(f, "shortcut '{}' is bound to unknown action '{}'", key, action)
            }
        }
    }
}

/// True if `key` is exactly the form the engine composes for some gesture.
pub fn is_canonical_key(key: &str) -> bool {
    matches!(classify(key), Shape::Canonical)
}

/// Grammar classification of a key.
enum Shape {
    /// Composable by the engine.
    Canonical,
    /// Does not parse.
    Malformed,
    /// Parses but ordering/duplication makes it unmatchable.
    NonCanonical,
    /// Parses but has no click or wheel part.
    Unreachable,
}

/// Classify a single key against the grammar and canonical ordering rules.
fn classify(key: &str) -> Shape {
    let Some(re) = KEY_RE.as_ref() else {
        return Shape::Canonical;
    };
    let Some(caps) = re.captures(key) else {
        return Shape::Malformed;
    };
    let click = caps
        .name("click")
        .and_then(|m| Button::from_name(m.as_str()));
    if click.is_none() && caps.name("wheel").is_none() {
        return Shape::Unreachable;
    }
    let held: Vec<Button> = caps
        .name("press")
        .map(|m| m.as_str())
        .unwrap_or_default()
        .split("_press_")
        .filter(|s| !s.is_empty())
        .filter_map(Button::from_name)
        .collect();
    let ordered = held.windows(2).all(|w| w[0] < w[1]);
    let click_held = click.is_some_and(|c| held.contains(&c));
    if !ordered || click_held {
        return Shape::NonCanonical;
    }
    Shape::Canonical
}

/// Check every binding in a table.
pub(crate) fn check_shortcuts(shortcuts: &Shortcuts) -> Vec<Warning> {
    let mut out = Vec::new();
    for (key, action) in shortcuts.iter() {
        match classify(key) {
            Shape::Canonical => {}
            Shape::Malformed => out.push(Warning::Malformed { key: key.clone() }),
            Shape::NonCanonical => out.push(Warning::NonCanonical { key: key.clone() }),
            Shape::Unreachable => out.push(Warning::Unreachable { key: key.clone() }),
        }
        if Action::from_name(action).is_none() {
            out.push(Warning::UnknownAction {
                key: key.clone(),
                action: action.clone(),
            });
        }
    }
    out
}
