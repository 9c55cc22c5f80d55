//! The shortcut table: canonical hotkey strings mapped to action names.

use std::collections::{BTreeMap, btree_map};

use mouse_button::Button;
use serde::{Deserialize, Serialize};

/// Shortcut table mapping canonical hotkey strings to action names.
///
/// A table is an immutable snapshot for the lifetime of a configuration;
/// refreshing configuration replaces the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortcuts {
    /// Hotkey string to action name.
    map: BTreeMap<String, String>,
}

impl Shortcuts {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a binding, returning the table (builder style).
    pub fn with(mut self, key: impl Into<String>, action: impl Into<String>) -> Self {
        self.map.insert(key.into(), action.into());
        self
    }

    /// Action name bound to `key`; the empty name when unbound.
    pub fn action_for(&self, key: &str) -> &str {
        self.map.get(key).map(String::as_str).unwrap_or("")
    }

    /// Iterate `(key, action)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.map.iter()
    }

    /// Iterate hotkey strings in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no bindings are configured.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// True if any binding involves the wheel.
    pub fn has_wheel_hotkey(&self) -> bool {
        self.keys().any(|k| k.contains("wheel"))
    }

    /// True if any binding, in any scope, involves button `b`.
    pub fn uses_button(&self, b: Button) -> bool {
        self.keys().any(|k| key_uses_button(k, b))
    }

    /// True if any binding in the scope tagged `scope` involves button `b`.
    pub fn uses_button_in_scope(&self, scope: &str, b: Button) -> bool {
        self.scope_keys(scope).any(|k| key_uses_button(k, b))
    }

    /// True if the scope tagged `scope` has a wheel binding without held buttons
    /// (a key starting with `<scope>_wheel_`).
    pub fn has_wheel_in_scope(&self, scope: &str) -> bool {
        let prefix = format!("{scope}_wheel_");
        self.keys().any(|k| k.starts_with(&prefix))
    }

    /// Keys belonging to the scope tagged `scope`.
    fn scope_keys<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.keys().filter(move |k| {
            k.strip_prefix(scope)
                .is_some_and(|rest| rest.starts_with('_'))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Shortcuts {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// True if a hotkey string has `b` as one of its button tokens.
fn key_uses_button(key: &str, b: Button) -> bool {
    key.split('_').any(|tok| tok == b.name())
}
