//! Canonical hotkey strings.

use mouse_button::{Button, ButtonSet, WheelDirection};

use crate::Scope;

/// Compose the canonical hotkey string for a gesture.
///
/// Layout: scope tag, then `_press_<button>` for each held button in canonical
/// order, then `_click_<button>`, then `_wheel_<dir>`. Platforms usually still
/// report a just-pressed button as held, so `click` is never rendered as held.
pub fn build_key(
    scope: Scope,
    held: &ButtonSet,
    click: Option<Button>,
    wheel: Option<WheelDirection>,
) -> String {
    let held = match click {
        Some(c) => held.without(c),
        None => *held,
    };
    let mut parts: Vec<String> = vec![scope.tag().to_string()];
    for b in held.iter() {
        parts.push(format!("press_{}", b.name()));
    }
    if let Some(c) = click {
        parts.push(format!("click_{}", c.name()));
    }
    if let Some(w) = wheel {
        parts.push(format!("wheel_{}", w.name()));
    }
    parts.join("_")
}
