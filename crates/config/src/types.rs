//! The configuration snapshot consumed by the engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Shortcuts, Warning, defaults, validation};

/// A configuration snapshot.
///
/// Field names match the add-on's JSON configuration so files written for it
/// load unchanged. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether hotmouse starts enabled.
    #[serde(default = "defaults::default_enabled")]
    pub default_enabled: bool,
    /// Hotkey string to action name.
    #[serde(default)]
    pub shortcuts: Shortcuts,
    /// Show the resolved action name as a notice on every dispatch.
    #[serde(default)]
    pub tooltip: bool,
    /// Show every composed hotkey string as a notice (while enabled).
    #[serde(default)]
    pub z_debug: bool,
    /// Wheel ticks closer together than this are coalesced.
    #[serde(default = "defaults::default_threshold_wheel_ms")]
    pub threshold_wheel_ms: u64,
    /// Clicks closer together than this are ignored; 0 disables the gate.
    #[serde(default = "defaults::default_threshold_click_ms")]
    pub threshold_click_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_enabled: defaults::DEFAULT_ENABLED,
            shortcuts: Shortcuts::default(),
            tooltip: false,
            z_debug: false,
            threshold_wheel_ms: defaults::THRESHOLD_WHEEL_MS,
            threshold_click_ms: defaults::THRESHOLD_CLICK_MS,
        }
    }
}

impl Config {
    /// Default configuration with the given shortcut table.
    pub fn with_shortcuts(shortcuts: Shortcuts) -> Self {
        Self {
            shortcuts,
            ..Self::default()
        }
    }

    /// Wheel coalescing threshold.
    pub fn wheel_threshold(&self) -> Duration {
        Duration::from_millis(self.threshold_wheel_ms)
    }

    /// Click suppression threshold.
    pub fn click_threshold(&self) -> Duration {
        Duration::from_millis(self.threshold_click_ms)
    }

    /// Report bindings that are malformed, can never trigger, or name unknown actions.
    pub fn validate(&self) -> Vec<Warning> {
        validation::check_shortcuts(&self.shortcuts)
    }
}
