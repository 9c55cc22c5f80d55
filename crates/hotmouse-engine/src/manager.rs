use tracing::info;

use crate::Host;

/// Menu label while enabled.
const LABEL_ENABLED: &str = "Disable Review Hotmouse";
/// Menu label while disabled.
const LABEL_DISABLED: &str = "Enable Review Hotmouse";

/// The enabled/disabled state machine.
///
/// Every transition refreshes the host's menu label, even when the state does
/// not change.
#[derive(Debug, Clone)]
pub struct Manager {
    /// Current state.
    enabled: bool,
}

impl Manager {
    /// A manager in the given initial state.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Current state.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Menu label describing the entry's effect in the current state.
    pub fn label(&self) -> &'static str {
        if self.enabled {
            LABEL_ENABLED
        } else {
            LABEL_DISABLED
        }
    }

    /// Enter the enabled state.
    pub fn enable(&mut self, host: &mut dyn Host) {
        self.set(host, true);
    }

    /// Enter the disabled state.
    pub fn disable(&mut self, host: &mut dyn Host) {
        self.set(host, false);
    }

    /// Flip the state.
    pub fn toggle(&mut self, host: &mut dyn Host) {
        self.set(host, !self.enabled);
    }

    /// Push the current label to the host.
    pub fn sync_label(&self, host: &mut dyn Host) {
        host.set_menu_label(self.label());
    }

    /// Shared transition body.
    fn set(&mut self, host: &mut dyn Host, enabled: bool) {
        if self.enabled != enabled {
            info!(enabled, "hotmouse_state");
        }
        self.enabled = enabled;
        self.sync_label(host);
    }
}
