use crate::UiState;

/// The host application as seen by the engine.
///
/// Only [`Host::ui_state`] is required. The other methods are optional
/// capabilities: the defaults do nothing, so a host that has no notice area or
/// menu simply does not override them.
pub trait Host {
    /// Current UI state. Queried once per event.
    fn ui_state(&self) -> UiState;

    /// Show a transient notice (a tooltip). Used for the debug and action
    /// echoes and for enable/disable feedback.
    fn notice(&mut self, _text: &str) {}

    /// Update the label of the enable/disable menu entry.
    fn set_menu_label(&mut self, _label: &str) {}

    /// Raw bitmask of the pointer buttons currently held, in the host's
    /// numbering. Needed for events that do not carry it themselves (web
    /// messages). Hosts that cannot query it report nothing held.
    fn held_buttons(&self) -> u32 {
        0
    }
}
