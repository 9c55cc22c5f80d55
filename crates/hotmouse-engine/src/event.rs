use std::time::Instant;

/// A raw input event delivered by the host.
///
/// Button fields use the host's raw numbering; the session translates them
/// through its `ButtonCodes` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A pointer button went down.
    Press {
        /// Bitmask of buttons held at the time of the press.
        held: u32,
        /// Code of the button that was pressed.
        button: u32,
        /// When the press happened.
        at: Instant,
    },
    /// A native wheel event.
    Wheel {
        /// Vertical angle delta; positive scrolls up.
        delta_y: i32,
        /// Bitmask of buttons held during the scroll.
        held: u32,
        /// When the scroll happened.
        at: Instant,
    },
    /// A message posted by embedded web content.
    Web {
        /// Raw message text, including any namespace prefix.
        message: String,
        /// When the message arrived.
        at: Instant,
    },
    /// The platform is about to show a context menu.
    ContextMenu,
}
