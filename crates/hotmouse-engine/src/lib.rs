//! Hotmouse Engine
//!
//! The engine turns raw pointer input into hotkey strings and dispatches the
//! bound actions:
//! - resolves the UI scope for each event ([`Scope`])
//! - composes canonical hotkey strings ([`build_key`])
//! - coalesces wheel ticks and suppresses rapid clicks ([`ScrollGate`], [`ClickGate`])
//! - looks up and invokes actions, tracking the enabled state ([`Session`])
//!
//! Everything runs synchronously on the caller's thread. The host supplies UI
//! state and receives notices through the [`Host`] trait, and registers the
//! action bodies in an [`ActionRegistry`]. Each entry point returns whether the
//! event was consumed so the host can suppress the platform default.

mod answer;
mod error;
mod event;
mod gate;
mod host;
mod hotkey;
mod manager;
mod registry;
mod scope;
mod session;
pub mod test_support;
mod web;

pub use answer::ease_for;
pub use config::{Action, Config, Shortcuts};
pub use error::{ActionError, WebError};
pub use event::InputEvent;
pub use gate::{ClickGate, ScrollGate};
pub use host::Host;
pub use hotkey::build_key;
pub use manager::Manager;
pub use mouse_button::{Button, ButtonCodes, ButtonSet, WheelDirection, WheelSource};
pub use registry::{ActionRegistry, Handler};
pub use scope::{Scope, UiState};
pub use session::Session;
pub use web::{MESSAGE_PREFIX, WebMessage};
