//! The dispatch session: configuration snapshot, gates and enabled state.

use std::time::{Duration, Instant};

use config::{Action, Config};
use mouse_button::{Button, ButtonCodes, ButtonSet, WheelDirection};
use tracing::{debug, info, trace, warn};

use crate::{
    ActionRegistry, ClickGate, Host, InputEvent, Manager, Scope, ScrollGate, WebMessage,
    build_key,
};

/// Notice shown when the `on`/`on_off` actions enable hotmouse.
const NOTICE_ENABLED: &str = "Enabled hotmouse";
/// Notice shown when the `off`/`on_off` actions disable hotmouse.
const NOTICE_DISABLED: &str = "Disabled hotmouse";

/// One application session of hotmouse.
///
/// Holds the current configuration snapshot, the action registry, the
/// enabled state and both gates. Construct once, feed every raw event through
/// [`Session::handle`] (or the specific `on_*` entry points), and call
/// [`Session::refresh`] whenever the configuration changes.
#[derive(Debug)]
pub struct Session {
    /// Current configuration snapshot.
    config: Config,
    /// Host action bodies.
    registry: ActionRegistry,
    /// Raw button numbering of the host.
    codes: ButtonCodes,
    /// Enabled state.
    manager: Manager,
    /// Wheel coalescing.
    scroll_gate: ScrollGate,
    /// Click suppression.
    click_gate: ClickGate,
    /// Derived: the shortcut table has at least one wheel binding.
    has_wheel_hotkey: bool,
}

impl Session {
    /// Create a session using the default button numbering.
    pub fn new(config: Config, registry: ActionRegistry) -> Self {
        Self::with_codes(config, registry, ButtonCodes::default())
    }

    /// Create a session for a host with its own button numbering.
    pub fn with_codes(config: Config, registry: ActionRegistry, codes: ButtonCodes) -> Self {
        let manager = Manager::new(config.default_enabled);
        let has_wheel_hotkey = config.shortcuts.has_wheel_hotkey();
        Self {
            config,
            registry,
            codes,
            manager,
            scroll_gate: ScrollGate::new(),
            click_gate: ClickGate::new(),
            has_wheel_hotkey,
        }
    }

    /// Replace the configuration snapshot. The enabled state and gate timers
    /// are kept.
    pub fn refresh(&mut self, config: Config) {
        self.has_wheel_hotkey = config.shortcuts.has_wheel_hotkey();
        self.config = config;
        info!(
            shortcuts = self.config.shortcuts.len(),
            has_wheel = self.has_wheel_hotkey,
            "config_refresh"
        );
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True while hotmouse is enabled.
    pub fn enabled(&self) -> bool {
        self.manager.enabled()
    }

    /// True if any binding uses the wheel.
    pub fn has_wheel_hotkey(&self) -> bool {
        self.has_wheel_hotkey
    }

    /// Wheel gate.
    pub fn scroll_gate(&self) -> &ScrollGate {
        &self.scroll_gate
    }

    /// Click gate.
    pub fn click_gate(&self) -> &ClickGate {
        &self.click_gate
    }

    /// Push the current menu label to the host (call once the menu exists).
    pub fn install(&self, host: &mut dyn Host) {
        self.manager.sync_label(host);
    }

    /// Enable, with a notice. No-op when already enabled.
    pub fn turn_on(&mut self, host: &mut dyn Host) {
        if !self.manager.enabled() {
            self.manager.enable(host);
            host.notice(NOTICE_ENABLED);
        }
    }

    /// Disable, with a notice. No-op when already disabled.
    pub fn turn_off(&mut self, host: &mut dyn Host) {
        if self.manager.enabled() {
            self.manager.disable(host);
            host.notice(NOTICE_DISABLED);
        }
    }

    /// Flip the enabled state, with a notice. This is also what the host's
    /// menu entry should call.
    pub fn toggle_on_off(&mut self, host: &mut dyn Host) {
        self.manager.toggle(host);
        host.notice(if self.manager.enabled() {
            NOTICE_ENABLED
        } else {
            NOTICE_DISABLED
        });
    }

    /// Handle one raw event. Returns true when the host should suppress the
    /// platform default (context menu, scrolling, propagation).
    ///
    /// Web messages that are not for hotmouse report false here; hosts that
    /// share the message channel should use [`Session::on_web_message`] to
    /// tell "not ours" apart from "ours, not consumed".
    pub fn handle(&mut self, host: &mut dyn Host, event: &InputEvent) -> bool {
        match event {
            InputEvent::Press { held, button, at } => self.on_press(host, *held, *button, *at),
            InputEvent::Wheel { delta_y, held, at } => self.on_wheel(host, *delta_y, *held, *at),
            InputEvent::Web { message, at } => {
                self.on_web_message(host, message, *at).unwrap_or(false)
            }
            InputEvent::ContextMenu => self.should_suppress_context_menu(&*host),
        }
    }

    /// A pointer button went down.
    pub fn on_press(&mut self, host: &mut dyn Host, held: u32, button: u32, at: Instant) -> bool {
        let Some(clicked) = self.codes.decode(button) else {
            warn!(code = button, "unknown_button");
            return false;
        };
        if !self.click_gate.admit(at, self.config.click_threshold()) {
            return self.manager.enabled();
        }
        let held = self.codes.held(held);
        let scope = Scope::resolve(host.ui_state());
        let key = build_key(scope, &held, Some(clicked), None);
        self.execute(host, &key)
    }

    /// A native wheel event.
    ///
    /// Native wheel events only matter inside the reviewer, and only when some
    /// binding uses the wheel; everywhere else the platform keeps its default
    /// scrolling. The overview reports the wheel through web messages.
    pub fn on_wheel(&mut self, host: &mut dyn Host, delta_y: i32, held: u32, at: Instant) -> bool {
        if !self.has_wheel_hotkey || !Scope::resolve(host.ui_state()).is_reviewing() {
            return false;
        }
        let Some(dir) = WheelDirection::from_native(delta_y) else {
            return false;
        };
        let held = self.codes.held(held);
        self.handle_scroll(host, dir, held, at)
    }

    /// A wheel tick in a known direction, from either source.
    ///
    /// Ticks swallowed by the gate report the enabled state, so the default
    /// scroll stays suppressed while hotmouse is on.
    pub fn handle_scroll(
        &mut self,
        host: &mut dyn Host,
        dir: WheelDirection,
        held: ButtonSet,
        at: Instant,
    ) -> bool {
        if !self.scroll_gate.admit(at, self.config.wheel_threshold()) {
            return self.manager.enabled();
        }
        let scope = Scope::resolve(host.ui_state());
        let key = build_key(scope, &held, None, Some(dir));
        self.execute(host, &key)
    }

    /// A message from embedded web content.
    ///
    /// Returns `None` when the message is not a hotmouse wheel report (wrong
    /// prefix, malformed payload, other key): the host should pass through
    /// whatever result it already had. A wheel report in the overview that
    /// nothing consumed starts studying, unless the overview has its own
    /// wheel bindings.
    pub fn on_web_message(
        &mut self,
        host: &mut dyn Host,
        message: &str,
        at: Instant,
    ) -> Option<bool> {
        let value = match WebMessage::parse(message) {
            Ok(WebMessage::Wheel(value)) => value,
            Ok(WebMessage::Other(key)) => {
                trace!(key = %key, "web_message_ignored");
                return None;
            }
            Err(e) => {
                debug!(error = %e, "web_message_rejected");
                return None;
            }
        };
        let Some(dir) = WheelDirection::from_embedded(value) else {
            return Some(false);
        };
        let held = self.codes.held(host.held_buttons());
        let mut executed = self.handle_scroll(host, dir, held, at);
        if !executed
            && Scope::resolve(host.ui_state()) == Scope::Overview
            && !self
                .config
                .shortcuts
                .has_wheel_in_scope(Scope::Overview.tag())
        {
            debug!(dir = %dir, "overview_wheel_study_now");
            self.run(host, Action::StudyNow);
            executed = true;
        }
        Some(executed)
    }

    /// Should the toolkit's context menu be suppressed right now?
    ///
    /// True when the current scope binds the right button: in the overview
    /// and congratulations screens regardless of the enabled state, and on
    /// the question and answer sides while enabled.
    pub fn should_suppress_context_menu(&self, host: &dyn Host) -> bool {
        let shortcuts = &self.config.shortcuts;
        match Scope::resolve(host.ui_state()) {
            Scope::Overview => shortcuts.uses_button_in_scope(Scope::Overview.tag(), Button::Right),
            Scope::Question | Scope::Answer => {
                self.manager.enabled() && shortcuts.uses_button(Button::Right)
            }
            Scope::Congrats => shortcuts.uses_button_in_scope(Scope::Congrats.tag(), Button::Right),
            Scope::Other => false,
        }
    }

    /// Should a web view's own context menu be suppressed right now?
    pub fn should_suppress_web_context_menu(&self, host: &dyn Host) -> bool {
        self.manager.enabled()
            && Scope::resolve(host.ui_state()).is_reviewing()
            && self.config.shortcuts.uses_button(Button::Right)
    }

    /// Should the host add an "Enable Hotmouse" entry (bound to `on`) to the
    /// reviewer's context menu?
    pub fn offer_enable_entry(&self, host: &dyn Host) -> bool {
        !self.manager.enabled() && Scope::resolve(host.ui_state()).is_reviewing()
    }

    /// Look up `key` and run the bound action. Returns true when an action
    /// was dispatched.
    pub fn execute(&mut self, host: &mut dyn Host, key: &str) -> bool {
        if self.manager.enabled() && self.config.z_debug {
            host.notice(key);
        }
        let name = self.config.shortcuts.action_for(key).to_string();
        let action = Action::from_name(&name);

        if !self.manager.enabled() && !action.is_some_and(Action::enables) {
            trace!(key = %key, "dispatch_disabled");
            return false;
        }
        if name.is_empty() {
            trace!(key = %key, "dispatch_unbound");
            return false;
        }
        if self.config.tooltip {
            host.notice(&name);
        }
        debug!(key = %key, action = %name, "dispatch");
        match action {
            Some(action) => self.run(host, action),
            None => warn!(key = %key, action = %name, "unknown_action"),
        }
        true
    }

    /// Run an action: state transitions first, then any registered body.
    fn run(&mut self, host: &mut dyn Host, action: Action) {
        match action {
            Action::On => self.turn_on(host),
            Action::Off => self.turn_off(host),
            Action::OnOff => self.toggle_on_off(host),
            _ => {}
        }
        if let Err(e) = self.registry.invoke(action) {
            warn!(action = %action, error = %e, "action_failed");
        }
        if action == Action::ShowAnswer {
            // Let a rating tick right after revealing the answer through the gate.
            self.scroll_gate
                .rewind(self.config.wheel_threshold() + Duration::from_millis(1));
        }
    }
}
