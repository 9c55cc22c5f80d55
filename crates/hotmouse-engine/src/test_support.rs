//! Test support utilities for hotmouse-engine integration/unit tests.
//! These helpers are public to avoid dead_code warnings and are lightweight.
//! They are intended for use by the test suite and the replay tool only.

use std::{cell::RefCell, rc::Rc};

use config::Action;

use crate::{ActionRegistry, Host, UiState};

/// Shared log of invoked actions.
pub type ActionLog = Rc<RefCell<Vec<Action>>>;

/// A host that records everything the engine tells it.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    /// State reported by `ui_state`.
    pub state: UiState,
    /// Raw mask reported by `held_buttons`.
    pub held: u32,
    /// Notices shown, oldest first.
    pub notices: Vec<String>,
    /// Menu labels set, oldest first.
    pub labels: Vec<String>,
}

impl RecordingHost {
    /// A host in the given state with nothing held.
    pub fn new(state: UiState) -> Self {
        Self {
            state,
            held: 0,
            notices: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Most recent menu label, if any was set.
    pub fn label(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }
}

impl Host for RecordingHost {
    fn ui_state(&self) -> UiState {
        self.state
    }

    fn notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }

    fn set_menu_label(&mut self, label: &str) {
        self.labels.push(label.to_string());
    }

    fn held_buttons(&self) -> u32 {
        self.held
    }
}

/// A registry with every action bound to a recorder, plus the shared log.
pub fn recording_registry() -> (ActionRegistry, ActionLog) {
    let log: ActionLog = Rc::new(RefCell::new(Vec::new()));
    let mut reg = ActionRegistry::new();
    for action in Action::ALL {
        let log = log.clone();
        reg.bind(action, move || {
            log.borrow_mut().push(action);
            Ok(())
        });
    }
    (reg, log)
}
