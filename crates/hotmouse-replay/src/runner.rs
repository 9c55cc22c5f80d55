//! Drive a session through a script on a virtual clock.

use std::{
    fmt,
    time::{Duration, Instant},
};

use hotmouse_engine::{
    Action, Button, ButtonCodes, ButtonSet, Config, Session, UiState,
    test_support::{ActionLog, RecordingHost, recording_registry},
};
use tracing::debug;

use crate::script::{ScriptState, Step};

/// What the session answered for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The platform default should be suppressed.
    Consumed,
    /// The platform default should run.
    Declined,
    /// The message was not for hotmouse.
    PassThrough,
    /// The step does not ask the session anything.
    Silent,
}

impl From<bool> for Outcome {
    fn from(consumed: bool) -> Self {
        if consumed {
            Self::Consumed
        } else {
            Self::Declined
        }
    }
}

/// Result of replaying one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Position in the script, from 1.
    pub index: usize,
    /// Step name.
    pub step: &'static str,
    /// Virtual time of the step since the start of the script.
    pub elapsed: Duration,
    /// Session answer.
    pub outcome: Outcome,
    /// Actions that ran during the step.
    pub actions: Vec<Action>,
    /// Notices the host was asked to show during the step.
    pub notices: Vec<String>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} +{}ms {}",
            self.index,
            self.elapsed.as_millis(),
            self.step
        )?;
        match self.outcome {
            Outcome::Consumed => write!(f, " consumed")?,
            Outcome::Declined => write!(f, " declined")?,
            Outcome::PassThrough => write!(f, " pass")?,
            Outcome::Silent => {}
        }
        for action in &self.actions {
            write!(f, " action={action}")?;
        }
        for notice in &self.notices {
            write!(f, " notice={notice:?}")?;
        }
        Ok(())
    }
}

/// Replays steps against one session and a recording host.
pub struct Runner {
    /// Session under test.
    session: Session,
    /// Host double.
    host: RecordingHost,
    /// Actions recorded by the registry.
    log: ActionLog,
    /// Raw button numbering used to encode script buttons.
    codes: ButtonCodes,
    /// Origin of the virtual clock.
    start: Instant,
    /// Current offset of the virtual clock.
    offset: Duration,
}

impl Runner {
    /// Build a runner for `config`, starting on the overview screen.
    pub fn new(config: Config) -> Self {
        let (registry, log) = recording_registry();
        let codes = ButtonCodes::default();
        let session = Session::with_codes(config, registry, codes.clone());
        let mut host = RecordingHost::new(UiState::Overview);
        session.install(&mut host);
        Self {
            session,
            host,
            log,
            codes,
            start: Instant::now(),
            offset: Duration::ZERO,
        }
    }

    /// Current menu label.
    pub fn label(&self) -> Option<&str> {
        self.host.label()
    }

    /// True while hotmouse is enabled.
    pub fn enabled(&self) -> bool {
        self.session.enabled()
    }

    /// Replay one step.
    pub fn step(&mut self, index: usize, step: &Step) -> StepReport {
        let at = self.start + self.offset;
        debug!(index, step = step.name(), "replay_step");
        let outcome = match step {
            Step::State(state) => {
                self.host.state = ui_state(*state);
                Outcome::Silent
            }
            Step::Hold(buttons) => {
                self.host.held = self.mask(buttons);
                Outcome::Silent
            }
            Step::Press { held, button } => {
                let held = self.mask(held);
                let code = self.codes.encode(*button);
                self.session.on_press(&mut self.host, held, code, at).into()
            }
            Step::PressCode(code) => {
                let held = self.host.held;
                self.session.on_press(&mut self.host, held, *code, at).into()
            }
            Step::Wheel { delta, held } => {
                let held = self.mask(held);
                self.session.on_wheel(&mut self.host, *delta, held, at).into()
            }
            Step::Web(message) => self
                .session
                .on_web_message(&mut self.host, message, at)
                .map_or(Outcome::PassThrough, Outcome::from),
            Step::ContextMenu => self.session.should_suppress_context_menu(&self.host).into(),
            Step::Toggle => {
                self.session.toggle_on_off(&mut self.host);
                Outcome::Silent
            }
            Step::Wait(ms) => {
                self.offset += Duration::from_millis(*ms);
                Outcome::Silent
            }
        };
        StepReport {
            index,
            step: step.name(),
            elapsed: self.offset,
            outcome,
            actions: self.log.borrow_mut().drain(..).collect(),
            notices: self.host.notices.drain(..).collect(),
        }
    }

    /// Raw held mask for a list of buttons.
    fn mask(&self, buttons: &[Button]) -> u32 {
        let set: ButtonSet = buttons.iter().copied().collect();
        self.codes.mask(&set)
    }
}

/// Host UI state for a script state.
fn ui_state(state: ScriptState) -> UiState {
    match state {
        ScriptState::Overview => UiState::Overview,
        ScriptState::Question => UiState::Question,
        ScriptState::Answer => UiState::Answer,
        ScriptState::Congrats => UiState::ReviewOther,
        ScriptState::Elsewhere => UiState::Elsewhere,
    }
}
