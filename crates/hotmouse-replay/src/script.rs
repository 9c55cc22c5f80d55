//! Replay scripts: a RON list of input steps.

use std::{fs, path::Path};

use mouse_button::Button;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Host UI state a script can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptState {
    /// Deck overview.
    Overview,
    /// Reviewer, question side.
    Question,
    /// Reviewer, answer side.
    Answer,
    /// Reviewer showing neither side.
    Congrats,
    /// Anywhere else.
    Elsewhere,
}

/// One step of a replay script.
///
/// ```ron
/// [
///     state(question),
///     press(held: [left], button: right),
///     wait(400),
///     wheel(delta: -120),
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Switch the host UI state.
    State(ScriptState),
    /// Replace the buttons the host reports as held.
    Hold(Vec<Button>),
    /// Press `button` while `held` are down.
    Press {
        /// Buttons held at the time of the press.
        #[serde(default)]
        held: Vec<Button>,
        /// Button that went down.
        button: Button,
    },
    /// Press a raw host button code, which may be unknown.
    PressCode(u32),
    /// A native wheel tick with the given vertical delta.
    Wheel {
        /// Vertical delta (positive is up).
        delta: i32,
        /// Buttons held during the tick.
        #[serde(default)]
        held: Vec<Button>,
    },
    /// A raw message from embedded web content.
    Web(String),
    /// The toolkit asks whether to show its context menu.
    ContextMenu,
    /// The menu entry toggling hotmouse.
    Toggle,
    /// Advance the virtual clock by this many milliseconds.
    Wait(u64),
}

impl Step {
    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::State(_) => "state",
            Self::Hold(_) => "hold",
            Self::Press { .. } => "press",
            Self::PressCode(_) => "press_code",
            Self::Wheel { .. } => "wheel",
            Self::Web(_) => "web",
            Self::ContextMenu => "context_menu",
            Self::Toggle => "toggle",
            Self::Wait(_) => "wait",
        }
    }
}

/// Parse a script from RON text.
pub fn parse(text: &str) -> Result<Vec<Step>> {
    ron::from_str(text).map_err(|e| Error::Script(e.to_string()))
}

/// Read and parse a script file.
pub fn load(path: &Path) -> Result<Vec<Step>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        let steps = parse(
            r#"[
                state(answer),
                hold([right]),
                press(held: [left], button: right),
                press(button: middle),
                press_code(64),
                wheel(delta: -120, held: [right]),
                wheel(delta: 3),
                web("ReviewHotmouse#{\"key\":\"wheel\",\"value\":1}"),
                context_menu,
                toggle,
                wait(350),
            ]"#,
        )
        .unwrap();
        assert_eq!(steps.len(), 11);
        assert_eq!(steps[0], Step::State(ScriptState::Answer));
        assert_eq!(
            steps[2],
            Step::Press {
                held: vec![Button::Left],
                button: Button::Right
            }
        );
        assert_eq!(
            steps[3],
            Step::Press {
                held: vec![],
                button: Button::Middle
            }
        );
        assert_eq!(
            steps[6],
            Step::Wheel {
                delta: 3,
                held: vec![]
            }
        );
        assert_eq!(steps[10], Step::Wait(350));
    }

    #[test]
    fn rejects_unknown_step() {
        let err = parse("[jump(3)]").unwrap_err();
        assert!(matches!(err, Error::Script(_)));
    }
}
