use thiserror::Error;

/// Failure reported by an action body.
///
/// Action failures never escape the dispatcher: they are logged and the event
/// still counts as consumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The host tried to run the action and failed.
    #[error("action failed: {0}")]
    Failed(String),
}

impl ActionError {
    /// Helper for wrapping generic failure messages.
    pub fn failed<M: Into<String>>(msg: M) -> Self {
        Self::Failed(msg.into())
    }
}

/// Reasons an embedded web message is not handled by hotmouse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebError {
    /// The message belongs to a different namespace.
    #[error("message is not in the hotmouse namespace")]
    ForeignNamespace,

    /// The payload after the prefix is not a JSON object of the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),

    /// The `value` field is present but not an integer.
    #[error("non-numeric value: {0}")]
    Value(String),
}
