//! Messages posted by embedded web content.
//!
//! The content script reports wheel ticks as
//! `ReviewHotmouse#{"key": "wheel", "value": <deltaY>}`. Anything without the
//! prefix belongs to some other consumer of the same channel.

use serde::Deserialize;
use serde_json::Value;

use crate::WebError;

/// Namespace prefix of hotmouse messages.
pub const MESSAGE_PREFIX: &str = "ReviewHotmouse#";

/// A decoded hotmouse message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebMessage {
    /// A wheel tick with the web content's `deltaY` (negative scrolls up).
    Wheel(i32),
    /// A well-formed request with a key hotmouse does not handle.
    Other(String),
}

/// Wire shape of the payload.
#[derive(Debug, Deserialize)]
struct Request {
    /// Request kind.
    key: String,
    /// Request argument; absent means 0.
    #[serde(default)]
    value: Value,
}

impl WebMessage {
    /// Decode a raw message.
    pub fn parse(message: &str) -> Result<Self, WebError> {
        let payload = message
            .strip_prefix(MESSAGE_PREFIX)
            .ok_or(WebError::ForeignNamespace)?;
        let req: Request =
            serde_json::from_str(payload).map_err(|e| WebError::Payload(e.to_string()))?;
        if req.key != "wheel" {
            return Ok(Self::Other(req.key));
        }
        Ok(Self::Wheel(int_value(&req.value)?))
    }
}

/// Interpret a JSON value as an integer delta, truncating fractions and
/// saturating at the `i32` range. Integer strings are accepted.
fn int_value(v: &Value) -> Result<i32, WebError> {
    let wide: i64 = match v {
        Value::Null => 0,
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
                .ok_or_else(|| WebError::Value(n.to_string()))?,
        },
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| WebError::Value(s.clone()))?,
        other => return Err(WebError::Value(other.to_string())),
    };
    Ok(i32::try_from(wide).unwrap_or(if wide < 0 { i32::MIN } else { i32::MAX }))
}
