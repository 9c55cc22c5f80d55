//! Render `tracing` events as single logfmt lines.

use std::fmt::Debug;

use tracing::{
    Event,
    field::{Field, Visit},
};

/// A tracing event flattened for display outside the subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLog {
    /// Severity level (`WARN`, `DEBUG`, ...).
    pub level: String,
    /// Event target, usually the module path.
    pub target: String,
    /// The event message followed by its other fields as `key=value`.
    pub message: String,
}

/// Collects an event's message and its remaining fields in recording order.
#[derive(Default)]
struct Fields {
    /// The `message` field, if the event has one.
    message: Option<String>,
    /// Every other field, already rendered.
    pairs: Vec<String>,
}

impl Fields {
    /// Store `value` under `field`.
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.pairs.push(format!("{}={}", field.name(), value));
        }
    }

    /// Message first, then the pairs, space separated.
    fn render(self) -> String {
        self.message
            .into_iter()
            .chain(self.pairs)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        let rendered = if field.name() != "message" && needs_quotes(value) {
            format!("{value:?}")
        } else {
            value.to_string()
        };
        self.push(field, rendered);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.push(field, format!("{value:?}"));
    }
}

/// Values that would not survive as a bare logfmt token.
fn needs_quotes(value: &str) -> bool {
    value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '=' || c == '"')
}

/// Flatten `event` into a [`RenderedLog`].
pub fn render_event(event: &Event<'_>) -> RenderedLog {
    let meta = event.metadata();
    let mut fields = Fields::default();
    event.record(&mut fields);
    RenderedLog {
        level: meta.level().to_string(),
        target: meta.target().to_string(),
        message: fields.render(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing::{Subscriber, subscriber};
    use tracing_subscriber::{
        layer::{Context, Layer},
        prelude::*,
        registry,
    };

    use super::*;

    /// Layer that keeps every rendered event.
    struct Capture(Arc<Mutex<Vec<RenderedLog>>>);

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(render_event(event));
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<RenderedLog> {
        let out = Arc::new(Mutex::new(Vec::new()));
        subscriber::with_default(registry().with(Capture(out.clone())), f);
        out.lock().unwrap().clone()
    }

    #[test]
    fn message_leads_fields() {
        let logs = capture(|| {
            tracing::debug!(key = "a_wheel_up", action = "good", "dispatch");
        });
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, "DEBUG");
        assert_eq!(logs[0].message, "dispatch key=a_wheel_up action=good");
    }

    #[test]
    fn awkward_strings_are_quoted() {
        let logs = capture(|| {
            tracing::warn!(reason = "nothing to undo", empty = "", "action_failed");
        });
        assert_eq!(
            logs[0].message,
            "action_failed reason=\"nothing to undo\" empty=\"\""
        );
    }

    #[test]
    fn fields_without_message() {
        let logs = capture(|| {
            tracing::info!(shortcuts = 3, has_wheel = true);
        });
        assert_eq!(logs[0].message, "shortcuts=3 has_wheel=true");
    }
}
