//! Time gates that decide whether a raw event becomes a dispatch attempt.
//!
//! Both gates compare against the timestamp carried by the event being
//! handled, never a later clock read, so bursts are judged by when they
//! happened.

use std::time::{Duration, Instant};

use tracing::trace;

/// Coalesces rapid wheel ticks.
///
/// A tick is admitted when more than the threshold has passed since the last
/// *admitted* tick. Swallowed ticks do not move the reference point.
#[derive(Debug, Default, Clone)]
pub struct ScrollGate {
    /// Time of the last admitted tick; `None` until the first one.
    last: Option<Instant>,
}

impl ScrollGate {
    /// A gate that admits the next tick.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide on a tick at `at`; records `at` when admitted.
    pub fn admit(&mut self, at: Instant, threshold: Duration) -> bool {
        if let Some(last) = self.last {
            let elapsed = at.saturating_duration_since(last);
            if elapsed <= threshold {
                trace!(elapsed_ms = elapsed.as_millis() as u64, "scroll_gate_swallow");
                return false;
            }
        }
        self.last = Some(at);
        true
    }

    /// Move the reference point back by `by`, so a tick arriving soon after
    /// is not swallowed.
    pub fn rewind(&mut self, by: Duration) {
        if let Some(last) = self.last {
            // Before the clock's epoch there is nothing left to gate against.
            self.last = last.checked_sub(by);
        }
    }

    /// Time of the last admitted tick.
    pub fn last(&self) -> Option<Instant> {
        self.last
    }
}

/// Suppresses clicks that follow the previous accepted click too closely.
///
/// A zero threshold disables the gate.
#[derive(Debug, Default, Clone)]
pub struct ClickGate {
    /// Time of the last accepted click; `None` until the first one.
    last: Option<Instant>,
}

impl ClickGate {
    /// A gate that accepts the next click.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide on a click at `at`; records `at` when accepted.
    pub fn admit(&mut self, at: Instant, threshold: Duration) -> bool {
        if !threshold.is_zero() {
            if let Some(last) = self.last {
                let elapsed = at.saturating_duration_since(last);
                if elapsed < threshold {
                    trace!(elapsed_ms = elapsed.as_millis() as u64, "click_gate_ignore");
                    return false;
                }
            }
        }
        self.last = Some(at);
        true
    }

    /// Time of the last accepted click.
    pub fn last(&self) -> Option<Instant> {
        self.last
    }
}
