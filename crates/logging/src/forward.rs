//! Forward tracing events to the host.
//!
//! This module provides a small tracing [`Layer`] that forwards rendered log
//! events into a `crossbeam-channel` sink when one is set. Hosts without a
//! console use it to surface engine warnings (unknown buttons, failing
//! actions) in their own log view.
//!
//! Usage:
//! - Call [`set_sink`] with a `crossbeam_channel::Sender<RenderedLog>`.
//! - Install the [`layer`] in your tracing subscriber. When a sink is present,
//!   events are forwarded as [`RenderedLog`] values.
//! - Call [`clear_sink`] when the receiver goes away.
//!
//! The layer is lightweight and no-ops when no sink is set.

use std::sync::{
    OnceLock,
    atomic::{AtomicU64, Ordering},
};

use crossbeam_channel::{Sender, TrySendError};
use parking_lot::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::fmt::{self, RenderedLog};

/// A global sink that, when present, receives forwarded events.
static LOG_SINK: OnceLock<Mutex<Option<Sender<RenderedLog>>>> = OnceLock::new();

/// Count of log events dropped due to a full sink.
static LOG_DROPS: OnceLock<AtomicU64> = OnceLock::new();

/// Access the global sink.
fn sink() -> &'static Mutex<Option<Sender<RenderedLog>>> {
    LOG_SINK.get_or_init(|| Mutex::new(None))
}

/// Set the forwarding sink.
pub fn set_sink(tx: Sender<RenderedLog>) {
    let mut guard = sink().lock();
    *guard = Some(tx);
}

/// Clear the forwarding sink.
pub fn clear_sink() {
    let mut guard = sink().lock();
    *guard = None;
}

/// Number of events dropped because the sink was full.
pub fn dropped() -> u64 {
    LOG_DROPS
        .get_or_init(|| AtomicU64::new(0))
        .load(Ordering::SeqCst)
}

/// Tracing layer that forwards events to the sink when one is set.
pub struct ForwardLayer;

impl<S> Layer<S> for ForwardLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Early-exit if there is no sink set
        let tx_opt = { sink().lock().clone() };
        let Some(tx) = tx_opt else { return };

        match tx.try_send(fmt::render_event(event)) {
            Ok(()) => {}
            Err(TrySendError::Disconnected(_)) => {
                // Receiver disappeared; clear to avoid repeated work.
                clear_sink();
            }
            Err(TrySendError::Full(_)) => {
                let ctr = LOG_DROPS.get_or_init(|| AtomicU64::new(0));
                let _prev = ctr.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
}

/// Create the forwarding layer instance to add to your subscriber.
pub fn layer() -> ForwardLayer {
    ForwardLayer
}

#[cfg(test)]
mod tests {
    use tracing::subscriber;
    use tracing_subscriber::{prelude::*, registry};

    use super::*;

    #[test]
    fn forwards_rendered_events() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        set_sink(tx);
        subscriber::with_default(registry().with(layer()), || {
            tracing::warn!(code = 64, "unknown_button");
            // Sink is full now; this one is counted as dropped.
            tracing::warn!("second");
        });
        clear_sink();

        let got = rx.try_recv().unwrap();
        assert_eq!(got.level, "WARN");
        assert_eq!(got.message, "unknown_button code=64");
        assert!(rx.try_recv().is_err());
        assert!(dropped() >= 1);
    }
}
