//! # Transition Timer
//!
//! Releases the navigation lock once the slide transition has played out.
//!
//! Each accepted transition spawns a fire-and-forget tokio task that sleeps
//! for `D` and then sends `Action::TransitionElapsed` back to the event loop.
//! The loop keeps handling (and dropping) input in the meantime. Nothing is
//! cancelled during normal operation; `cancel_all` exists for teardown so no
//! task outlives the deck it was unlocking.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::core::action::Action;

pub struct TransitionTimer {
    tx: mpsc::Sender<Action>,
    pending: Vec<AbortHandle>,
}

impl TransitionTimer {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
        }
    }

    /// Schedule `Action::TransitionElapsed` after `after`. Must be called inside a tokio runtime.
    pub fn schedule(&mut self, after: Duration) {
        self.pending.retain(|handle| !handle.is_finished());

        let tx = self.tx.clone();
        debug!("Scheduling unlock in {}ms", after.as_millis());
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(Action::TransitionElapsed).is_err() {
                warn!("Failed to send TransitionElapsed: receiver dropped");
            }
        });
        self.pending.push(handle.abort_handle());
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Abort every pending timer. Used on teardown.
    pub fn cancel_all(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TransitionTimer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
