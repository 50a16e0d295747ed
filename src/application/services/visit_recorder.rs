//! Fire-and-forget submission of visits to the background worker.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

use crate::domain::entities::Visit;

/// Hands visits to [`crate::domain::visit_worker::run_visit_worker`].
///
/// Submission never waits and never fails from the caller's point of view:
/// when the queue is full or the worker is gone, the visit is dropped with a
/// warning.
#[derive(Clone)]
pub struct VisitRecorder {
    sender: mpsc::Sender<Visit>,
}

impl VisitRecorder {
    pub fn new(sender: mpsc::Sender<Visit>) -> Self {
        Self { sender }
    }

    /// Records a visit of `alias` at `timestamp` (seconds since epoch).
    pub fn record(&self, alias: &str, timestamp: i64) {
        match self.sender.try_send(Visit::new(alias.to_string(), timestamp)) {
            Ok(()) => {}
            Err(TrySendError::Full(visit)) => {
                warn!(alias = %visit.alias, "Visit queue full, dropping visit");
            }
            Err(TrySendError::Closed(visit)) => {
                warn!(alias = %visit.alias, "Visit queue closed, dropping visit");
            }
        }
    }

    /// Returns true once the worker has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Free slots currently available in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}
