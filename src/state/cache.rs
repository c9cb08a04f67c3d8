//! Shared projector state cache
//!
//! Fed by explicit refreshes on the client thread and by notifications on
//! the listener thread. Every update happens under one lock, so readers
//! never observe a partially applied change.

use parking_lot::Mutex;
use tracing::debug;

use super::ProjectorState;
use crate::protocol::Notification;

/// Latest known projector state
#[derive(Debug, Default)]
pub struct StateCache {
    state: Mutex<Option<ProjectorState>>,
}

impl StateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale after a full fetch
    pub fn replace(&self, state: ProjectorState) {
        *self.state.lock() = Some(state);
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> Option<ProjectorState> {
        self.state.lock().clone()
    }

    /// Fold a notification into the snapshot
    ///
    /// Returns whether the snapshot changed. Without a snapshot there is
    /// nothing to fold into and the notification is dropped.
    pub fn apply(&self, notification: &Notification) -> bool {
        let mut guard = self.state.lock();
        let Some(next) = guard
            .as_ref()
            .and_then(|state| state.with_notification(notification))
        else {
            return false;
        };
        debug!(code = notification.code(), "Notification applied to cached state");
        *guard = Some(next);
        true
    }

    pub fn clear(&self) {
        *self.state.lock() = None;
    }
}
