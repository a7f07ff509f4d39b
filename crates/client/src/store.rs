// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session state holder.
//!
//! Owns the current [`AppState`] and publishes every transition to
//! subscribers.

use std::sync::{Arc, Mutex, PoisonError};

use sf_core::{reduce, Action, AppState};
use tokio::sync::broadcast;

/// Buffered transitions per subscriber before the oldest are dropped.
const CHANNEL_CAPACITY: usize = 64;

/// Shared, observable session state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    state: Mutex<Arc<AppState>>,
    broadcast_tx: broadcast::Sender<Arc<AppState>>,
}

impl SessionStore {
    pub fn new(initial: AppState) -> Self {
        let (broadcast_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        SessionStore {
            inner: Arc::new(SessionStoreInner {
                state: Mutex::new(Arc::new(initial)),
                broadcast_tx,
            }),
        }
    }

    /// The current state.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.state.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Applies `action` and notifies subscribers with the resulting state.
    pub fn dispatch(&self, action: Action) -> Arc<AppState> {
        let next = {
            let mut state = self.inner.state.lock().unwrap_or_else(PoisonError::into_inner);
            let next = Arc::new(reduce(&state, action));
            *state = Arc::clone(&next);
            next
        };
        tracing::debug!(logged_in = next.is_logged_in(), role = %next.role, "session updated");
        // No subscribers is not an error.
        let _ = self.inner.broadcast_tx.send(Arc::clone(&next));
        next
    }

    /// Receives every state produced by later dispatches.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<AppState>> {
        self.inner.broadcast_tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new(AppState::default())
    }
}
