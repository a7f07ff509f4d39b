// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optimistic toggles with rollback.
//!
//! An [`OptimisticHandle`] owns the [`OptimisticSet`] a view renders from.
//! [`OptimisticHandle::begin_toggle`] flips membership synchronously, so the
//! new state is visible before any network I/O, and returns an
//! [`InFlightToggle`] that applies the commit outcome once it settles.
//!
//! The in-flight toggle keeps only a weak reference to the set. If the view
//! that owned the handle is gone by the time the commit settles, the outcome
//! is reported as [`ToggleOutcome::Detached`] and nothing is applied.
//!
//! The set lock is never held across an await point, and notices are raised
//! only after it is released.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use chrono::Utc;
use sf_core::{
    OptimisticSet, PendingMutation, ResourceRef, Settlement, SettlementPolicy, ToggleIntent,
    ToggleState,
};

use crate::error::{ClientError, ClientResult};
use crate::notice::{Notice, NoticeSink};

const ROLLBACK_TITLE: &str = "Update failed";

/// How a toggle ended.
#[derive(Debug)]
pub enum ToggleOutcome {
    /// The commit succeeded; `active` is the confirmed membership.
    Confirmed { reference: ResourceRef, active: bool },
    /// The commit failed and membership was restored to `active`.
    RolledBack {
        reference: ResourceRef,
        active: bool,
        error: ClientError,
    },
    /// A newer toggle on the same ref owns the outcome; nothing was applied.
    Superseded {
        reference: ResourceRef,
        error: Option<ClientError>,
    },
    /// The owning set was dropped before the commit settled.
    Detached {
        reference: ResourceRef,
        error: Option<ClientError>,
    },
}

impl ToggleOutcome {
    pub fn reference(&self) -> &ResourceRef {
        match self {
            ToggleOutcome::Confirmed { reference, .. }
            | ToggleOutcome::RolledBack { reference, .. }
            | ToggleOutcome::Superseded { reference, .. }
            | ToggleOutcome::Detached { reference, .. } => reference,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ToggleOutcome::Confirmed { .. })
    }

    pub fn is_rolled_back(&self) -> bool {
        matches!(self, ToggleOutcome::RolledBack { .. })
    }
}

/// Shared handle to an optimistic set.
///
/// Cloning is cheap; all clones see the same membership.
#[derive(Debug, Clone, Default)]
pub struct OptimisticHandle {
    inner: Arc<Mutex<OptimisticSet>>,
}

impl OptimisticHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SettlementPolicy) -> Self {
        OptimisticHandle {
            inner: Arc::new(Mutex::new(OptimisticSet::with_policy(policy))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, OptimisticSet> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current membership, in insertion order.
    pub fn snapshot(&self) -> Vec<ResourceRef> {
        self.lock().to_vec()
    }

    pub fn contains(&self, reference: &ResourceRef) -> bool {
        self.lock().contains(reference)
    }

    pub fn state_of(&self, reference: &ResourceRef) -> ToggleState {
        self.lock().state_of(reference)
    }

    pub fn pending_count(&self) -> usize {
        self.lock().pending_count()
    }

    pub fn policy(&self) -> SettlementPolicy {
        self.lock().policy()
    }

    /// Installs the result of an authoritative fetch.
    pub fn replace_confirmed<I>(&self, refs: I)
    where
        I: IntoIterator<Item = ResourceRef>,
    {
        self.lock().replace_confirmed(refs);
    }

    /// Flips `reference` now and returns the mutation awaiting settlement.
    pub fn begin_toggle(&self, reference: ResourceRef) -> InFlightToggle {
        let pending = self.lock().begin_toggle(reference, Utc::now());
        tracing::debug!(
            reference = %pending.reference,
            seq = pending.seq,
            intended = pending.intended_active,
            "optimistic toggle"
        );
        InFlightToggle {
            set: Arc::downgrade(&self.inner),
            pending,
        }
    }
}

/// A toggle whose commit has not settled yet.
#[derive(Debug)]
pub struct InFlightToggle {
    set: Weak<Mutex<OptimisticSet>>,
    pending: PendingMutation,
}

impl InFlightToggle {
    pub fn pending(&self) -> &PendingMutation {
        &self.pending
    }

    pub fn intent(&self) -> ToggleIntent {
        self.pending.intent()
    }

    pub fn reference(&self) -> &ResourceRef {
        &self.pending.reference
    }

    /// Runs `commit` for this toggle's intent, then settles with its result.
    pub async fn settle_with<F, Fut>(self, commit: F, notices: &dyn NoticeSink) -> ToggleOutcome
    where
        F: FnOnce(ToggleIntent) -> Fut,
        Fut: Future<Output = ClientResult<()>>,
    {
        let result = commit(self.intent()).await;
        self.settle(result, notices)
    }

    /// Applies a commit result to the owning set.
    ///
    /// A rollback raises exactly one error notice on `notices`.
    pub fn settle(self, result: ClientResult<()>, notices: &dyn NoticeSink) -> ToggleOutcome {
        let reference = self.pending.reference.clone();

        let Some(set) = self.set.upgrade() else {
            tracing::warn!(%reference, "toggle settled after its set was dropped");
            return ToggleOutcome::Detached {
                reference,
                error: result.err(),
            };
        };

        let settlement = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .settle(&self.pending, result.is_ok());
        drop(set);

        match (settlement, result) {
            (Settlement::Superseded, result) => {
                tracing::debug!(%reference, seq = self.pending.seq, "stale settlement discarded");
                ToggleOutcome::Superseded {
                    reference,
                    error: result.err(),
                }
            }
            (Settlement::Confirmed { active } | Settlement::RolledBack { active }, Ok(())) => {
                ToggleOutcome::Confirmed { reference, active }
            }
            (Settlement::Confirmed { active } | Settlement::RolledBack { active }, Err(error)) => {
                tracing::warn!(%reference, error = %error, "toggle rolled back");
                notices.notify(Notice::from_error(ROLLBACK_TITLE, &error));
                ToggleOutcome::RolledBack {
                    reference,
                    active,
                    error,
                }
            }
        }
    }
}

/// Flips `reference` in `handle`, runs `commit`, and reconciles.
///
/// The flip is visible to other holders of `handle` before `commit` is
/// polled. On failure the membership captured at the flip is restored and
/// one notice is raised.
pub async fn toggle_optimistic<F, Fut>(
    handle: &OptimisticHandle,
    reference: ResourceRef,
    commit: F,
    notices: &dyn NoticeSink,
) -> ToggleOutcome
where
    F: FnOnce(ToggleIntent) -> Fut,
    Fut: Future<Output = ClientResult<()>>,
{
    handle
        .begin_toggle(reference)
        .settle_with(commit, notices)
        .await
}
