// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optimistic membership set for toggle-style state.
//!
//! A user's belief about which resources are "active" (bookmarked, for
//! example) is held in an [`OptimisticSet`]. A toggle flips membership
//! immediately and returns a [`PendingMutation`]; once the network call
//! settles, [`OptimisticSet::settle`] either confirms the change or restores
//! the membership captured when the toggle began.
//!
//! Per-ref state machine:
//!
//! ```text
//!   ConfirmedInactive ──toggle──► OptimisticActive   ──ok───► ConfirmedActive
//!                                                    ──fail─► ConfirmedInactive
//!   ConfirmedActive   ──toggle──► OptimisticInactive ──ok───► ConfirmedInactive
//!                                                    ──fail─► ConfirmedActive
//! ```
//!
//! # Ordering
//!
//! With [`SettlementPolicy::LastSettledWins`] every settlement is applied in
//! arrival order, so two overlapping toggles on one ref end in whatever state
//! the *last settlement to arrive* implies, which may differ from the user's
//! most recent intent. [`SettlementPolicy::LatestIssuedWins`] tags each
//! mutation with a per-ref sequence number and ignores settlements that are
//! not the newest issued for their ref.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::resource::ResourceRef;

/// Direction of a toggle, as seen by the commit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleIntent {
    Activate,
    Deactivate,
}

impl ToggleIntent {
    fn towards(active: bool) -> Self {
        if active {
            ToggleIntent::Activate
        } else {
            ToggleIntent::Deactivate
        }
    }

    pub fn is_activate(self) -> bool {
        self == ToggleIntent::Activate
    }
}

/// Observable state of a single ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleState {
    ConfirmedInactive,
    OptimisticActive,
    ConfirmedActive,
    OptimisticInactive,
}

impl ToggleState {
    pub fn is_active(self) -> bool {
        matches!(
            self,
            ToggleState::ConfirmedActive | ToggleState::OptimisticActive
        )
    }

    /// True while at least one mutation for the ref is in flight.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            ToggleState::OptimisticActive | ToggleState::OptimisticInactive
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleState::ConfirmedInactive => "confirmed-inactive",
            ToggleState::OptimisticActive => "optimistic-active",
            ToggleState::ConfirmedActive => "confirmed-active",
            ToggleState::OptimisticInactive => "optimistic-inactive",
        }
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How overlapping settlements for the same ref are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettlementPolicy {
    /// Apply every settlement in arrival order.
    #[default]
    #[serde(alias = "last-settled")]
    LastSettledWins,
    /// Apply only the settlement of the newest mutation issued per ref.
    #[serde(alias = "latest-issued")]
    LatestIssuedWins,
}

impl SettlementPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementPolicy::LastSettledWins => "last-settled",
            SettlementPolicy::LatestIssuedWins => "latest-issued",
        }
    }
}

impl fmt::Display for SettlementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SettlementPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "last-settled" | "last-settled-wins" => Ok(SettlementPolicy::LastSettledWins),
            "latest-issued" | "latest-issued-wins" => Ok(SettlementPolicy::LatestIssuedWins),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

/// A single in-flight state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMutation {
    pub reference: ResourceRef,
    /// Membership the user asked for.
    pub intended_active: bool,
    /// Membership immediately before the toggle; restored on failure.
    pub prior_active: bool,
    /// Index the ref occupied before a removal, so rollback keeps ordering.
    pub prior_position: Option<usize>,
    pub started_at: DateTime<Utc>,
    /// Per-ref sequence number, starting at 1.
    pub seq: u64,
}

impl PendingMutation {
    pub fn intent(&self) -> ToggleIntent {
        ToggleIntent::towards(self.intended_active)
    }
}

/// Result of applying a settlement to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The commit succeeded and `active` is now the confirmed membership.
    Confirmed { active: bool },
    /// The commit failed and membership was restored to `active`.
    RolledBack { active: bool },
    /// A newer mutation for the same ref was issued; nothing was applied.
    Superseded,
}

#[derive(Debug, Default, Clone, Copy)]
struct Track {
    last_seq: u64,
    in_flight: u32,
}

/// Ordered set of refs the user currently believes are active.
#[derive(Debug, Default, Clone)]
pub struct OptimisticSet {
    members: Vec<ResourceRef>,
    tracks: HashMap<ResourceRef, Track>,
    policy: SettlementPolicy,
}

impl OptimisticSet {
    /// Creates an empty set with the default settlement policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SettlementPolicy) -> Self {
        OptimisticSet {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> SettlementPolicy {
        self.policy
    }

    pub fn contains(&self, reference: &ResourceRef) -> bool {
        self.members.contains(reference)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceRef> {
        self.members.iter()
    }

    pub fn to_vec(&self) -> Vec<ResourceRef> {
        self.members.clone()
    }

    /// Number of mutations currently in flight across all refs.
    pub fn pending_count(&self) -> usize {
        self.tracks.values().map(|t| t.in_flight as usize).sum()
    }

    pub fn state_of(&self, reference: &ResourceRef) -> ToggleState {
        let active = self.contains(reference);
        let pending = self
            .tracks
            .get(reference)
            .is_some_and(|t| t.in_flight > 0);
        match (active, pending) {
            (true, true) => ToggleState::OptimisticActive,
            (true, false) => ToggleState::ConfirmedActive,
            (false, true) => ToggleState::OptimisticInactive,
            (false, false) => ToggleState::ConfirmedInactive,
        }
    }

    /// Replaces membership with the result of an authoritative fetch.
    ///
    /// Duplicates are dropped, first occurrence wins. Mutations still in
    /// flight keep their sequence numbers and settle against the new state.
    pub fn replace_confirmed<I>(&mut self, refs: I)
    where
        I: IntoIterator<Item = ResourceRef>,
    {
        self.members.clear();
        for r in refs {
            if !self.members.contains(&r) {
                self.members.push(r);
            }
        }
    }

    /// Flips membership of `reference` and records the mutation.
    pub fn begin_toggle(
        &mut self,
        reference: ResourceRef,
        started_at: DateTime<Utc>,
    ) -> PendingMutation {
        let prior_position = self.members.iter().position(|r| r == &reference);
        let prior_active = prior_position.is_some();

        match prior_position {
            Some(idx) => {
                self.members.remove(idx);
            }
            None => self.members.push(reference.clone()),
        }

        let track = self.tracks.entry(reference.clone()).or_default();
        track.last_seq += 1;
        track.in_flight += 1;

        PendingMutation {
            reference,
            intended_active: !prior_active,
            prior_active,
            prior_position,
            started_at,
            seq: track.last_seq,
        }
    }

    /// Applies the outcome of a commit call for `pending`.
    pub fn settle(&mut self, pending: &PendingMutation, succeeded: bool) -> Settlement {
        let track = self.tracks.entry(pending.reference.clone()).or_default();
        track.in_flight = track.in_flight.saturating_sub(1);
        let newest = track.last_seq == pending.seq;

        if self.policy == SettlementPolicy::LatestIssuedWins && !newest {
            return Settlement::Superseded;
        }

        if succeeded {
            self.set_membership(&pending.reference, pending.intended_active, None);
            Settlement::Confirmed {
                active: pending.intended_active,
            }
        } else {
            self.set_membership(
                &pending.reference,
                pending.prior_active,
                pending.prior_position,
            );
            Settlement::RolledBack {
                active: pending.prior_active,
            }
        }
    }

    fn set_membership(&mut self, reference: &ResourceRef, active: bool, position: Option<usize>) {
        let present = self.contains(reference);
        if active && !present {
            let idx = position.map_or(self.members.len(), |p| p.min(self.members.len()));
            self.members.insert(idx, reference.clone());
        } else if !active && present {
            self.members.retain(|r| r != reference);
        }
    }
}

impl FromIterator<ResourceRef> for OptimisticSet {
    fn from_iter<I: IntoIterator<Item = ResourceRef>>(iter: I) -> Self {
        let mut set = OptimisticSet::new();
        set.replace_confirmed(iter);
        set
    }
}

#[cfg(test)]
#[path = "optimistic_tests.rs"]
mod tests;
