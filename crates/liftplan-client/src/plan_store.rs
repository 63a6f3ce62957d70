// ABOUTME: The plan cache/store, a state container over the normalized plan document
// ABOUTME: Hydrates from durable storage, refreshes network-first, falls back to last-known-good
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Plan cache/store.
//!
//! Stale-but-available data beats a visible error: a failed refresh that can
//! be covered by the persisted copy clears the error instead of surfacing it.
//! A malformed persisted copy is treated as a cache miss, never a crash.
//!
//! Overlapping [`PlanStore::load`] calls follow a supersede contract: each
//! call takes a generation ticket, and a response whose ticket is no longer
//! current is dropped, so an older fetch resolving late cannot overwrite the
//! result of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use liftplan_core::constants::storage_keys;
use liftplan_core::models::{Plan, PlanResponse};
use tracing::{debug, warn};

use crate::fetch::PlanFetcher;
use crate::storage::StorageProvider;

/// Observable store state, cloned out as a snapshot
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    /// The normalized plans, empty until a load or hydration succeeds
    pub plans: Vec<Plan>,
    /// Whether a load is in flight
    pub loading: bool,
    /// Human-readable failure, only when no usable data covered it
    pub error: Option<String>,
    /// Freshness stamp of the data currently held
    pub last_updated: Option<DateTime<Utc>>,
}

impl PlanState {
    /// The plan the viewer should open on: the first marked active, else the
    /// first in source order, else nothing.
    #[must_use]
    pub fn active_plan(&self) -> Option<&Plan> {
        self.plans
            .iter()
            .find(|plan| plan.active)
            .or_else(|| self.plans.first())
    }
}

/// Client-side holder of the normalized plan document
pub struct PlanStore {
    storage: Arc<dyn StorageProvider>,
    fetcher: Arc<dyn PlanFetcher>,
    state: RwLock<PlanState>,
    generation: AtomicU64,
}

impl PlanStore {
    /// Create a store over the given ports, hydrating synchronously from the
    /// persisted plan document so a previous fetch renders immediately.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageProvider>, fetcher: Arc<dyn PlanFetcher>) -> Self {
        let mut state = PlanState::default();
        if let Some(cached) = read_cached(storage.as_ref()) {
            debug!(plans = cached.plans.len(), "hydrated plan document from storage");
            state.plans = cached.plans;
            state.last_updated = Some(cached.updated_at);
        }
        Self {
            storage,
            fetcher,
            state: RwLock::new(state),
            generation: AtomicU64::new(0),
        }
    }

    /// Refresh the document network-first.
    ///
    /// On success the fetched document replaces the state and is persisted
    /// whole under the plan-cache key. On failure the store recovers from the
    /// persisted copy when one parses, clearing the error; otherwise the
    /// error stays visible and the plans keep their previous value. Loading
    /// is cleared on every exit path that still owns the state.
    pub async fn load(&self) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.write_state();
            state.loading = true;
            state.error = None;
        }

        let result = self.fetcher.fetch_plan().await;

        let mut state = self.write_state();
        if self.generation.load(Ordering::SeqCst) != ticket {
            // A newer load owns the state now; this response is stale.
            return;
        }
        match result {
            Ok(response) => {
                self.persist(&response);
                state.plans = response.plans;
                state.last_updated = Some(response.updated_at);
            }
            Err(err) => {
                warn!(error = %err, "plan fetch failed, trying the persisted copy");
                state.error = Some(err.to_string());
                if let Some(cached) = read_cached(self.storage.as_ref()) {
                    state.plans = cached.plans;
                    state.last_updated = Some(cached.updated_at);
                    state.error = None;
                }
            }
        }
        state.loading = false;
    }

    /// Clone out the current state
    #[must_use]
    pub fn snapshot(&self) -> PlanState {
        self.read_state().clone()
    }

    /// The plans currently held
    #[must_use]
    pub fn plans(&self) -> Vec<Plan> {
        self.read_state().plans.clone()
    }

    /// Whether a load is in flight
    #[must_use]
    pub fn loading(&self) -> bool {
        self.read_state().loading
    }

    /// The current failure message, if any
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    /// Freshness stamp of the data currently held
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.read_state().last_updated
    }

    /// The plan the viewer should open on; see [`PlanState::active_plan`]
    #[must_use]
    pub fn active_plan(&self) -> Option<Plan> {
        self.read_state().active_plan().cloned()
    }

    fn persist(&self, response: &PlanResponse) {
        match serde_json::to_string(response) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(storage_keys::PLAN_CACHE, &raw) {
                    warn!(error = %err, "failed to persist plan document");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize plan document for persistence"),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, PlanState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, PlanState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Read and parse the persisted plan document; any failure is a cache miss.
fn read_cached(storage: &dyn StorageProvider) -> Option<PlanResponse> {
    let raw = match storage.get(storage_keys::PLAN_CACHE) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(error = %err, "failed to read the persisted plan document");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(response) => Some(response),
        Err(err) => {
            warn!(error = %err, "persisted plan document is malformed, treating as missing");
            None
        }
    }
}
