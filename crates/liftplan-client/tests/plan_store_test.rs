// ABOUTME: Integration tests for the plan cache/store
// ABOUTME: Covers hydration, network-first load, cache fallback, and the supersede contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use liftplan_client::storage::{MemoryStorage, StorageProvider};
use liftplan_client::{PlanFetcher, PlanStore};
use liftplan_core::constants::storage_keys;
use liftplan_core::models::{Plan, PlanResponse};
use liftplan_core::{AppError, AppResult};
use tokio::sync::Notify;

/// Helper: a plan with no phases, enough for store-level assertions
fn plan(id: &str, active: bool) -> Plan {
    Plan {
        id: id.to_owned(),
        name: format!("Plan {id}"),
        active,
        phases: Vec::new(),
    }
}

fn response(plan_id: &str) -> PlanResponse {
    PlanResponse {
        updated_at: Utc::now(),
        plans: vec![plan(plan_id, true)],
    }
}

/// Helper: fetcher that replays a scripted sequence of results
struct StubFetcher {
    responses: Mutex<VecDeque<AppResult<PlanResponse>>>,
}

impl StubFetcher {
    fn new(responses: Vec<AppResult<PlanResponse>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
        })
    }
}

#[async_trait]
impl PlanFetcher for StubFetcher {
    async fn fetch_plan(&self) -> AppResult<PlanResponse> {
        let mut responses = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        responses
            .pop_front()
            .unwrap_or_else(|| Err(AppError::external("no scripted response left")))
    }
}

#[tokio::test]
async fn load_replaces_state_and_persists() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let fetcher = StubFetcher::new(vec![Ok(response("fresh"))]);
    let store = PlanStore::new(storage.clone(), fetcher);

    store.load().await;

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.plans.len(), 1);
    assert_eq!(state.plans[0].id, "fresh");
    assert!(state.last_updated.is_some());
    assert!(storage.get(storage_keys::PLAN_CACHE)?.is_some());
    Ok(())
}

#[tokio::test]
async fn failed_load_with_cache_recovers_silently() -> Result<()> {
    // First load succeeds and persists; the second fails but the persisted
    // copy covers it, so no error stays visible.
    let storage = Arc::new(MemoryStorage::new());
    let fetcher = StubFetcher::new(vec![
        Ok(response("good")),
        Err(AppError::external("connection refused")),
    ]);
    let store = PlanStore::new(storage, fetcher);

    store.load().await;
    store.load().await;

    let state = store.snapshot();
    assert_eq!(state.error, None);
    assert_eq!(state.plans[0].id, "good");
    assert!(!state.loading);
    Ok(())
}

#[tokio::test]
async fn failed_load_without_cache_surfaces_the_error() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let fetcher = StubFetcher::new(vec![Err(AppError::external("connection refused"))]);
    let store = PlanStore::new(storage, fetcher);

    store.load().await;

    let state = store.snapshot();
    assert!(state.error.as_deref().is_some_and(|msg| !msg.is_empty()));
    assert!(state.plans.is_empty());
    assert!(!state.loading);
    Ok(())
}

#[tokio::test]
async fn fresh_store_hydrates_from_persisted_document() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let first = PlanStore::new(
        storage.clone(),
        StubFetcher::new(vec![Ok(response("persisted"))]),
    );
    first.load().await;
    let expected = first.snapshot();

    // A new store over the same storage sees the document before any load.
    let second = PlanStore::new(storage, StubFetcher::new(vec![]));
    let state = second.snapshot();
    assert_eq!(state.plans, expected.plans);
    assert_eq!(state.last_updated, expected.last_updated);
    assert_eq!(state.error, None);
    Ok(())
}

#[tokio::test]
async fn malformed_cache_is_a_miss_not_a_crash() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(storage_keys::PLAN_CACHE, "definitely not json")?;

    let fetcher = StubFetcher::new(vec![Err(AppError::external("offline"))]);
    let store = PlanStore::new(storage, fetcher);
    assert!(store.plans().is_empty());

    store.load().await;

    // No recovery possible: error stays visible, plans stay empty.
    let state = store.snapshot();
    assert!(state.error.is_some());
    assert!(state.plans.is_empty());
    Ok(())
}

#[tokio::test]
async fn active_plan_prefers_the_marked_plan_then_the_first() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let fetcher = StubFetcher::new(vec![Ok(PlanResponse {
        updated_at: Utc::now(),
        plans: vec![plan("first", false), plan("chosen", true)],
    })]);
    let store = PlanStore::new(storage.clone(), fetcher);

    assert!(store.active_plan().is_none());

    store.load().await;
    assert_eq!(store.active_plan().map(|p| p.id), Some("chosen".to_owned()));

    // With no active marker the first plan wins.
    let fallback = PlanStore::new(
        Arc::new(MemoryStorage::new()),
        StubFetcher::new(vec![Ok(PlanResponse {
            updated_at: Utc::now(),
            plans: vec![plan("a", false), plan("b", false)],
        })]),
    );
    fallback.load().await;
    assert_eq!(fallback.active_plan().map(|p| p.id), Some("a".to_owned()));
    Ok(())
}

/// Helper: first call blocks until released and returns "stale";
/// later calls return "fresh" immediately.
struct GatedFetcher {
    calls: AtomicU64,
    release: Notify,
}

impl GatedFetcher {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicU64::new(0),
            release: Notify::new(),
        })
    }
}

#[async_trait]
impl PlanFetcher for GatedFetcher {
    async fn fetch_plan(&self) -> AppResult<PlanResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            self.release.notified().await;
            Ok(response("stale"))
        } else {
            Ok(response("fresh"))
        }
    }
}

#[tokio::test]
async fn newer_load_supersedes_an_in_flight_one() -> Result<()> {
    let storage = Arc::new(MemoryStorage::new());
    let fetcher = GatedFetcher::new();
    let store = Arc::new(PlanStore::new(storage, fetcher.clone()));

    let first = {
        let store = store.clone();
        tokio::spawn(async move { store.load().await })
    };
    // Let the first load reach its blocked fetch before starting the second.
    while fetcher.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    store.load().await;
    assert_eq!(store.plans()[0].id, "fresh");

    // Release the stale response; it must not overwrite the newer result.
    fetcher.release.notify_one();
    first.await?;
    assert_eq!(store.plans()[0].id, "fresh");
    assert!(!store.loading());
    Ok(())
}
