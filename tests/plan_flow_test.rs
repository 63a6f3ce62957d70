// ABOUTME: End-to-end test wiring the client store to a live server over HTTP
// ABOUTME: Server serves the sample plan; the store loads, persists, and survives the server dying
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use std::sync::Arc;

use anyhow::Result;
use liftplan::routes::{router, AppState};
use liftplan::source::SampleSheetSource;
use liftplan_client::storage::MemoryStorage;
use liftplan_client::{HttpPlanFetcher, PlanStore, StorageProvider};
use liftplan_core::constants::storage_keys;

#[tokio::test]
async fn client_store_loads_from_a_live_server() -> Result<()> {
    let app = router(AppState::new(Arc::new(SampleSheetSource)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let storage = Arc::new(MemoryStorage::new());
    let fetcher = Arc::new(HttpPlanFetcher::new(format!("http://{addr}/plan.json")));
    let store = PlanStore::new(storage.clone(), fetcher.clone());

    store.load().await;

    let state = store.snapshot();
    assert_eq!(state.error, None);
    assert!(!state.loading);
    assert_eq!(state.plans.len(), 1);
    assert!(state.last_updated.is_some());
    assert!(storage.get(storage_keys::PLAN_CACHE)?.is_some());

    let active = store.active_plan().map(|plan| plan.id);
    assert_eq!(active.as_deref(), Some("ul_4day"));

    // A second store over the same storage sees the document without any
    // network at all.
    let offline = PlanStore::new(storage, fetcher);
    assert_eq!(offline.plans(), state.plans);
    Ok(())
}
