// ABOUTME: Network port for fetching the wrapped plan document
// ABOUTME: Reqwest-backed implementation that always bypasses intermediary HTTP caches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Plan fetching.
//!
//! The plan store never talks to the network directly; it goes through this
//! port. The HTTP implementation sends no-cache request headers on every
//! fetch: freshness matters more than speed for the plan document, and the
//! store has its own durable fallback for the offline case.

use std::time::Duration;

use async_trait::async_trait;
use liftplan_core::models::PlanResponse;
use liftplan_core::{AppError, AppResult};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, ClientBuilder};

/// Pluggable network backend producing the wrapped plan document
#[async_trait]
pub trait PlanFetcher: Send + Sync {
    /// Fetch the wrapped plan document
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// payload that does not decode into a [`PlanResponse`].
    async fn fetch_plan(&self) -> AppResult<PlanResponse>;
}

/// HTTP implementation over a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpPlanFetcher {
    client: Client,
    url: String,
}

impl HttpPlanFetcher {
    /// Create a fetcher for the plan document at `url`
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PlanFetcher for HttpPlanFetcher {
    async fn fetch_plan(&self) -> AppResult<PlanResponse> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| AppError::external(format!("plan fetch failed: {err}")))?;

        response
            .json::<PlanResponse>()
            .await
            .map_err(|err| AppError::serialization(format!("plan document decode failed: {err}")))
    }
}
