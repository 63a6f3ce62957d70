// ABOUTME: Plan document delivery route
// ABOUTME: Fetches rows, normalizes, wraps with a freshness stamp, and forbids response caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use liftplan_core::constants::routes as paths;
use liftplan_core::models::PlanResponse;
use liftplan_core::normalize::normalize;
use liftplan_core::AppError;
use tracing::debug;

use super::AppState;

/// Routes serving the wrapped plan document
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(paths::PLAN_DOCUMENT, get(plan_document))
        .with_state(state)
}

/// GET `/plan.json`
///
/// The freshness stamp is generated here, at response time; it marks when the
/// data was served, not when it changed. The no-store header keeps browsers
/// and intermediaries from answering for us; the client has its own durable
/// fallback for the offline case.
async fn plan_document(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.source.fetch_rows().await?;
    let plans = normalize(&rows, state.schema);
    debug!(plans = plans.len(), "serving normalized plan document");

    let response = PlanResponse {
        updated_at: Utc::now(),
        plans,
    };
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(response)))
}
