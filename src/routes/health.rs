// ABOUTME: Health check route for service monitoring
// ABOUTME: Liveness endpoint reporting status and a timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use axum::routing::get;
use axum::{Json, Router};
use liftplan_core::constants::routes as paths;

/// Routes for monitoring and load balancer health checks
pub fn routes() -> Router {
    async fn health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    Router::new().route(paths::HEALTH, get(health))
}
