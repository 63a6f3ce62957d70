// ABOUTME: Route module organization for the Liftplan HTTP endpoints
// ABOUTME: Domain route modules with thin handlers, layered with tracing and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! HTTP routes.

/// Health check and liveness routes
pub mod health;
/// Plan document delivery route
pub mod plan;

use std::sync::Arc;

use axum::Router;
use liftplan_core::SchemaOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::source::SheetSource;

/// Shared state for the route handlers
#[derive(Clone)]
pub struct AppState {
    /// The row producer behind the plan endpoint
    pub source: Arc<dyn SheetSource>,
    /// Schema version the normalizer emits
    pub schema: SchemaOptions,
}

impl AppState {
    /// State over the given source, emitting the linked schema
    #[must_use]
    pub fn new(source: Arc<dyn SheetSource>) -> Self {
        Self {
            source,
            schema: SchemaOptions::linked(),
        }
    }
}

/// Build the full application router
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(plan::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
