// ABOUTME: Integration tests for the HTTP routes
// ABOUTME: Exercises /plan.json and /health through the router without binding a socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use liftplan::routes::{router, AppState};
use liftplan::source::SampleSheetSource;
use liftplan_core::models::PlanResponse;
use tower::ServiceExt;

#[tokio::test]
async fn plan_document_is_normalized_and_uncacheable() -> Result<()> {
    let app = router(AppState::new(Arc::new(SampleSheetSource)));

    let response = app
        .oneshot(Request::builder().uri("/plan.json").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let document: PlanResponse = serde_json::from_slice(&bytes)?;

    assert_eq!(document.plans.len(), 1);
    let plan = &document.plans[0];
    assert!(plan.active);
    assert_eq!(plan.phases.len(), 1);

    // The sample phase splits into two derived weeks, each with its workouts
    // in order.
    let phase = &plan.phases[0];
    let weeks: Vec<f64> = phase.weeks.iter().map(|week| week.week).collect();
    assert_eq!(weeks, [1.0, 2.0]);
    for week in &phase.weeks {
        let orders: Vec<f64> = week.workouts.iter().map(|w| w.order).collect();
        assert!(orders.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    // Linked schema on the wire: the bench press carries its link and a
    // linked substitute.
    let bench = &phase.weeks[0].workouts[0].exercises[0];
    assert_eq!(bench.name, "Bench Press");
    assert!(bench.link.is_some());
    assert!(!bench.subs.is_empty());
    Ok(())
}

#[tokio::test]
async fn health_reports_healthy() -> Result<()> {
    let app = router(AppState::new(Arc::new(SampleSheetSource)));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn missing_sheet_file_maps_to_an_error_response() -> Result<()> {
    let app = router(AppState::new(Arc::new(liftplan::source::FileSheetSource::new(
        "does/not/exist.json",
    ))));

    let response = app
        .oneshot(Request::builder().uri("/plan.json").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    Ok(())
}
