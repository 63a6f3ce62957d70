// ABOUTME: Static plan-document exporter for offline hosting
// ABOUTME: Normalizes fetched rows and writes the wrapped document to a fixed path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Static export.
//!
//! The static fallback file has the identical shape to the live endpoint's
//! response and goes through the same normalizer, so the two delivery paths
//! cannot drift apart.

use std::fs;
use std::path::Path;

use chrono::Utc;
use liftplan_core::models::{PlanResponse, SheetData};
use liftplan_core::normalize::{normalize, SchemaOptions};
use liftplan_core::AppResult;
use tracing::info;

/// Normalize `data` and write the wrapped document to `out_path`.
///
/// Parent directories are created as needed. Returns the document that was
/// written.
///
/// # Errors
///
/// Returns an error when the output cannot be serialized or written.
pub fn write_plan_document(
    data: &SheetData,
    schema: SchemaOptions,
    out_path: &Path,
) -> AppResult<PlanResponse> {
    let response = PlanResponse {
        updated_at: Utc::now(),
        plans: normalize(data, schema),
    };

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let raw = serde_json::to_string_pretty(&response)?;
    fs::write(out_path, raw)?;

    info!(
        path = %out_path.display(),
        plans = response.plans.len(),
        "wrote static plan document"
    );
    Ok(response)
}
