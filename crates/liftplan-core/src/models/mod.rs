// ABOUTME: Data models for Liftplan, flat source rows and the nested plan document
// ABOUTME: Rows stay loosely typed until normalization; the document is strictly typed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Data models.
//!
//! Two worlds live here. `rows` is the untrusted side: four flat row sets as
//! the spreadsheet integration delivers them, every cell a loose
//! [`serde_json::Value`]. `plan` is the trusted side: the nested, strictly
//! typed document the normalizer produces, plus the wrapped response shape it
//! travels in.

/// Flat, loosely-typed source rows
pub mod rows;

/// The normalized plan document and its delivery wrapper
pub mod plan;

pub use plan::{Exercise, Phase, Plan, PlanResponse, Substitute, Week, Workout};
pub use rows::{ExerciseRow, PhaseRow, PlanRow, SheetData, WorkoutRow};
