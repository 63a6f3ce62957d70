// ABOUTME: Flat source row models as delivered by the spreadsheet integration
// ABOUTME: Every cell is a loose serde_json::Value; absent cells default to Null
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Source rows.
//!
//! The spreadsheet integration is a black box that produces four arrays of
//! loosely-typed rows. A cell may arrive as a string, a number, a boolean, or
//! not at all, so every field is a [`Value`] with `#[serde(default)]` and
//! deserialization never rejects a sheet. The normalizer is the only consumer
//! and funnels each field through exactly one coercion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One training program row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRow {
    /// Unique plan key
    #[serde(default)]
    pub plan_id: Value,
    /// Display name
    #[serde(default)]
    pub plan_name: Value,
    /// Boolean-ish active marker; at most one plan should carry it
    #[serde(default)]
    pub active: Value,
}

/// One multi-week phase row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseRow {
    /// Unique phase key
    #[serde(default)]
    pub phase_id: Value,
    /// Foreign key to the owning plan
    #[serde(default)]
    pub plan_id: Value,
    /// Display name
    #[serde(default)]
    pub phase_name: Value,
    /// Numeric-ish position within the plan
    #[serde(default)]
    pub phase_order: Value,
    /// Numeric-ish declared duration; passthrough, never cross-validated
    #[serde(default)]
    pub weeks_count: Value,
}

/// One training day row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutRow {
    /// Unique workout key
    #[serde(default)]
    pub workout_id: Value,
    /// Foreign key to the owning phase
    #[serde(default)]
    pub phase_id: Value,
    /// Numeric-ish week the workout belongs to
    #[serde(default)]
    pub week_number: Value,
    /// Display name for the day (e.g. "Push #1")
    #[serde(default)]
    pub day_name: Value,
    /// Numeric-ish position within the week
    #[serde(default)]
    pub workout_order: Value,
    /// Free-text focus tag (e.g. "Legs")
    #[serde(default)]
    pub focus: Value,
}

/// One prescribed movement row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseRow {
    /// Unique exercise key
    #[serde(default)]
    pub exercise_id: Value,
    /// Foreign key to the owning workout
    #[serde(default)]
    pub workout_id: Value,
    /// Numeric-ish position within the workout
    #[serde(default)]
    pub order: Value,
    /// Movement name
    #[serde(default)]
    pub name: Value,
    /// Warm-up set prescription, kept as free text ("3-4")
    #[serde(default)]
    pub warmup_sets: Value,
    /// Working set prescription, kept as free text
    #[serde(default)]
    pub working_sets: Value,
    /// Rep prescription
    #[serde(default)]
    pub reps: Value,
    /// Load prescription
    #[serde(default)]
    pub load: Value,
    /// Target RPE
    #[serde(default)]
    pub rpe: Value,
    /// Rest prescription
    #[serde(default)]
    pub rest: Value,
    /// First substitute movement name
    #[serde(default)]
    pub sub1: Value,
    /// Companion link for the first substitute (linked schema only)
    #[serde(default)]
    pub sub1_link: Value,
    /// Second substitute movement name
    #[serde(default)]
    pub sub2: Value,
    /// Companion link for the second substitute (linked schema only)
    #[serde(default)]
    pub sub2_link: Value,
    /// Coaching notes
    #[serde(default)]
    pub notes: Value,
    /// Superset group tag
    #[serde(default)]
    pub group: Value,
    /// Demonstration link for the exercise itself (linked schema only)
    #[serde(default)]
    pub link: Value,
}

/// The four row sets a single sheet fetch produces
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetData {
    /// Plan rows, source order significant as a sort tiebreak
    #[serde(default)]
    pub plans: Vec<PlanRow>,
    /// Phase rows
    #[serde(default)]
    pub phases: Vec<PhaseRow>,
    /// Workout rows
    #[serde(default)]
    pub workouts: Vec<WorkoutRow>,
    /// Exercise rows
    #[serde(default)]
    pub exercises: Vec<ExerciseRow>,
}
