// ABOUTME: Application constants organized by domain
// ABOUTME: Durable storage keys, route paths, and server defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Constants module, grouped by domain.

/// Durable client storage keys
///
/// Each key is an independent namespace: the plan document cache, the three
/// completion-mark namespaces, and the progress metadata. Corruption of one
/// entry never affects hydration of the others.
pub mod storage_keys {
    /// Full wrapped plan document, exactly as fetched
    pub const PLAN_CACHE: &str = "liftplan.plan-cache";
    /// Workout-level completion marks, keyed `phaseId:week:workoutId`
    pub const WORKOUT_COMPLETIONS: &str = "liftplan.progress.workouts";
    /// Exercise-level completion marks, keyed `phaseId:week:workoutId:exerciseId`
    pub const EXERCISE_COMPLETIONS: &str = "liftplan.progress.exercises";
    /// Warm-up completion marks, keyed `phaseId:week:workoutId:exerciseId:warmup`
    pub const WARMUP_COMPLETIONS: &str = "liftplan.progress.warmups";
    /// Progress metadata (currently the last workout date)
    pub const PROGRESS_META: &str = "liftplan.progress.meta";
}

/// HTTP route paths
pub mod routes {
    /// The wrapped plan document endpoint, also the static fallback filename
    pub const PLAN_DOCUMENT: &str = "/plan.json";
    /// Liveness endpoint
    pub const HEALTH: &str = "/health";
}

/// Server and tooling defaults
pub mod defaults {
    /// HTTP port when `HTTP_PORT` is not set
    pub const HTTP_PORT: u16 = 8080;
    /// Default output path for the static plan document
    pub const PLAN_EXPORT_PATH: &str = "public/plan.json";
}
