// ABOUTME: The progress store, completion marks per workout, exercise, and warm-up
// ABOUTME: Composite string keys, idempotent toggles, write-through persistence per namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Progress tracking.
//!
//! Three independent namespaces of completion marks, each keyed by a
//! composite string key and persisted under its own storage key, plus the
//! derived last-workout date. Marks change only on explicit user toggles;
//! the plan pipeline never touches them, and nothing expires.
//!
//! Every mutation persists its namespace immediately and synchronously after
//! the in-memory update. Hydration is defensive per namespace: one corrupt
//! entry resets only itself.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Local, NaiveDate, Utc};
use liftplan_core::constants::storage_keys;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::StorageProvider;

/// A timestamped record that a workout, exercise, or warm-up was performed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// When the mark was toggled on
    pub completed_at: DateTime<Utc>,
}

/// Progress metadata persisted alongside the mark namespaces
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressMeta {
    last_workout_date: Option<NaiveDate>,
}

type Marks = HashMap<String, Completion>;

#[derive(Debug, Default)]
struct ProgressState {
    workouts: Marks,
    exercises: Marks,
    warmups: Marks,
    meta: ProgressMeta,
}

/// Client-side state machine for completion marks
pub struct ProgressStore {
    storage: Arc<dyn StorageProvider>,
    state: RwLock<ProgressState>,
}

impl ProgressStore {
    /// Create a store over the given storage, hydrating each namespace
    /// independently. A corrupt entry resets only its own namespace.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        let state = ProgressState {
            workouts: hydrate_marks(storage.as_ref(), storage_keys::WORKOUT_COMPLETIONS),
            exercises: hydrate_marks(storage.as_ref(), storage_keys::EXERCISE_COMPLETIONS),
            warmups: hydrate_marks(storage.as_ref(), storage_keys::WARMUP_COMPLETIONS),
            meta: hydrate_meta(storage.as_ref()),
        };
        Self {
            storage,
            state: RwLock::new(state),
        }
    }

    /// Flip the workout-level mark; returns whether it is now present.
    ///
    /// Toggling on stamps the completion time and sets the last-workout date
    /// to today. Toggling off removes the mark and clears the date, even when
    /// another workout completed the same day still has its mark.
    pub fn toggle_completion(&self, phase_id: &str, week: f64, workout_id: &str) -> bool {
        let key = workout_key(phase_id, week, workout_id);
        let mut state = self.write_state();
        let completed = toggle(&mut state.workouts, key);
        state.meta.last_workout_date = completed.then(|| Local::now().date_naive());
        self.persist_marks(storage_keys::WORKOUT_COMPLETIONS, &state.workouts);
        self.persist_meta(&state.meta);
        completed
    }

    /// Flip the exercise-level mark; returns whether it is now present
    pub fn toggle_exercise(
        &self,
        phase_id: &str,
        week: f64,
        workout_id: &str,
        exercise_id: &str,
    ) -> bool {
        let key = exercise_key(phase_id, week, workout_id, exercise_id);
        let mut state = self.write_state();
        let completed = toggle(&mut state.exercises, key);
        self.persist_marks(storage_keys::EXERCISE_COMPLETIONS, &state.exercises);
        completed
    }

    /// Flip the warm-up mark; returns whether it is now present
    pub fn toggle_warmup(
        &self,
        phase_id: &str,
        week: f64,
        workout_id: &str,
        exercise_id: &str,
    ) -> bool {
        let key = warmup_key(phase_id, week, workout_id, exercise_id);
        let mut state = self.write_state();
        let completed = toggle(&mut state.warmups, key);
        self.persist_marks(storage_keys::WARMUP_COMPLETIONS, &state.warmups);
        completed
    }

    /// Whether the workout-level mark is present
    #[must_use]
    pub fn is_completed(&self, phase_id: &str, week: f64, workout_id: &str) -> bool {
        self.read_state()
            .workouts
            .contains_key(&workout_key(phase_id, week, workout_id))
    }

    /// Whether the exercise-level mark is present
    #[must_use]
    pub fn is_exercise_completed(
        &self,
        phase_id: &str,
        week: f64,
        workout_id: &str,
        exercise_id: &str,
    ) -> bool {
        self.read_state()
            .exercises
            .contains_key(&exercise_key(phase_id, week, workout_id, exercise_id))
    }

    /// Whether the warm-up mark is present
    #[must_use]
    pub fn is_warmup_completed(
        &self,
        phase_id: &str,
        week: f64,
        workout_id: &str,
        exercise_id: &str,
    ) -> bool {
        self.read_state()
            .warmups
            .contains_key(&warmup_key(phase_id, week, workout_id, exercise_id))
    }

    /// Local calendar date of the most recent workout-level toggle-on
    #[must_use]
    pub fn last_workout_date(&self) -> Option<NaiveDate> {
        self.read_state().meta.last_workout_date
    }

    /// Full reset: empty every namespace and remove the persisted entries
    pub fn clear(&self) {
        let mut state = self.write_state();
        state.workouts.clear();
        state.exercises.clear();
        state.warmups.clear();
        state.meta = ProgressMeta::default();
        drop(state);

        for key in [
            storage_keys::WORKOUT_COMPLETIONS,
            storage_keys::EXERCISE_COMPLETIONS,
            storage_keys::WARMUP_COMPLETIONS,
            storage_keys::PROGRESS_META,
        ] {
            if let Err(err) = self.storage.remove(key) {
                warn!(key, error = %err, "failed to remove persisted progress entry");
            }
        }
    }

    fn persist_marks(&self, key: &'static str, marks: &Marks) {
        match serde_json::to_string(marks) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(key, &raw) {
                    warn!(key, error = %err, "failed to persist completion marks");
                }
            }
            Err(err) => warn!(key, error = %err, "failed to serialize completion marks"),
        }
    }

    fn persist_meta(&self, meta: &ProgressMeta) {
        match serde_json::to_string(meta) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(storage_keys::PROGRESS_META, &raw) {
                    warn!(error = %err, "failed to persist progress metadata");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize progress metadata"),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ProgressState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ProgressState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Flip presence of a mark; inserting stamps the completion time
fn toggle(marks: &mut Marks, key: String) -> bool {
    if marks.remove(&key).is_some() {
        false
    } else {
        marks.insert(
            key,
            Completion {
                completed_at: Utc::now(),
            },
        );
        true
    }
}

fn hydrate_marks(storage: &dyn StorageProvider, key: &str) -> Marks {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Marks::default(),
        Err(err) => {
            warn!(key, error = %err, "failed to read completion marks");
            return Marks::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        warn!(key, error = %err, "corrupt completion marks, resetting this namespace");
        Marks::default()
    })
}

fn hydrate_meta(storage: &dyn StorageProvider) -> ProgressMeta {
    let raw = match storage.get(storage_keys::PROGRESS_META) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ProgressMeta::default(),
        Err(err) => {
            warn!(error = %err, "failed to read progress metadata");
            return ProgressMeta::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        warn!(error = %err, "corrupt progress metadata, resetting");
        ProgressMeta::default()
    })
}

fn workout_key(phase_id: &str, week: f64, workout_id: &str) -> String {
    format!("{phase_id}:{week}:{workout_id}")
}

fn exercise_key(phase_id: &str, week: f64, workout_id: &str, exercise_id: &str) -> String {
    format!("{phase_id}:{week}:{workout_id}:{exercise_id}")
}

fn warmup_key(phase_id: &str, week: f64, workout_id: &str, exercise_id: &str) -> String {
    format!("{phase_id}:{week}:{workout_id}:{exercise_id}:warmup")
}
