// ABOUTME: The schema-versioned plan normalizer joining four flat row sets into one nested tree
// ABOUTME: Pure and total; stable sorts, derived week grouping, silent orphaning of dangling FKs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Plan normalization.
//!
//! [`normalize`] turns the four flat row sets into the nested
//! `Plan -> Phase -> Week -> Workout -> Exercise` document. It is a pure
//! function: no I/O, no errors, deterministic for identical inputs (row-array
//! order is the tiebreak for equal sort keys).
//!
//! Joining is forgiving on purpose. A row whose foreign key resolves to
//! nothing simply contributes nothing; the parent it never finds keeps an
//! empty child list. Missing numeric fields coerce to 0 and therefore sort
//! first.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::Value;

use crate::coerce::{clean_text, to_bool, to_number};
use crate::models::{
    Exercise, ExerciseRow, Phase, PhaseRow, Plan, SheetData, Substitute, Week, Workout, WorkoutRow,
};

/// Capability flags selecting the sheet schema version.
///
/// The linked schema carries companion links for substitutes plus a
/// per-exercise demonstration link; the bare schema predates them. One
/// normalizer serves both so the live endpoint and the static export cannot
/// drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Emit `{name, link}` substitute pairs and the per-exercise `link` field
    pub supports_links: bool,
}

impl SchemaOptions {
    /// The current schema: substitutes as `{name, link}` pairs
    #[must_use]
    pub const fn linked() -> Self {
        Self {
            supports_links: true,
        }
    }

    /// The older schema: substitutes as bare names, no exercise link
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            supports_links: false,
        }
    }
}

/// Join the four row sets into the normalized plan document.
#[must_use]
pub fn normalize(data: &SheetData, schema: SchemaOptions) -> Vec<Plan> {
    let phases_by_plan = index_by(&data.phases, |phase| clean_text(&phase.plan_id));
    let workouts_by_phase = index_by(&data.workouts, |workout| clean_text(&workout.phase_id));
    let exercises_by_workout = index_by(&data.exercises, |ex| clean_text(&ex.workout_id));

    data.plans
        .iter()
        .map(|plan| {
            let plan_id = clean_text(&plan.plan_id);
            let phase_rows = phases_by_plan
                .get(&plan_id)
                .map_or(&[][..], Vec::as_slice);
            Plan {
                phases: build_phases(phase_rows, &workouts_by_phase, &exercises_by_workout, schema),
                id: plan_id,
                name: clean_text(&plan.plan_name),
                active: to_bool(&plan.active),
            }
        })
        .collect()
}

/// One pass per row set: bucket rows by their (cleaned) foreign key,
/// preserving insertion order within each bucket.
fn index_by<'a, T>(rows: &'a [T], key: impl Fn(&T) -> String) -> HashMap<String, Vec<&'a T>> {
    let mut index: HashMap<String, Vec<&T>> = HashMap::new();
    for row in rows {
        index.entry(key(row)).or_default().push(row);
    }
    index
}

fn build_phases(
    phase_rows: &[&PhaseRow],
    workouts_by_phase: &HashMap<String, Vec<&WorkoutRow>>,
    exercises_by_workout: &HashMap<String, Vec<&ExerciseRow>>,
    schema: SchemaOptions,
) -> Vec<Phase> {
    let mut ordered: Vec<(f64, &PhaseRow)> = phase_rows
        .iter()
        .map(|phase| (to_number(&phase.phase_order, 0.0), *phase))
        .collect();
    ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

    ordered
        .into_iter()
        .map(|(order, phase)| {
            let phase_id = clean_text(&phase.phase_id);
            let workout_rows = workouts_by_phase
                .get(&phase_id)
                .map_or(&[][..], Vec::as_slice);
            Phase {
                weeks: build_weeks(workout_rows, exercises_by_workout, schema),
                id: phase_id,
                name: clean_text(&phase.phase_name),
                order,
                weeks_count: to_number(&phase.weeks_count, 0.0),
            }
        })
        .collect()
}

/// Sort a phase's workouts by their order, then group them into weeks.
///
/// Weeks are not pre-declared anywhere: a phase's weeks are exactly the
/// distinct week numbers its workouts mention, re-sorted ascending after
/// grouping.
fn build_weeks(
    workout_rows: &[&WorkoutRow],
    exercises_by_workout: &HashMap<String, Vec<&ExerciseRow>>,
    schema: SchemaOptions,
) -> Vec<Week> {
    let mut ordered: Vec<(f64, &WorkoutRow)> = workout_rows
        .iter()
        .map(|workout| (to_number(&workout.workout_order, 0.0), *workout))
        .collect();
    ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut buckets: Vec<(f64, Vec<Workout>)> = Vec::new();
    for (order, row) in ordered {
        let week = to_number(&row.week_number, 0.0);
        let workout = build_workout(row, order, exercises_by_workout, schema);
        match buckets
            .iter_mut()
            .find(|(number, _)| number.total_cmp(&week) == Ordering::Equal)
        {
            Some((_, bucket)) => bucket.push(workout),
            None => buckets.push((week, vec![workout])),
        }
    }
    buckets.sort_by(|a, b| a.0.total_cmp(&b.0));

    buckets
        .into_iter()
        .map(|(week, workouts)| Week { week, workouts })
        .collect()
}

fn build_workout(
    row: &WorkoutRow,
    order: f64,
    exercises_by_workout: &HashMap<String, Vec<&ExerciseRow>>,
    schema: SchemaOptions,
) -> Workout {
    let workout_id = clean_text(&row.workout_id);
    let mut ordered: Vec<(f64, &ExerciseRow)> = exercises_by_workout
        .get(&workout_id)
        .map_or(&[][..], Vec::as_slice)
        .iter()
        .map(|ex| (to_number(&ex.order, 0.0), *ex))
        .collect();
    ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

    Workout {
        id: workout_id,
        day_name: clean_text(&row.day_name),
        order,
        focus: clean_text(&row.focus),
        exercises: ordered
            .into_iter()
            .map(|(order, ex)| build_exercise(ex, order, schema))
            .collect(),
    }
}

fn build_exercise(row: &ExerciseRow, order: f64, schema: SchemaOptions) -> Exercise {
    let subs = [(&row.sub1, &row.sub1_link), (&row.sub2, &row.sub2_link)]
        .into_iter()
        .filter_map(|(name, link)| substitute(name, link, schema))
        .collect();

    Exercise {
        id: clean_text(&row.exercise_id),
        order,
        group: clean_text(&row.group),
        name: clean_text(&row.name),
        warmup_sets: clean_text(&row.warmup_sets),
        working_sets: clean_text(&row.working_sets),
        reps: clean_text(&row.reps),
        load: clean_text(&row.load),
        rpe: clean_text(&row.rpe),
        rest: clean_text(&row.rest),
        subs,
        notes: clean_text(&row.notes),
        link: schema.supports_links.then(|| clean_text(&row.link)),
    }
}

/// A substitute slot counts only when its name survives trimming.
fn substitute(name: &Value, link: &Value, schema: SchemaOptions) -> Option<Substitute> {
    let name = clean_text(name);
    if name.is_empty() {
        return None;
    }
    Some(if schema.supports_links {
        Substitute::Linked {
            name,
            link: clean_text(link),
        }
    } else {
        Substitute::Name(name)
    })
}
