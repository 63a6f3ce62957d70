// ABOUTME: Embedded sample rows so the server always has something to serve
// ABOUTME: One plan, one phase, two weeks of an upper/lower split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use async_trait::async_trait;
use liftplan_core::{AppError, AppResult, SheetData};
use serde_json::{json, Value};

use super::SheetSource;

/// Sheet source serving a small built-in training plan
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSheetSource;

#[async_trait]
impl SheetSource for SampleSheetSource {
    async fn fetch_rows(&self) -> AppResult<SheetData> {
        serde_json::from_value(sample_rows()).map_err(AppError::from)
    }
}

/// Loosely typed on purpose, the way a sheet dump arrives: some numbers as
/// strings, booleans as strings, occasional missing cells.
fn sample_rows() -> Value {
    json!({
        "plans": [
            { "plan_id": "ul_4day", "plan_name": "Upper/Lower 4-Day", "active": "TRUE" }
        ],
        "phases": [
            { "phase_id": "ul_base", "plan_id": "ul_4day", "phase_name": "Base Strength", "phase_order": "1", "weeks_count": "4" }
        ],
        "workouts": [
            { "workout_id": "b_w1_upper", "phase_id": "ul_base", "week_number": "1", "day_name": "Upper #1", "workout_order": "1", "focus": "Upper" },
            { "workout_id": "b_w1_lower", "phase_id": "ul_base", "week_number": "1", "day_name": "Lower #1", "workout_order": "2", "focus": "Lower" },
            { "workout_id": "b_w2_upper", "phase_id": "ul_base", "week_number": "2", "day_name": "Upper #2", "workout_order": "1", "focus": "Upper" },
            { "workout_id": "b_w2_lower", "phase_id": "ul_base", "week_number": "2", "day_name": "Lower #2", "workout_order": "2", "focus": "Lower" }
        ],
        "exercises": [
            { "exercise_id": "b_w1_upper_e1", "workout_id": "b_w1_upper", "order": "1", "name": "Bench Press",
              "warmup_sets": "3", "working_sets": "3", "reps": "5", "load": "", "rpe": "8", "rest": "~3 min",
              "sub1": "DB Bench Press", "sub1_link": "https://example.com/db-bench",
              "sub2": "Machine Chest Press", "sub2_link": "",
              "notes": "Pause on the chest, drive up evenly", "group": "", "link": "https://example.com/bench" },
            { "exercise_id": "b_w1_upper_e2", "workout_id": "b_w1_upper", "order": "2", "name": "Barbell Row",
              "warmup_sets": "2", "working_sets": "3", "reps": "6-8", "load": "", "rpe": "8", "rest": "~2-3 min",
              "sub1": "Chest-Supported Row", "sub1_link": "",
              "notes": "Pull to the lower chest, no torso heave", "group": "" },
            { "exercise_id": "b_w1_upper_e3", "workout_id": "b_w1_upper", "order": "3", "name": "Overhead Press",
              "warmup_sets": "1", "working_sets": "3", "reps": "8-10", "rpe": "8-9", "rest": "~2 min",
              "sub1": "Seated DB Press", "group": "" },
            { "exercise_id": "b_w1_lower_e1", "workout_id": "b_w1_lower", "order": "1", "name": "Back Squat",
              "warmup_sets": "3-4", "working_sets": "3", "reps": "4-6", "load": "", "rpe": "8-9", "rest": "~3-4 min",
              "sub1": "Hack Squat", "sub1_link": "https://example.com/hack-squat",
              "notes": "Sit back and down, stay braced", "group": "", "link": "https://example.com/squat" },
            { "exercise_id": "b_w1_lower_e2", "workout_id": "b_w1_lower", "order": "2", "name": "Romanian Deadlift",
              "warmup_sets": "2", "working_sets": "3", "reps": "8-10", "rpe": "8", "rest": "~2-3 min",
              "sub1": "45° Hyperextension", "notes": "Hips back, neutral spine", "group": "" },
            { "exercise_id": "b_w1_lower_e3", "workout_id": "b_w1_lower", "order": "3", "name": "Standing Calf Raise",
              "warmup_sets": "1", "working_sets": "4", "reps": "10-12", "rpe": "9-10", "rest": "~1-2 min",
              "sub1": "Seated Calf Raise", "group": "A" },
            { "exercise_id": "b_w2_upper_e1", "workout_id": "b_w2_upper", "order": "1", "name": "Incline Bench Press",
              "warmup_sets": "3", "working_sets": "3", "reps": "6-8", "rpe": "8", "rest": "~3 min",
              "sub1": "Incline DB Press", "group": "" },
            { "exercise_id": "b_w2_upper_e2", "workout_id": "b_w2_upper", "order": "2", "name": "Weighted Pull-Up",
              "warmup_sets": "2", "working_sets": "3", "reps": "5-7", "rpe": "8-9", "rest": "~2-3 min",
              "sub1": "Lat Pulldown", "group": "" },
            { "exercise_id": "b_w2_lower_e1", "workout_id": "b_w2_lower", "order": "1", "name": "Deadlift",
              "warmup_sets": "3-4", "working_sets": "2", "reps": "3-5", "rpe": "8", "rest": "~4 min",
              "sub1": "Trap Bar Deadlift", "group": "" },
            { "exercise_id": "b_w2_lower_e2", "workout_id": "b_w2_lower", "order": "2", "name": "Walking Lunge",
              "warmup_sets": "1", "working_sets": "2", "reps": "10", "rpe": "8-9", "rest": "~2 min",
              "sub1": "DB Step-Up", "group": "" }
        ]
    })
}
