// ABOUTME: The normalized plan document, one validated Plan->Phase->Week->Workout->Exercise tree
// ABOUTME: Includes the wrapped PlanResponse delivery shape with its freshness stamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! The normalized plan document.
//!
//! Immutable per fetch. Everything is owned, trimmed, and strictly typed;
//! nothing in here is optional except the schema-gated exercise `link`.
//! Serialized field names are camelCase, the wire contract shared by the live
//! endpoint, the static export, and the client cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level training program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique plan id
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether this is the plan the viewer should open on
    pub active: bool,
    /// Phases, ordered ascending by `order`
    pub phases: Vec<Phase>,
}

/// A multi-week block of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Unique phase id
    pub id: String,
    /// Display name
    pub name: String,
    /// Position within the plan
    pub order: f64,
    /// Declared duration from the source; may disagree with `weeks.len()`
    pub weeks_count: f64,
    /// Derived weeks, ordered ascending by week number
    pub weeks: Vec<Week>,
}

/// A derived grouping of workouts sharing a week number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// The shared week number
    pub week: f64,
    /// Workouts, ordered ascending by `order`
    pub workouts: Vec<Workout>,
}

/// One training day within a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique workout id
    pub id: String,
    /// Display name for the day
    pub day_name: String,
    /// Position within the week
    pub order: f64,
    /// Focus tag
    pub focus: String,
    /// Exercises, ordered ascending by `order`
    pub exercises: Vec<Exercise>,
}

/// One prescribed movement with set/rep/intensity parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique exercise id
    pub id: String,
    /// Position within the workout
    pub order: f64,
    /// Superset group tag, possibly empty
    pub group: String,
    /// Movement name
    pub name: String,
    /// Warm-up set prescription
    pub warmup_sets: String,
    /// Working set prescription
    pub working_sets: String,
    /// Rep prescription
    pub reps: String,
    /// Load prescription
    pub load: String,
    /// Target RPE
    pub rpe: String,
    /// Rest prescription
    pub rest: String,
    /// Substitute movements; empty slots are omitted, not nulled
    pub subs: Vec<Substitute>,
    /// Coaching notes
    pub notes: String,
    /// Demonstration link; present only under the linked schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A substitute movement, bare or with a companion link depending on schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Substitute {
    /// Bare movement name
    Name(String),
    /// Movement name with a demonstration link
    Linked {
        /// Movement name
        name: String,
        /// Demonstration link, possibly empty
        link: String,
    },
}

impl Substitute {
    /// The substitute's movement name, whichever shape it carries
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Linked { name, .. } => name,
        }
    }
}

/// The wrapped document as it travels over HTTP and into durable storage
///
/// `updated_at` is stamped at response or export time; it is a data-as-of
/// marker for the client, not a cache-invalidation key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// When this document was produced
    pub updated_at: DateTime<Utc>,
    /// The normalized plans
    pub plans: Vec<Plan>,
}
