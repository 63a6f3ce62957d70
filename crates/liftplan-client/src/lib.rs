// ABOUTME: Client-side state containers for Liftplan with injected persistence and network ports
// ABOUTME: Plan cache/store with network-first load and fallback, plus the progress completion store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

#![deny(unsafe_code)]

//! # Liftplan Client
//!
//! The client half of the workout-plan viewer: two explicit, constructible
//! state containers with injected ports instead of ambient global state.
//!
//! - [`plan_store::PlanStore`] holds the normalized plan document: hydrates
//!   synchronously from durable storage, then refreshes network-first with a
//!   fallback to the last-known-good persisted copy.
//! - [`progress::ProgressStore`] tracks completion marks (per workout, per
//!   exercise, per warm-up) with write-through persistence and a derived
//!   last-workout date.
//!
//! Both depend only on the [`storage::StorageProvider`] and
//! [`fetch::PlanFetcher`] ports, so they unit-test deterministically without
//! a network or a real filesystem.

/// Durable key-value storage port and its implementations
pub mod storage;

/// Network port for fetching the wrapped plan document
pub mod fetch;

/// The plan cache/store
pub mod plan_store;

/// The completion-progress store
pub mod progress;

pub use fetch::{HttpPlanFetcher, PlanFetcher};
pub use plan_store::{PlanState, PlanStore};
pub use progress::{Completion, ProgressStore};
pub use storage::{FileStorage, MemoryStorage, StorageProvider};
