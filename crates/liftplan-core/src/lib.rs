// ABOUTME: Core types, row coercion, and the plan normalizer for Liftplan
// ABOUTME: Foundation crate with error types, constants, and the nested plan document model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

#![deny(unsafe_code)]

//! # Liftplan Core
//!
//! Foundation crate for the Liftplan workout-plan viewer. It holds everything
//! the delivery server and the client stores share:
//!
//! - **errors**: unified error handling with `AppError`, `ErrorCode`, and an
//!   optional HTTP response mapping (`http-response` feature)
//! - **constants**: storage keys, route paths, and defaults organized by domain
//! - **coerce**: total scalar coercions for loosely-typed spreadsheet cells
//! - **models**: flat source rows and the nested plan document they normalize into
//! - **normalize**: the schema-versioned normalizer joining four row sets into
//!   one validated `Plan` tree
//!
//! The crate performs no I/O; the normalizer is a pure function and the
//! coercions are total, so nothing in here can fail at runtime.

/// Unified error handling with standard error codes and HTTP status mapping
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Total scalar coercions for loosely-typed row fields
pub mod coerce;

/// Source row models and the normalized plan document
pub mod models;

/// The schema-versioned plan normalizer
pub mod normalize;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Plan, PlanResponse, SheetData};
pub use normalize::{normalize, SchemaOptions};
