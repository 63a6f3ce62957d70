// ABOUTME: Main library entry point for the Liftplan delivery server and tooling
// ABOUTME: Configuration, logging, sheet source abstraction, HTTP routes, and the static exporter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

#![deny(unsafe_code)]

//! # Liftplan
//!
//! The delivery half of the workout-plan viewer: it pulls four flat row sets
//! from a spreadsheet-like source, normalizes them through
//! [`liftplan_core::normalize`], and serves the wrapped document over HTTP
//! (`/plan.json`) or writes it to a static file for offline hosting.
//!
//! ## Architecture
//!
//! - **config**: environment-driven server configuration
//! - **logging**: structured logging setup
//! - **source**: the spreadsheet integration as a black-box row producer
//! - **routes**: axum routes for the plan document and health checks
//! - **export**: the build-time static plan-document generator

/// Environment-based server configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Sheet source abstraction producing the four row sets
pub mod source;

/// HTTP route definitions
pub mod routes;

/// Static plan-document exporter
pub mod export;
