// ABOUTME: Structured logging setup for the server and tooling binaries
// ABOUTME: EnvFilter-driven tracing subscriber, info by default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Logging configuration.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to `info`.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}
