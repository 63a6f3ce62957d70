// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads HTTP_PORT and SHEET_PATH with sane defaults for local development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Environment-based configuration.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use liftplan_core::constants::defaults;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to
    pub http_port: u16,
    /// Path to the sheet row data; the embedded sample is served when unset
    pub sheet_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid HTTP_PORT value: {raw}"))?,
            Err(_) => defaults::HTTP_PORT,
        };
        let sheet_path = env::var("SHEET_PATH").ok().map(PathBuf::from);
        Ok(Self {
            http_port,
            sheet_path,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        let source = self.sheet_path.as_ref().map_or_else(
            || "embedded sample".to_owned(),
            |path| path.display().to_string(),
        );
        format!("http_port={} sheet_source={source}", self.http_port)
    }
}
