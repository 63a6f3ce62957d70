// ABOUTME: HTTP server binary serving the normalized plan document
// ABOUTME: Environment-driven configuration with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! # Liftplan Server Binary
//!
//! Serves `/plan.json` (the wrapped, normalized plan document) and `/health`.
//! Rows come from the JSON sheet dump at `SHEET_PATH`/`--sheet` when
//! configured, otherwise from the embedded sample plan.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use liftplan::config::ServerConfig;
use liftplan::logging;
use liftplan::routes::{router, AppState};
use liftplan::source::{FileSheetSource, SampleSheetSource, SheetSource};
use tracing::info;

#[derive(Parser)]
#[command(name = "liftplan-server", about = "Liftplan - workout plan delivery server")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Path to the sheet row data (JSON with plans/phases/workouts/exercises)
    #[arg(long)]
    sheet: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(sheet) = args.sheet {
        config.sheet_path = Some(sheet);
    }

    logging::init_from_env()?;
    info!("starting liftplan server: {}", config.summary());

    let source: Arc<dyn SheetSource> = match &config.sheet_path {
        Some(path) => Arc::new(FileSheetSource::new(path.clone())),
        None => Arc::new(SampleSheetSource),
    };
    let app = router(AppState::new(source));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
