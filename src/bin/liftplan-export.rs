// ABOUTME: Build-time generator writing the static plan document for offline hosting
// ABOUTME: Reads the sheet row dump, normalizes it, and writes public/plan.json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! # Liftplan Export Binary
//!
//! The static-hosting counterpart of the live endpoint. Reads the four row
//! sets from a JSON sheet dump and writes the wrapped document to a fixed
//! path, ready to be served as a file.
//!
//! Usage:
//! ```bash
//! cargo run --bin liftplan-export -- --sheet data/sheet.json
//! cargo run --bin liftplan-export -- --sheet data/sheet.json --out public/plan.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use liftplan::export::write_plan_document;
use liftplan::logging;
use liftplan::source::{FileSheetSource, SheetSource};
use liftplan_core::constants::defaults;
use liftplan_core::normalize::SchemaOptions;

#[derive(Parser)]
#[command(
    name = "liftplan-export",
    about = "Generate the static plan document for offline hosting"
)]
struct Args {
    /// Path to the sheet row data (JSON with plans/phases/workouts/exercises)
    #[arg(long, default_value = "data/sheet.json")]
    sheet: PathBuf,

    /// Output path for the wrapped plan document
    #[arg(long, default_value = defaults::PLAN_EXPORT_PATH)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let rows = FileSheetSource::new(args.sheet).fetch_rows().await?;
    write_plan_document(&rows, SchemaOptions::linked(), &args.out)?;
    Ok(())
}
