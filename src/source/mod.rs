// ABOUTME: Sheet source abstraction, the spreadsheet integration as a black box
// ABOUTME: Produces four arrays of loosely-typed rows; file-backed and embedded implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Sheet sources.
//!
//! The actual spreadsheet backend (credentials, remote API calls) is outside
//! this repository; everything behind this trait is interchangeable as long
//! as it produces the four row arrays. The server wires in a
//! [`FileSheetSource`] when a sheet path is configured and falls back to the
//! embedded [`SampleSheetSource`] otherwise.

/// File-backed sheet source
pub mod file;
/// Embedded sample rows
pub mod sample;

pub use file::FileSheetSource;
pub use sample::SampleSheetSource;

use async_trait::async_trait;
use liftplan_core::{AppResult, SheetData};

/// Black-box producer of the four row sets
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the current rows
    ///
    /// # Errors
    ///
    /// Returns an error when the backing source is unreachable or its payload
    /// is not row data.
    async fn fetch_rows(&self) -> AppResult<SheetData>;
}
