// ABOUTME: File-backed sheet source reading one JSON document with the four row arrays
// ABOUTME: The shape a sheet-dump job writes: plans, phases, workouts, exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use std::path::PathBuf;

use async_trait::async_trait;
use liftplan_core::{AppError, AppResult, SheetData};

use super::SheetSource;

/// Sheet source reading rows from a JSON file
#[derive(Debug, Clone)]
pub struct FileSheetSource {
    path: PathBuf,
}

impl FileSheetSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SheetSource for FileSheetSource {
    async fn fetch_rows(&self) -> AppResult<SheetData> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            AppError::storage(format!("failed to read sheet {}: {err}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|err| {
            AppError::serialization(format!(
                "sheet {} is not valid row data: {err}",
                self.path.display()
            ))
        })
    }
}
