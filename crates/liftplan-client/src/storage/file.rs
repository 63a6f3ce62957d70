// ABOUTME: File-per-key storage backend, the durable analogue of browser localStorage
// ABOUTME: Each namespaced key maps to one file under an application data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use liftplan_core::{AppError, AppResult};

use super::StorageProvider;

/// Durable storage writing one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Create a store under the platform's user data directory
    ///
    /// # Errors
    ///
    /// Returns an error when no user data directory is available or it cannot
    /// be created.
    pub fn in_user_data_dir() -> AppResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| AppError::storage("no user data directory available"))?;
        Self::new(base.join("liftplan"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StorageProvider for FileStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.path_for(key), value).map_err(Into::into)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
