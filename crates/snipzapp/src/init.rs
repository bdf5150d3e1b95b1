//! # Context Setup
//!
//! [`initialize`] turns configuration into a ready [`SnipzContext`]: an API
//! facade over a [`FileStore`] rooted at the resolved data directory.
//!
//! ## Data Directory Resolution
//!
//! First match wins:
//! 1. `data_override` (the CLI's `--data-dir`)
//! 2. `data_dir` from [`SnipzConfig`] (env `SNIPZ_DATA_DIR` or `snipz.toml`)
//! 3. The OS data directory from `directories` (e.g. `~/.local/share/snipz`)
//!
//! The directory is created if missing, so a first run starts from an empty
//! store rather than failing.

use crate::api::SnipzApi;
use crate::config::{project_dirs, SnipzConfig};
use crate::error::{Result, SnipzError};
use crate::store::fs::FileStore;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SnipzContext {
    pub api: SnipzApi<FileStore>,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(config: &SnipzConfig, data_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.data_dir {
        return Ok(path.clone());
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Config("Could not determine a data directory".to_string()))
}

pub fn initialize(config: &SnipzConfig, data_override: Option<&Path>) -> Result<SnipzContext> {
    let data_dir = resolve_data_dir(config, data_override)?;
    fs::create_dir_all(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "opening snippet store");

    let api = SnipzApi::new(FileStore::new(data_dir.clone()));
    Ok(SnipzContext { api, data_dir })
}
