//! # Configuration
//!
//! Snipz configuration is loaded with [`confique`] from, in priority order:
//!
//! 1. **Environment variables**: `SNIPZ_DATA_DIR`, `SNIPZ_LOG_LEVEL`
//! 2. **Config file**: `snipz.toml` in the OS config directory (via `directories`)
//! 3. **Compiled defaults**: `#[config(default = ...)]`
//!
//! Command-line flags are applied on top by the caller (see [`crate::init`]).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where `snippets.json` lives |
//! | `log_level` | `warn` | Default tracing filter when `SNIPZ_LOG` is unset |

use crate::error::{Result, SnipzError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "snipz.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Directory holding the snippet table.
    #[config(env = "SNIPZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter used when `SNIPZ_LOG` is not set (e.g. "warn", "snipzapp=debug").
    #[config(env = "SNIPZ_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "snipz", "snipz")
}

/// `<os config dir>/snipz.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl SnipzConfig {
    /// Loads env and the default config file. A missing file is not an error.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        let config = builder
            .load()
            .map_err(|e| SnipzError::Config(e.to_string()))?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}
