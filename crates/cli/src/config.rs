// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.feedbackflow/config.toml` and includes:
//! - `storage`: Optional directory for the store file (relative to project root or absolute)
//! - `user_type`: User type recorded on submissions that don't pass `--user-type`
//! - `list_limit`: Optional default cap on `ff list` results

use ff_core::UserType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".feedbackflow";
const CONFIG_FILE_NAME: &str = "config.toml";
const STORE_FILE_NAME: &str = "feedback.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.feedbackflow/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Optional directory for the store file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_limit: Option<usize>,
}

impl Config {
    /// Loads configuration from the given `.feedbackflow/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.feedbackflow/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .feedbackflow directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .feedbackflow directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the store file path from config
pub fn get_store_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.storage {
        Some(storage) => {
            let storage_path = Path::new(storage);
            if storage_path.is_absolute() {
                storage_path.join(STORE_FILE_NAME)
            } else {
                // Relative to the project root
                work_dir
                    .parent()
                    .unwrap_or(work_dir)
                    .join(storage)
                    .join(STORE_FILE_NAME)
            }
        }
        None => work_dir.join(STORE_FILE_NAME),
    }
}

/// Initialize a new .feedbackflow directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory that ignores the store.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    let content = format!(
        "# Feedback store\n{STORE_FILE_NAME}\n{STORE_FILE_NAME}-wal\n{STORE_FILE_NAME}-shm\n"
    );
    fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
