//! Storage configuration from TOML (`[storage]` section)

use crate::storage::JsonFileAnswerStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Persist answers across sessions
    pub enabled: bool,
    /// Directory holding the answer record (defaults to the platform data dir)
    pub data_dir: Option<PathBuf>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            data_dir: None,
        }
    }
}

impl FileStorageConfig {
    /// Directory to store the answer record in, if one can be determined
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(JsonFileAnswerStore::default_dir)
    }
}
