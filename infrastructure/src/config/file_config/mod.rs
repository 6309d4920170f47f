//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain/application types where
//! appropriate.

mod assessment;
mod journal;
mod output;
mod storage;

pub use assessment::FileAssessmentConfig;
pub use journal::{DEFAULT_JOURNAL_FILE, FileJournalConfig};
pub use output::FileOutputConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("storage.data_dir cannot be empty")]
    EmptyDataDir,

    #[error("journal.path cannot be empty")]
    EmptyJournalPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Engine behavior
    pub assessment: FileAssessmentConfig,
    /// Answer persistence
    pub storage: FileStorageConfig,
    /// Change journal
    pub journal: FileJournalConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(dir) = &self.storage.data_dir
            && dir.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyDataDir);
        }

        if let Some(path) = &self.journal.path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyJournalPath);
        }

        Ok(())
    }
}
