//! Journal configuration from TOML (`[journal]` section)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default journal file name inside the data directory
pub const DEFAULT_JOURNAL_FILE: &str = "assessment-journal.jsonl";

/// Raw journal configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJournalConfig {
    /// Append every assessment change to a JSONL journal
    pub enabled: bool,
    /// Journal file (defaults to `<data_dir>/assessment-journal.jsonl`)
    pub path: Option<PathBuf>,
}

impl FileJournalConfig {
    /// Journal file location, if the journal is enabled and a location is known
    pub fn resolve_path(&self, data_dir: Option<&Path>) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        self.path
            .clone()
            .or_else(|| data_dir.map(|d| d.join(DEFAULT_JOURNAL_FILE)))
    }
}
