//! JSON file answer store.
//!
//! The record lives at `<data_dir>/pki-assessment-answers.json`. Writes go
//! to a sibling temporary file which is then renamed over the record, so a
//! crash mid-write leaves the previous record intact.

use super::codec::{decode_answers, encode_answers};
use maturity_application::{ANSWERS_RECORD_KEY, AnswerStore, StoreError};
use maturity_domain::Answer;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory name under the platform data directory
pub const APP_DIR_NAME: &str = "pki-maturity";

/// Answer store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileAnswerStore {
    path: PathBuf,
}

impl JsonFileAnswerStore {
    /// Store the record at exactly `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the record under `dir` with its fixed file name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", ANSWERS_RECORD_KEY)))
    }

    /// The platform data directory for this application, if one exists.
    ///
    /// e.g. `~/.local/share/pki-maturity` on Linux.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AnswerStore for JsonFileAnswerStore {
    fn load(&self) -> Result<Option<Vec<Answer>>, StoreError> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        decode_answers(&payload).map(Some)
    }

    fn save(&self, answers: &[Answer]) -> Result<(), StoreError> {
        let encoded = encode_answers(answers)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        fs::write(&temp, encoded)?;
        fs::rename(&temp, &self.path)?;

        debug!("Saved {} answers to {}", answers.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
