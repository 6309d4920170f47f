//! Infrastructure layer for pki-maturity
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAssessmentConfig, FileConfig, FileJournalConfig,
    FileOutputConfig, FileStorageConfig,
};
pub use logging::JsonlAssessmentJournal;
pub use storage::{InMemoryAnswerStore, JsonFileAnswerStore, decode_answers, encode_answers};
