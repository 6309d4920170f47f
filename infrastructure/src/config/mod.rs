//! Configuration file loading for pki-maturity
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `PKI_MATURITY_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./maturity.toml` or `./.maturity.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/pki-maturity/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_JOURNAL_FILE, FileAssessmentConfig, FileConfig,
    FileJournalConfig, FileOutputConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
