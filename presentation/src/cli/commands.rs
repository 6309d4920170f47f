//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use maturity_domain::Domain;
use std::path::PathBuf;

/// Output format for assessment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for maturity_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => maturity_domain::OutputFormat::Text,
            OutputFormat::Json => maturity_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for pki-maturity
#[derive(Parser, Debug)]
#[command(name = "pki-maturity")]
#[command(author, version, about = "PKI maturity self-assessment")]
#[command(long_about = r#"
Score your organization's PKI maturity across four domains:
Governance, Management, Operations and Resources.

Answer each question with a score from its options (1-5). Domain scores are
the average of the answered questions; the overall score is the average of
the four domain scores. Answers are saved between runs.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./maturity.toml     Project-level config
3. ~/.config/pki-maturity/config.toml   Global config

Example:
  pki-maturity questions --domain governance
  pki-maturity answer gov1 4
  pki-maturity status --output json
  pki-maturity reset --yes
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory holding the saved answers
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Accept any score for any question id
    #[arg(long, global = true)]
    pub permissive: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Assessment subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List questions with their options and current answers
    Questions {
        /// Only show one domain
        #[arg(short, long)]
        domain: Option<Domain>,
    },
    /// Record an answer
    Answer {
        /// Question id, e.g. gov1
        question_id: String,
        /// Selected option score
        #[arg(allow_negative_numbers = true)]
        score: i32,
    },
    /// Show domain and overall scores (default)
    Status,
    /// Clear all answers
    Reset {
        /// Confirm the reset; answers cannot be recovered
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    /// The command to run; `status` when none was given
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Status)
    }
}
