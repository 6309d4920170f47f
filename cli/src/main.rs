//! CLI entrypoint for pki-maturity
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use maturity_application::{
    AnswerStore, AssessmentEngine, Durability, NoAnswerStore, ScoreValidation,
};
use maturity_domain::QuestionBank;
use maturity_infrastructure::{
    ConfigLoader, FileConfig, JsonFileAnswerStore, JsonlAssessmentJournal,
};
use maturity_presentation::{Cli, Command, OutputFormatter, QuestionListing, formatter_for};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.storage.resolve_data_dir());

    let store: Arc<dyn AnswerStore> = match (&data_dir, config.storage.enabled) {
        (Some(dir), true) => Arc::new(JsonFileAnswerStore::in_dir(dir)),
        _ => {
            info!("Answer storage disabled; answers last for this run only");
            Arc::new(NoAnswerStore)
        }
    };

    let mut assessment = config.assessment.to_assessment_config();
    if cli.permissive {
        assessment = assessment.with_validation(ScoreValidation::Permissive);
    }

    let mut engine = AssessmentEngine::initialize(QuestionBank::builtin(), store, assessment);
    if let Some(journal) = open_journal(&config, data_dir.as_deref()) {
        engine.subscribe(journal);
    }

    let formatter = formatter_for(config.output.resolve_format(cli.output.map(Into::into)));

    let output = run(&cli.selected_command(), &mut engine, formatter.as_ref())?;
    println!("{}", output);

    if let Durability::Degraded { reason } = engine.durability() {
        eprintln!("warning: answers were not saved ({})", reason);
    }

    Ok(())
}

fn run(
    command: &Command,
    engine: &mut AssessmentEngine,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    match command {
        Command::Questions { domain } => {
            let listing = QuestionListing::collect(engine, *domain);
            Ok(formatter.format_questions(&listing))
        }
        Command::Answer { question_id, score } => {
            engine
                .set_answer(question_id, *score)
                .with_context(|| format!("Could not record answer for '{}'", question_id))?;
            let snapshot = engine.snapshot();
            match engine.bank().find_question(question_id) {
                Some(question) => {
                    let listing = QuestionListing::new(question, engine);
                    Ok(formatter.format_answer(&listing, &snapshot))
                }
                // Permissive mode stores ids outside the catalog
                None => {
                    warn!(
                        question_id = %question_id,
                        "Answer recorded for a question outside the catalog"
                    );
                    Ok(formatter.format_status(&snapshot))
                }
            }
        }
        Command::Status => Ok(formatter.format_status(&engine.snapshot())),
        Command::Reset { yes } => {
            if !yes {
                bail!("Reset erases all saved answers. Re-run with --yes to confirm.");
            }
            engine.reset_assessment();
            Ok(formatter.format_reset(&engine.snapshot()))
        }
    }
}

fn open_journal(
    config: &FileConfig,
    data_dir: Option<&std::path::Path>,
) -> Option<Arc<JsonlAssessmentJournal>> {
    if !config.journal.enabled {
        return None;
    }
    let path = config.journal.resolve_path(data_dir)?;
    match JsonlAssessmentJournal::open(&path) {
        Some(journal) => {
            info!(path = %path.display(), "Assessment journal enabled");
            Some(Arc::new(journal))
        }
        None => {
            warn!(path = %path.display(), "Could not open assessment journal");
            None
        }
    }
}
