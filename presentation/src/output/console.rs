//! Console output formatter for assessment results

use super::formatter::OutputFormatter;
use super::listing::QuestionListing;
use colored::{ColoredString, Colorize};
use maturity_domain::{AssessmentSnapshot, Domain, MaturityScore};

/// Formats assessment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format domain scores, completion and the overall level
    pub fn format_status(snapshot: &AssessmentSnapshot) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("PKI Maturity Assessment"));
        output.push('\n');

        output.push_str(&Self::section_header("Domain Scores"));
        for progress in &snapshot.domains {
            output.push_str(&format!(
                "  {:<12} {:>5}  {}  ({}/{} answered, {}%)\n",
                progress.domain.display_name(),
                Self::score_label(progress.score),
                Self::level_label(progress.score, &progress.level.to_string()),
                progress.answered,
                progress.total,
                progress.percent
            ));
        }

        output.push_str(&Self::section_header("Overall"));
        let overall = snapshot.overall_score();
        output.push_str(&format!(
            "  {} {}\n",
            "Score:".cyan().bold(),
            Self::score_label(overall)
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Maturity:".cyan().bold(),
            Self::level_label(overall, snapshot.maturity_level.as_str())
        ));
        output.push_str(&format!(
            "  {} {}/{} ({}%)\n",
            "Answered:".cyan().bold(),
            snapshot.completion.answered,
            snapshot.completion.total,
            snapshot.completion.percent()
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format questions grouped by domain, marking the current selection
    pub fn format_questions(listing: &[QuestionListing]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("PKI Maturity Questions"));
        output.push('\n');

        for domain in Domain::ALL {
            let rows: Vec<_> = listing.iter().filter(|l| l.domain == domain).collect();
            if rows.is_empty() {
                continue;
            }
            output.push_str(&Self::section_header(domain.display_name()));
            for row in rows {
                output.push_str(&Self::question_block(row));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a recorded answer with the refreshed overall figures
    pub fn format_answer(listing: &QuestionListing, snapshot: &AssessmentSnapshot) -> String {
        let label = listing.selected_label().unwrap_or("(unlisted score)");
        let score = listing.selected.unwrap_or_default();
        let domain_score = snapshot.scores.domain(listing.domain);

        let mut output = format!(
            "{} {} = {} {}\n",
            "Recorded".green().bold(),
            listing.id.bold(),
            score,
            label.dimmed()
        );
        output.push_str(&format!(
            "  {}: {}   {}: {} ({})\n",
            listing.domain.display_name(),
            Self::score_label(domain_score),
            "Overall".cyan(),
            Self::score_label(snapshot.overall_score()),
            snapshot.maturity_level
        ));
        output
    }

    pub fn format_reset(snapshot: &AssessmentSnapshot) -> String {
        format!(
            "{} {} answers remain.\n",
            "Assessment reset.".yellow().bold(),
            snapshot.answers.len()
        )
    }

    fn question_block(row: &QuestionListing) -> String {
        let mut block = format!("\n{} {}\n", format!("[{}]", row.id).yellow().bold(), row.text);
        for option in row.options {
            let marker = if row.selected == Some(option.value()) {
                "*".green().bold()
            } else {
                " ".normal()
            };
            block.push_str(&format!("  {} {}  {}\n", marker, option.value(), option.label()));
        }
        block
    }

    /// "N/A" for an unassessed score, otherwise one decimal place
    pub fn score_text(score: MaturityScore) -> String {
        if score.is_unassessed() {
            "N/A".to_string()
        } else {
            score.to_string()
        }
    }

    fn score_label(score: MaturityScore) -> ColoredString {
        Self::paint(score, &Self::score_text(score))
    }

    fn level_label(score: MaturityScore, level: &str) -> ColoredString {
        if score.is_unassessed() {
            "-".dimmed()
        } else {
            Self::paint(score, level)
        }
    }

    fn paint(score: MaturityScore, text: &str) -> ColoredString {
        match score.tenths() {
            t if t >= 40 => text.green(),
            t if t >= 30 => text.blue(),
            t if t >= 20 => text.yellow(),
            t if t > 0 => text.red(),
            _ => text.dimmed(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_status(&self, snapshot: &AssessmentSnapshot) -> String {
        Self::format_status(snapshot)
    }

    fn format_questions(&self, listing: &[QuestionListing]) -> String {
        Self::format_questions(listing)
    }

    fn format_answer(&self, listing: &QuestionListing, snapshot: &AssessmentSnapshot) -> String {
        Self::format_answer(listing, snapshot)
    }

    fn format_reset(&self, snapshot: &AssessmentSnapshot) -> String {
        Self::format_reset(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_application::{AssessmentConfig, AssessmentEngine, NoAnswerStore};
    use maturity_domain::QuestionBank;
    use std::sync::Arc;

    fn engine() -> AssessmentEngine {
        colored::control::set_override(false);
        AssessmentEngine::initialize(
            QuestionBank::builtin(),
            Arc::new(NoAnswerStore),
            AssessmentConfig::default(),
        )
    }

    #[test]
    fn test_score_text() {
        assert_eq!(ConsoleFormatter::score_text(MaturityScore::UNASSESSED), "N/A");
        assert_eq!(ConsoleFormatter::score_text(MaturityScore::from_tenths(23)), "2.3");
        assert_eq!(ConsoleFormatter::score_text(MaturityScore::from_tenths(40)), "4.0");
    }

    #[test]
    fn test_status_fresh_assessment() {
        let engine = engine();
        let text = ConsoleFormatter::format_status(&engine.snapshot());
        assert!(text.contains("Governance"));
        assert!(text.contains("Resources"));
        assert!(text.contains("N/A"));
        assert!(text.contains("0/20 (0%)"));
    }

    #[test]
    fn test_status_with_answers() {
        let mut engine = engine();
        engine.set_answer("gov1", 4).unwrap();
        engine.set_answer("gov2", 2).unwrap();
        let text = ConsoleFormatter::format_status(&engine.snapshot());
        assert!(text.contains("3.0"));
        assert!(text.contains("0.8"));
        assert!(text.contains("2/5 answered, 40%"));
    }

    #[test]
    fn test_questions_mark_selection() {
        let mut engine = engine();
        engine.set_answer("ops3", 5).unwrap();
        let listing = QuestionListing::collect(&engine, Some(Domain::Operations));
        let text = ConsoleFormatter::format_questions(&listing);
        assert!(text.contains("[ops3]"));
        assert!(text.contains("* 5"));
        assert!(!text.contains("[gov1]"));
    }

    #[test]
    fn test_answer_and_reset_messages() {
        let mut engine = engine();
        engine.set_answer("res1", 3).unwrap();
        let listing = QuestionListing::collect(&engine, Some(Domain::Resources));
        let text = ConsoleFormatter::format_answer(&listing[0], &engine.snapshot());
        assert!(text.contains("Recorded res1 = 3"));

        engine.reset_assessment();
        let text = ConsoleFormatter::format_reset(&engine.snapshot());
        assert!(text.contains("0 answers remain"));
    }
}
