//! Console output formatter for handled inquiries and diagnostics

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use helpdesk_application::InquiryOutput;
use helpdesk_domain::{AnswerSource, ConfigIssue, KnowledgeReport, Severity};

/// Formats results for human-readable console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a handled inquiry
    pub fn format(output: &InquiryOutput) -> String {
        let outcome = &output.outcome;
        let mut text = String::new();

        text.push_str(&Self::header("Helpdesk Response"));
        text.push('\n');

        if outcome.error {
            text.push_str(&format!(
                "{} {}\n",
                "Error:".red().bold(),
                outcome.category
            ));
        }
        text.push_str(&format!("\n{}\n", outcome.response));

        text.push_str(&Self::section_header("Details"));
        text.push_str(&format!(
            "{} {:.3}\n",
            "Confidence:".cyan().bold(),
            outcome.confidence
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Category:".cyan().bold(),
            outcome.category
        ));
        if let Some(source) = output.source {
            text.push_str(&format!(
                "{} {}\n",
                "Source:".cyan().bold(),
                Self::source_label(source)
            ));
        }
        text.push_str(&format!(
            "{} {:.3}s\n",
            "Time:".cyan().bold(),
            output.processing_time.as_secs_f64()
        ));
        if outcome.retry {
            text.push_str(&format!("{}\n", "Caller should retry.".yellow()));
        }

        text.push_str(&Self::footer());
        text
    }

    /// Format a knowledge validation report
    pub fn format_knowledge_report(report: &KnowledgeReport) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Knowledge Check"));
        text.push('\n');

        let stats = &report.stats;
        text.push_str(&format!(
            "{} {}\n",
            "Items:".cyan().bold(),
            stats.total_items
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Keywords:".cyan().bold(),
            stats.total_keywords
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Categories:".cyan().bold(),
            stats.categories.join(", ")
        ));

        if !report.issues.is_empty() {
            text.push_str(&Self::section_header("Issues"));
            for issue in &report.issues {
                text.push_str(&format!(
                    "  {} {}\n",
                    Self::severity_tag(issue.severity),
                    issue.message
                ));
            }
        }

        let verdict = if report.is_valid() {
            "Knowledge data is valid".green().bold()
        } else {
            "Knowledge data has errors".red().bold()
        };
        text.push_str(&format!("\n{}\n", verdict));
        text.push_str(&Self::footer());
        text
    }

    /// Format configuration issues, one per line
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| format!("{} {}", Self::severity_tag(issue.severity), issue.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn severity_tag(severity: Severity) -> String {
        match severity {
            Severity::Error => "[error]".red().bold().to_string(),
            Severity::Warning => "[warning]".yellow().bold().to_string(),
        }
    }

    fn source_label(source: AnswerSource) -> &'static str {
        match source {
            AnswerSource::Resolved => "knowledge",
            AnswerSource::Generated => "generated",
            AnswerSource::GenerationFailed => "generation failed",
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
    fn format(&self, output: &InquiryOutput) -> String {
        Self::format(output)
    }
}
