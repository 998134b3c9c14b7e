//! Console output formatter for answer results

use colored::Colorize;
use scout_domain::{AnswerResult, OutputFormat, Question};

/// Formats answer results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a result in the requested output format
    pub fn render(result: &AnswerResult, question: &str, format: OutputFormat) -> String {
        match format {
            OutputFormat::Pretty => Self::format(result, question),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result
    pub fn format(result: &AnswerResult, question: &str) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Answer"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Question:".cyan().bold(), question));

        match result.answer {
            Some(label) => {
                let text = Question::parse(question)
                    .ok()
                    .and_then(|q| q.option(label).map(|o| o.text.clone()));
                let answer = match text {
                    Some(text) => format!("{}. {}", label, text),
                    None => label.to_string(),
                };
                output.push_str(&format!("{} {}\n", "Answer:".green().bold(), answer.bold()));
            }
            None => {
                output.push_str(&format!("{} {}\n", "Answer:".yellow().bold(), "none".dimmed()));
            }
        }

        let clarity = if result.is_answer_clear {
            "clear".green()
        } else {
            "unclear".yellow()
        };
        output.push_str(&format!(
            "{} {} after {} round(s)\n",
            "Status:".cyan().bold(),
            clarity,
            result.rounds
        ));

        if let Some(kind) = result.error {
            output.push_str(&format!("{} {}\n", "Error:".red().bold(), kind));
        }

        output.push_str(&Self::section_header("Reasoning"));
        output.push_str(&Self::indent(&result.reasoning, "  "));
        output.push('\n');

        if !result.sources.is_empty() {
            output.push_str(&Self::section_header("Sources"));
            for source in &result.sources {
                output.push_str(&format!("  * {}\n", source));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &AnswerResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
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

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
