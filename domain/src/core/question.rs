//! Multiple-choice question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Smallest option label accepted.
pub const MIN_OPTION_LABEL: u32 = 1;

/// Largest option label accepted.
pub const MAX_OPTION_LABEL: u32 = 10;

/// An option label is a run of digits followed by a dot that does not start
/// a decimal number (`1.` matches, `3.5` does not).
static OPTION_LABEL: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\b(\d+)\.(?:\D|$)").expect("valid option label regex"));

/// One enumerated answer option (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Numeric label as written in the question (`2` for `2. Jan 2`)
    pub label: u32,
    /// The fact that distinguishes this option, trimmed
    pub text: String,
}

impl AnswerOption {
    pub fn new(label: u32, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// A validated multiple-choice question (Value Object)
///
/// Holds the raw text as submitted plus the parsed prompt and options.
/// A `Question` always has at least two distinct labels, each within
/// [`MIN_OPTION_LABEL`]..=[`MAX_OPTION_LABEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
    prompt: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Parse and validate a question.
    ///
    /// Labels are recognised anywhere in the text, so
    /// `"Event X date? 1. Jan 1  2. Jan 2"` yields options `1 → "Jan 1"` and
    /// `2 → "Jan 2"`. An option's text ends at the next label or at the end
    /// of its line. A repeated label keeps its first fact text.
    pub fn parse(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();

        let mut spans: Vec<(u32, usize, usize)> = Vec::new();
        for caps in OPTION_LABEL.captures_iter(&content) {
            let Some(digits) = caps.get(1) else { continue };
            let label: u32 = digits.as_str().parse().map_err(|_| {
                DomainError::InvalidQuestion(format!(
                    "option label '{}' is not a number",
                    digits.as_str()
                ))
            })?;
            if !(MIN_OPTION_LABEL..=MAX_OPTION_LABEL).contains(&label) {
                return Err(DomainError::InvalidQuestion(format!(
                    "option label {} is outside {}..={}",
                    label, MIN_OPTION_LABEL, MAX_OPTION_LABEL
                )));
            }
            // Text starts right after the dot.
            spans.push((label, digits.start(), digits.end() + 1));
        }

        let mut options: Vec<AnswerOption> = Vec::new();
        for (i, (label, _, text_start)) in spans.iter().enumerate() {
            let text_end = spans
                .get(i + 1)
                .map(|(_, next_start, _)| *next_start)
                .unwrap_or(content.len());
            if options.iter().any(|o| o.label == *label) {
                continue;
            }
            // The fact ends at its line end.
            let text = content[*text_start..text_end]
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or_default();
            options.push(AnswerOption::new(*label, text));
        }

        if options.len() < 2 {
            return Err(DomainError::InvalidQuestion(format!(
                "expected at least 2 distinct option labels, found {}",
                options.len()
            )));
        }

        let prompt = spans
            .first()
            .map(|(_, start, _)| content[..*start].trim().to_string())
            .unwrap_or_default();

        Ok(Self {
            content,
            prompt,
            options,
        })
    }

    /// The full question text, as submitted
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The text before the first option label
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in the order they appear
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Option labels in the order they appear
    pub fn labels(&self) -> Vec<u32> {
        self.options.iter().map(|o| o.label).collect()
    }

    /// Look up an option by label
    pub fn option(&self, label: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for Question {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Question::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_options() {
        let q = Question::parse("Event X date? 1. Jan 1  2. Jan 2").unwrap();
        assert_eq!(q.prompt(), "Event X date?");
        assert_eq!(q.labels(), vec![1, 2]);
        assert_eq!(q.option(1).unwrap().text, "Jan 1");
        assert_eq!(q.option(2).unwrap().text, "Jan 2");
    }

    #[test]
    fn test_parse_multiline_options() {
        let q = Question::parse(
            "When is the main stage of the winter school in January 2025?\n1. 11-13\n2. 23-25\n3. 28-30\n4. 29-31",
        )
        .unwrap();
        assert_eq!(q.labels(), vec![1, 2, 3, 4]);
        assert_eq!(q.option(3).unwrap().text, "28-30");
        assert_eq!(q.option(4).unwrap().text, "29-31");
    }

    #[test]
    fn test_trailing_line_not_part_of_last_option() {
        let q = Question::parse(
            "When is event X?\n1. Jan 1\n2. Jan 2\nAnswer with the option number.",
        )
        .unwrap();
        assert_eq!(q.option(1).unwrap().text, "Jan 1");
        assert_eq!(q.option(2).unwrap().text, "Jan 2");
    }

    #[test]
    fn test_option_text_on_following_line() {
        let q = Question::parse("Pick one:\n1.\n  alpha\n2. beta").unwrap();
        assert_eq!(q.option(1).unwrap().text, "alpha");
        assert_eq!(q.option(2).unwrap().text, "beta");
    }

    #[test]
    fn test_decimal_numbers_are_not_labels() {
        let q = Question::parse("Which distance? 1. 1.5 km 2. 3.0 km").unwrap();
        assert_eq!(q.labels(), vec![1, 2]);
        assert_eq!(q.option(1).unwrap().text, "1.5 km");
        assert_eq!(q.option(2).unwrap().text, "3.0 km");
    }

    #[test]
    fn test_rejects_single_option() {
        let err = Question::parse("Is it true? 1. yes").unwrap_err();
        assert!(err.is_invalid_question());
    }

    #[test]
    fn test_rejects_no_options() {
        assert!(Question::parse("What is Rust?").is_err());
        assert!(Question::parse("").is_err());
    }

    #[test]
    fn test_rejects_repeated_single_label() {
        let err = Question::parse("Pick 1. a 1. b").unwrap_err();
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_rejects_out_of_range_label() {
        assert!(Question::parse("Pick 1. a 11. b").is_err());
        assert!(Question::parse("Pick 0. a 1. b").is_err());
    }

    #[test]
    fn test_rejects_year_followed_by_dot() {
        // Matches the label rule, so it must pass the range check.
        assert!(Question::parse("Held in 2025. Which day? 1. Mon 2. Tue").is_err());
    }

    #[test]
    fn test_duplicate_label_keeps_first_text() {
        let q = Question::parse("Pick 1. alpha 2. beta 1. gamma").unwrap();
        assert_eq!(q.options().len(), 2);
        assert_eq!(q.option(1).unwrap().text, "alpha");
        assert_eq!(q.option(2).unwrap().text, "beta");
    }

    #[test]
    fn test_label_ten_accepted() {
        let q = Question::parse("Pick 9. nine 10. ten").unwrap();
        assert_eq!(q.labels(), vec![9, 10]);
    }

    #[test]
    fn test_from_str() {
        let q: Question = "Q? 1. a 2. b".parse().unwrap();
        assert_eq!(q.content(), "Q? 1. a 2. b");
    }
}
