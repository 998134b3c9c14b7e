//! Configuration issues reported by config validation.
//!
//! Validation never fails outright; it returns every detected issue with a
//! severity so the caller decides whether to abort or just warn.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric field that must be positive is zero.
    ZeroValue { field: String },
    /// A string field that must be set is empty.
    EmptyValue { field: String },
    /// A field holds a value that cannot be parsed.
    InvalidValue { field: String, value: String },
    /// A secret is neither set inline nor available in its environment variable.
    MissingSecret { env: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let e = ConfigIssue::error(
            ConfigIssueCode::ZeroValue {
                field: "answer.max_rounds".to_string(),
            },
            "must be positive",
        );
        assert!(e.is_error());

        let w = ConfigIssue::warning(
            ConfigIssueCode::MissingSecret {
                env: "OPENAI_API_KEY".to_string(),
            },
            "not set",
        );
        assert!(!w.is_error());
        assert_eq!(w.severity, Severity::Warning);
    }
}
