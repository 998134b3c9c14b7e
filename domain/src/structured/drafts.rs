//! Shapes of the three structured model outputs.
//!
//! | Stage | Draft | Required keys |
//! |-------|-------|---------------|
//! | Query generation / refinement | [`QueryDraft`] | `search_query` |
//! | Summarization | [`SummaryDraft`] | `summary` |
//! | Synthesis | [`SynthesisDraft`] | `reasoning`, `is_answer_clear`, `sources` |
//!
//! `reasoning_steps` is optional everywhere and also accepted as `coT`.

use serde::{Deserialize, Deserializer, Serialize};

/// Output of query generation and query refinement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDraft {
    #[serde(default, alias = "coT")]
    pub reasoning_steps: Vec<String>,
    pub search_query: String,
}

/// Output of per-page summarization (the source URL is attached by the caller)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDraft {
    #[serde(default, alias = "coT")]
    pub reasoning_steps: Vec<String>,
    pub summary: String,
}

/// Output of answer synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisDraft {
    pub reasoning: String,
    pub is_answer_clear: bool,
    pub sources: Vec<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub answer: Option<i64>,
}

/// Accept `2`, `"2"` and `null` for the answer label.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("answer {} is not an integer", n))),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() || s.trim() == "null" => {
            Ok(None)
        }
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("answer '{}' is not an integer", s))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "answer must be an integer or null, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_draft_accepts_cot_alias() {
        let draft: QueryDraft =
            serde_json::from_str(r#"{"coT": ["step"], "search_query": "event x date"}"#).unwrap();
        assert_eq!(draft.reasoning_steps, vec!["step".to_string()]);
        assert_eq!(draft.search_query, "event x date");
    }

    #[test]
    fn test_synthesis_draft_lenient_answer() {
        let draft: SynthesisDraft = serde_json::from_str(
            r#"{"reasoning": "r", "is_answer_clear": true, "sources": [], "answer": "2"}"#,
        )
        .unwrap();
        assert_eq!(draft.answer, Some(2));

        let draft: SynthesisDraft = serde_json::from_str(
            r#"{"reasoning": "r", "is_answer_clear": false, "sources": []}"#,
        )
        .unwrap();
        assert_eq!(draft.answer, None);
    }

    #[test]
    fn test_synthesis_draft_rejects_non_integer_answer() {
        let result: Result<SynthesisDraft, _> = serde_json::from_str(
            r#"{"reasoning": "r", "is_answer_clear": true, "sources": [], "answer": [1]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_synthesis_draft_requires_sources() {
        let result: Result<SynthesisDraft, _> =
            serde_json::from_str(r#"{"reasoning": "r", "is_answer_clear": true, "answer": 1}"#);
        assert!(result.is_err());
    }
}
