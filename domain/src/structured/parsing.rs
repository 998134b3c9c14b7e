//! Structured output extraction from LLM responses.
//!
//! Providers are asked for a bare JSON object, but models still wrap it in
//! prose or code fences now and then. Candidates are tried in order:
//!
//! 1. The whole response, trimmed
//! 2. The first ` ```json ` (or bare ` ``` `) fenced block
//! 3. The span from the first `{` to the last `}`
//!
//! The first candidate that deserializes wins. When none does, the error of
//! the most specific candidate is reported.

use crate::core::error::DomainError;
use serde::de::DeserializeOwned;

/// Parse a structured draft out of a raw model response.
pub fn parse_structured<T: DeserializeOwned>(response: &str) -> Result<T, DomainError> {
    let candidates = json_candidates(response);
    if candidates.is_empty() {
        return Err(DomainError::StructuredOutput(
            "response contains no JSON object".to_string(),
        ));
    }

    let mut last_error = None;
    for candidate in candidates {
        match serde_json::from_str::<T>(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    Err(DomainError::StructuredOutput(
        last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unparseable response".to_string()),
    ))
}

fn json_candidates(response: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let trimmed = response.trim();
    if trimmed.starts_with('{') {
        candidates.push(trimmed);
    }
    if let Some(block) = fenced_block(response) {
        candidates.push(block);
    }
    if let (Some(start), Some(end)) = (response.find('{'), response.rfind('}'))
        && start < end
    {
        candidates.push(&response[start..=end]);
    }
    candidates
}

/// Body of the first fenced code block, if any.
fn fenced_block(response: &str) -> Option<&str> {
    let open = response.find("```")?;
    let after_fence = &response[open + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured::drafts::{QueryDraft, SynthesisDraft};

    #[test]
    fn test_parse_raw_json() {
        let draft: QueryDraft =
            parse_structured(r#"{"reasoning_steps": [], "search_query": "q"}"#).unwrap();
        assert_eq!(draft.search_query, "q");
    }

    #[test]
    fn test_parse_fenced_json() {
        let response = "Here you go:\n```json\n{\"search_query\": \"event x\"}\n```\nDone.";
        let draft: QueryDraft = parse_structured(response).unwrap();
        assert_eq!(draft.search_query, "event x");
    }

    #[test]
    fn test_parse_embedded_json() {
        let response = "Answer: {\"reasoning\": \"ok\", \"is_answer_clear\": false, \"sources\": [], \"answer\": null} -- end";
        let draft: SynthesisDraft = parse_structured(response).unwrap();
        assert!(!draft.is_answer_clear);
    }

    #[test]
    fn test_parse_no_json() {
        let err = parse_structured::<QueryDraft>("I cannot help with that").unwrap_err();
        assert!(matches!(err, DomainError::StructuredOutput(_)));
    }

    #[test]
    fn test_parse_wrong_shape_reports_field() {
        let err = parse_structured::<SynthesisDraft>(r#"{"reasoning": "r"}"#).unwrap_err();
        assert!(err.to_string().contains("is_answer_clear"));
    }
}
