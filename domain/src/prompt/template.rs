//! Prompt templates for each stage of the answering loop

use crate::core::question::Question;
use crate::retrieval::ContentSummary;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for query generation and refinement
    pub fn query_system() -> &'static str {
        r#"You are a search strategist specialised in information retrieval.
You write web search queries that surface authoritative, primary sources.
Always reply with a single JSON object and nothing else."#
    }

    /// User prompt for the first search query of a question
    pub fn query_generation(question: &Question) -> String {
        format!(
            r#"Question:
{}

Write ONE web search query for this question. Requirements:
1. Keep every distinguishing fact from the question: numbers, dates, proper names.
2. Follow the pattern [event or organisation] [fact sought] [narrowing details] [year].
3. Prefer the wording official sources use ("schedule", "official dates", "approved").
4. Do not repeat synonyms; pick the single most effective wording.
5. Use 5 to 15 meaningful words separated by spaces, no quotes, no punctuation.
6. Never mention the answer options.

Reply with JSON:
{{"reasoning_steps": ["<step>", "..."], "search_query": "<query>"}}"#,
            question.content()
        )
    }

    /// User prompt for replacing a query that did not lead to a clear answer
    pub fn query_refinement(question: &Question, previous_query: &str) -> String {
        format!(
            r#"Question:
{}

The previous search query did not find the information needed: {}

Diagnose why and write a better replacement query. Consider:
- the key terms and units of meaning in the question
- rephrasings that make the query more precise
- dropping superfluous or ambiguous words
- adding specifics if the question is general

The new query must differ from the previous one, keep every number, date and
proper name from the question, and must not mention the answer options.

Reply with JSON:
{{"reasoning_steps": ["<step>", "..."], "search_query": "<query>"}}"#,
            question.content(),
            previous_query
        )
    }

    /// System prompt for per-page summarization
    pub fn summary_system() -> &'static str {
        r#"You are an information analyst who extracts facts with surgical precision.
You never make mental leaps and you prefer primary data over commentary.
Always reply with a single JSON object and nothing else."#
    }

    /// User prompt for extracting question-relevant facts from one page
    pub fn summarization(question: &Question, content: &str) -> String {
        format!(
            r#"Question:
{}

Content (excerpt):
{}

Steps:
1. Work out what the question is really asking.
2. Find the facts in the content that bear on it.
3. Ignore irrelevant or secondary details.
4. Do not confuse similar terms; quote numbers and dates exactly as written.
5. Be concise and objective.

Report the content that helps answer the question. If nothing is relevant, say so.

Reply with JSON:
{{"reasoning_steps": ["<step>", "..."], "summary": "<relevant facts>"}}"#,
            question.content(),
            content
        )
    }

    /// System prompt for answer synthesis
    pub fn synthesis_system() -> &'static str {
        r#"You are a senior fact-checker auditing information under a strict due-diligence protocol.
Principles:
1. Zero trust: every claim needs explicit support in the sources.
2. Primary data only: work with explicitly stated facts.
3. Discrepancy veto: any contradiction between sources means no answer.
4. Traceability: every part of the answer cites its source.
Always reply with a single JSON object and nothing else."#
    }

    /// User prompt for choosing an option from the collected summaries
    pub fn synthesis(question: &Question, summaries: &[ContentSummary]) -> String {
        let options = question
            .options()
            .iter()
            .map(|o| format!("{}. {}", o.label, o.text))
            .collect::<Vec<_>>()
            .join("\n");

        let evidence: Vec<[&str; 2]> = summaries
            .iter()
            .map(|s| [s.source.as_str(), s.summary.as_str()])
            .collect();
        let evidence =
            serde_json::to_string_pretty(&evidence).unwrap_or_else(|_| "[]".to_string());

        format!(
            r#"Question:
{}

Available options:
{}

Relevant information from sources ([source, summary] pairs):
{}

Analysis rules:
1. Compare every number, date or exact fact in the sources with the options.
2. Select an option ONLY if a source contains an exact match of its wording.
3. No assumptions, no interpolation, never pick the "closest" option.
4. If sources contradict each other on the relevant fact, answer null.
5. If the information is missing, partial or ambiguous, answer null.

Reply with JSON:
{{
  "reasoning": "<search for exact matches per option, check contradictions, assess completeness>",
  "is_answer_clear": <true if the selection is unambiguous, otherwise false>,
  "sources": ["<url of a source quoted for the answer>", "..."],
  "answer": <option number, or null>
}}"#,
            question.content(),
            options,
            evidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::parse("Event X date? 1. Jan 1  2. Jan 2").unwrap()
    }

    #[test]
    fn test_query_generation_format() {
        let prompt = PromptTemplate::query_generation(&question());
        assert!(prompt.contains("Event X date?"));
        assert!(prompt.contains("search_query"));
    }

    #[test]
    fn test_query_refinement_mentions_previous() {
        let prompt = PromptTemplate::query_refinement(&question(), "event x date");
        assert!(prompt.contains("event x date"));
        assert!(prompt.contains("must differ"));
    }

    #[test]
    fn test_summarization_format() {
        let prompt = PromptTemplate::summarization(&question(), "Event X is on Jan 2.");
        assert!(prompt.contains("Event X is on Jan 2."));
        assert!(prompt.contains("\"summary\""));
    }

    #[test]
    fn test_synthesis_lists_options_and_sources() {
        let summaries = vec![ContentSummary::new(
            "https://example.com/x",
            "Event X is on Jan 2",
            vec![],
        )];
        let prompt = PromptTemplate::synthesis(&question(), &summaries);
        assert!(prompt.contains("1. Jan 1"));
        assert!(prompt.contains("2. Jan 2"));
        assert!(prompt.contains("https://example.com/x"));
        assert!(prompt.contains("is_answer_clear"));
    }
}
