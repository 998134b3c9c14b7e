//! Literal evidence matching for the exact-match answer policy.
//!
//! An option counts as supported only when its fact text occurs verbatim in a
//! summary, after both sides are canonicalized:
//!
//! | Step | Effect |
//! |------|--------|
//! | lowercase | `"JAN 2"` matches `"jan 2"` |
//! | dash folding | `‐ ‑ ‒ – — ― −` become `-` |
//! | NBSP folding | U+00A0 and U+202F become a space |
//! | whitespace collapse | runs of whitespace become one space |
//!
//! The match must sit on token boundaries: `"jan 2"` is not found in
//! `"jan 20"`.

use crate::retrieval::ContentSummary;

/// Canonical form used on both sides of an evidence comparison.
pub fn canonicalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(|c| match c {
            '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
            '\u{00a0}' | '\u{202f}' => ' ',
            other => other,
        })
        .collect();
    folded
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `haystack` contains `fact` literally, on token boundaries.
///
/// An empty fact never matches.
pub fn contains_fact(haystack: &str, fact: &str) -> bool {
    let fact = canonicalize(fact);
    if fact.is_empty() {
        return false;
    }
    let haystack = canonicalize(haystack);

    let starts_alnum = fact.chars().next().is_some_and(char::is_alphanumeric);
    let ends_alnum = fact.chars().last().is_some_and(char::is_alphanumeric);

    haystack.match_indices(&fact).any(|(start, matched)| {
        let before_ok = !starts_alnum
            || haystack[..start]
                .chars()
                .last()
                .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = !ends_alnum
            || haystack[start + matched.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

/// Summaries that literally contain `fact`. Placeholders are never evidence.
pub fn supporting_summaries<'a>(
    fact: &str,
    summaries: &'a [ContentSummary],
) -> Vec<&'a ContentSummary> {
    summaries
        .iter()
        .filter(|s| !s.is_placeholder && contains_fact(&s.summary, fact))
        .collect()
}
