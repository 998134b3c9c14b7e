//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is answered.

use scout_domain::{AnswerResult, SearchQuery};

/// Callback for progress updates during the answering loop
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default so reporters only override what they display.
pub trait RoundProgressNotifier: Send + Sync {
    /// Called when a round starts (1-based)
    fn on_round_start(&self, _round: usize, _max_rounds: usize) {}

    /// Called once the round's search query is known
    fn on_query(&self, _round: usize, _query: &SearchQuery) {}

    /// Called after retrieval with the number of usable pages
    fn on_pages_retrieved(&self, _round: usize, _pages: usize) {}

    /// Called after summarization; `failed` counts placeholder summaries
    fn on_summaries_ready(&self, _round: usize, _total: usize, _failed: usize) {}

    /// Called with the round's synthesized result
    fn on_round_complete(&self, _round: usize, _result: &AnswerResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoRoundProgress;

impl RoundProgressNotifier for NoRoundProgress {}
