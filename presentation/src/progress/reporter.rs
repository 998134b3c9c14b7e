//! Progress reporting for the answering loop

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scout_application::RoundProgressNotifier;
use scout_domain::{AnswerResult, SearchQuery};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per round
pub struct ProgressReporter {
    round_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            round_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .expect("valid spinner template")
    }

    fn round_label(round: usize, max_rounds: usize) -> String {
        format!("Round {}/{}", round, max_rounds)
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.round_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundProgressNotifier for ProgressReporter {
    fn on_round_start(&self, round: usize, max_rounds: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::round_label(round, max_rounds));
        pb.set_message("Generating search query...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.round_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_query(&self, _round: usize, query: &SearchQuery) {
        self.with_bar(|pb| pb.set_message(format!("Searching: {}", query)));
    }

    fn on_pages_retrieved(&self, _round: usize, pages: usize) {
        self.with_bar(|pb| pb.set_message(format!("Summarizing {} page(s)...", pages)));
    }

    fn on_summaries_ready(&self, _round: usize, total: usize, failed: usize) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "Synthesizing from {} summary(ies), {} failed...",
                total, failed
            ))
        });
    }

    fn on_round_complete(&self, _round: usize, result: &AnswerResult) {
        if let Ok(mut guard) = self.round_bar.lock()
            && let Some(pb) = guard.take()
        {
            let status = if result.is_answer_clear {
                "clear answer".green()
            } else {
                "no clear answer".yellow()
            };
            pb.finish_with_message(status.to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RoundProgressNotifier for SimpleProgress {
    fn on_round_start(&self, round: usize, max_rounds: usize) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::round_label(round, max_rounds).bold()
        );
    }

    fn on_query(&self, _round: usize, query: &SearchQuery) {
        eprintln!("  query: {}", query);
    }

    fn on_pages_retrieved(&self, _round: usize, pages: usize) {
        eprintln!("  pages: {}", pages);
    }

    fn on_summaries_ready(&self, _round: usize, total: usize, failed: usize) {
        if failed > 0 {
            eprintln!("  summaries: {} ({} {})", total, failed, "failed".red());
        } else {
            eprintln!("  summaries: {}", total);
        }
    }

    fn on_round_complete(&self, _round: usize, result: &AnswerResult) {
        if result.is_answer_clear {
            eprintln!("  {} clear answer", "v".green());
        } else {
            eprintln!("  {} no clear answer", "x".yellow());
        }
    }
}
