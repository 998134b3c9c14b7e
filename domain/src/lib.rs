//! Domain layer for mcq-scout
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A multiple-choice [`Question`] is free text with enumerated options
//! (`1. Jan 1  2. Jan 2`). Parsing rejects anything with fewer than two
//! distinct labels or a label outside 1..=10.
//!
//! ## Round
//!
//! One cycle of the answering loop:
//!
//! ```text
//! question ─▶ SearchQuery ─▶ PageResult* ─▶ ContentSummary* ─▶ AnswerResult
//!                 ▲                                                 │
//!                 └──────────── refine (not clear) ◀────────────────┘
//! ```
//!
//! ## Exact-match policy
//!
//! An option is selectable only when a summary literally contains its fact
//! text; see [`answer::evidence`].

pub mod answer;
pub mod config;
pub mod core;
pub mod prompt;
pub mod retrieval;
pub mod structured;

// Re-export commonly used types
pub use answer::{AnswerErrorKind, AnswerResult, MAX_SOURCES};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    model::Model,
    question::{AnswerOption, Question},
};
pub use prompt::PromptTemplate;
pub use retrieval::{ContentSummary, PageResult, SearchQuery};
pub use structured::{QueryDraft, SummaryDraft, SynthesisDraft, parse_structured};
