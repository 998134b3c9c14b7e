//! Structured model outputs: the draft shapes and how they are pulled out of
//! raw response text.

pub mod drafts;
pub mod parsing;

pub use drafts::{QueryDraft, SummaryDraft, SynthesisDraft};
pub use parsing::parse_structured;
