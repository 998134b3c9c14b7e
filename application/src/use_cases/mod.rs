//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod query_strategist;
pub mod retrieve;
pub(crate) mod shared;
pub mod summarize;
pub mod synthesize;

#[cfg(test)]
pub(crate) mod test_support;
