//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - the language model id used for every stage
//! - [`question::Question`] - a validated multiple-choice question
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
