//! Application-level configuration.
//!
//! - [`AnswerParams`] - answering loop control (rounds, caps, timeouts)

pub mod answer_params;

pub use answer_params::AnswerParams;
