//! Answer subdomain: the result returned to callers and the literal-evidence
//! rule that decides whether an option may be selected.

pub mod evidence;
pub mod value_objects;

pub use evidence::{canonicalize, contains_fact, supporting_summaries};
pub use value_objects::{AnswerErrorKind, AnswerResult, MAX_SOURCES};
