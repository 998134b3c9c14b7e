//! Output formatting for answer results

pub mod console;
