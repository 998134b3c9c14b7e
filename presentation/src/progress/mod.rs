//! Progress reporting for the answering loop

pub mod reporter;
