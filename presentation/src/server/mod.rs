//! HTTP API
//!
//! `POST /api/request` answers one question, `GET /health` reports liveness.

pub mod dto;
pub mod handlers;
pub mod router;

pub use dto::{AnswerRequest, AnswerResponse, HealthResponse};
pub use handlers::AppState;
pub use router::{router, serve};

#[cfg(test)]
mod test_support;
