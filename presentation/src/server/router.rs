//! Router assembly and request logging

use super::handlers::{AppState, answer_request, health};
use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use scout_application::LlmGateway;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::info;

/// Build the API router over a shared use case
pub fn router<G: LlmGateway + 'static>(state: AppState<G>) -> Router {
    Router::new()
        .route("/api/request", post(answer_request::<G>))
        .route("/health", get(health))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Serve `app` until the listener fails
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, app).await
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %uri.path(),
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );
    response
}
