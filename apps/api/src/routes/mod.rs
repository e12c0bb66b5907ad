pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_describe_job;
use crate::screening::handlers::handle_score;
use crate::screening::upload::MAX_RESUME_BYTES;
use crate::state::AppState;

/// Headroom above the resume size cap for multipart framing and the
/// description field, so the validator rather than the framework's body
/// limit rejects oversized resumes with a field-level error.
const BODY_LIMIT_MARGIN: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/score", post(handle_score))
        .route("/api/v1/jobs/describe", post(handle_describe_job))
        .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES + BODY_LIMIT_MARGIN))
        .with_state(state)
}
