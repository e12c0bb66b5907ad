use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::screening::scoring::ScoreModel;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is constructed once at startup and read-only
/// afterwards; concurrent requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// The external scoring collaborator. Behind a trait so tests can swap in
    /// a canned model.
    pub score_model: Arc<dyn ScoreModel>,
    pub config: Config,
}
