//! Scoring gateway — forwards extracted resume text and job description text
//! to the external scoring model and normalizes the outcome.
//!
//! The model sits behind the `ScoreModel` trait so tests can substitute a
//! canned collaborator. The gateway never fabricates or adjusts score values;
//! it only validates them. One model call per request with no retries and no
//! caching; the caller decides whether the user retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::screening::prompts::{ATS_SCORE_PROMPT_TEMPLATE, ATS_SCORE_SYSTEM};

/// One resume / job-description pair submitted for scoring.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description_text: String,
}

/// The validated scoring outcome, passed through from the model unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub compatibility_score: u8,
    pub keyword_matches: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub feedback: String,
}

/// The external scoring collaborator: request in, raw JSON out.
#[async_trait]
pub trait ScoreModel: Send + Sync {
    async fn generate(&self, request: &ScoreRequest) -> Result<Value, AppError>;
}

/// Production collaborator backed by the shared LLM client.
pub struct LlmScoreModel {
    llm: LlmClient,
}

impl LlmScoreModel {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ScoreModel for LlmScoreModel {
    async fn generate(&self, request: &ScoreRequest) -> Result<Value, AppError> {
        let prompt = ATS_SCORE_PROMPT_TEMPLATE
            .replace("{resume_text}", &request.resume_text)
            .replace("{job_description_text}", &request.job_description_text);

        self.llm
            .call_json::<Value>(&prompt, ATS_SCORE_SYSTEM)
            .await
            .map_err(AppError::from)
    }
}

/// Runs one scoring call and normalizes the model's raw response.
pub async fn score_resume(
    model: &dyn ScoreModel,
    request: &ScoreRequest,
) -> Result<ScoreResult, AppError> {
    let response = model.generate(request).await?;
    normalize_response(response)
}

// Mirror of the model's response schema before validation. Numbers arrive as
// arbitrary JSON numbers and are range-checked below.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScoreResponse {
    compatibility_score: serde_json::Number,
    keyword_matches: Vec<String>,
    skill_gaps: Vec<String>,
    feedback: String,
}

/// Validates a raw model response against the `ScoreResult` invariants:
/// integer score in 0..=100, two string sequences, non-empty feedback.
/// A null or structurally empty response is `EmptyModelResponse` — callers
/// never see a partially populated result.
pub fn normalize_response(response: Value) -> Result<ScoreResult, AppError> {
    match &response {
        Value::Null => return Err(AppError::EmptyModelResponse),
        Value::Object(map) if map.is_empty() => return Err(AppError::EmptyModelResponse),
        _ => {}
    }

    let raw: RawScoreResponse = serde_json::from_value(response)
        .map_err(|e| AppError::ModelResponse(format!("response schema violation: {e}")))?;

    let score = raw
        .compatibility_score
        .as_u64()
        .ok_or_else(|| {
            AppError::ModelResponse(format!(
                "compatibility score is not a non-negative integer: {}",
                raw.compatibility_score
            ))
        })?;
    if score > 100 {
        return Err(AppError::ModelResponse(format!(
            "compatibility score {score} outside 0..=100"
        )));
    }

    if raw.feedback.trim().is_empty() {
        return Err(AppError::ModelResponse("feedback is empty".to_string()));
    }

    Ok(ScoreResult {
        compatibility_score: score as u8,
        keyword_matches: raw.keyword_matches,
        skill_gaps: raw.skill_gaps,
        feedback: raw.feedback,
    })
}
