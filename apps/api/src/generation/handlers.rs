//! Axum route handler for job description generation.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{JOB_DESCRIPTION_PROMPT_TEMPLATE, JOB_DESCRIPTION_SYSTEM};
use crate::state::AppState;

/// Minimum length of a job role after trimming.
const MIN_ROLE_CHARS: usize = 3;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeJobRequest {
    pub job_role: String,
}

#[derive(Debug, Serialize)]
pub struct DescribeJobResponse {
    pub success: bool,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDescriptionDraft {
    job_description: String,
}

/// POST /api/v1/jobs/describe
///
/// Drafts a job description for a role. The client feeds the result back into
/// the score form, so the screening pipeline still validates it like any
/// user-supplied description.
pub async fn handle_describe_job(
    State(state): State<AppState>,
    Json(request): Json<DescribeJobRequest>,
) -> Result<Json<DescribeJobResponse>, AppError> {
    let role = validate_job_role(&request.job_role)?;

    let prompt = JOB_DESCRIPTION_PROMPT_TEMPLATE.replace("{job_role}", role);
    let draft: JobDescriptionDraft = state
        .llm
        .call_json(&prompt, JOB_DESCRIPTION_SYSTEM)
        .await?;

    if draft.job_description.trim().is_empty() {
        return Err(AppError::EmptyModelResponse);
    }

    Ok(Json(DescribeJobResponse {
        success: true,
        description: draft.job_description,
    }))
}

fn validate_job_role(role: &str) -> Result<&str, AppError> {
    let trimmed = role.trim();
    if trimmed.chars().count() < MIN_ROLE_CHARS {
        return Err(AppError::Validation(
            "Invalid job role provided.".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_below_minimum_rejected() {
        for role in ["", "ab", "  a  "] {
            assert!(matches!(
                validate_job_role(role),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_role_of_exactly_minimum_length_passes() {
        assert_eq!(validate_job_role(" DBA ").unwrap(), "DBA");
    }

    #[test]
    fn test_prompt_template_has_role_placeholder() {
        assert!(JOB_DESCRIPTION_PROMPT_TEMPLATE.contains("{job_role}"));
    }

    #[test]
    fn test_draft_deserializes_from_model_schema() {
        let draft: JobDescriptionDraft =
            serde_json::from_str(r#"{"jobDescription": "We are hiring."}"#).unwrap();
        assert_eq!(draft.job_description, "We are hiring.");
    }
}
