//! Axum route handler for the score endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::screening::extract::extract_text;
use crate::screening::scoring::{score_resume, ScoreRequest, ScoreResult};
use crate::screening::upload::{validate_job_description, validate_resume, UploadedResume};
use crate::state::AppState;

/// Multipart field carrying the resume upload.
pub const FIELD_RESUME: &str = "resumeFile";
/// Multipart field carrying the job description text.
pub const FIELD_JOB_DESCRIPTION: &str = "jobDescriptionText";

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub data: ScoreResult,
}

/// POST /api/v1/score
///
/// Full screening pipeline: validate upload → extract text → score.
/// Two identical submissions issue two independent model calls; nothing is
/// cached between requests.
pub async fn handle_score(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResponse>, AppError> {
    let mut resume: Option<UploadedResume> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart form data: {e}")))?
    {
        // Field metadata is copied out before `bytes()`/`text()` consume the field.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FIELD_RESUME => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let filename = field.file_name().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                resume = Some(UploadedResume {
                    bytes,
                    content_type,
                    filename,
                });
            }
            FIELD_JOB_DESCRIPTION => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?);
            }
            _ => {} // unknown fields are ignored
        }
    }

    // Cheap checks first: presence, size, and type before the description
    // trim and long before any decoding.
    let kind = validate_resume(resume.as_ref())?;
    let Some(upload) = resume else {
        return Err(AppError::MissingResume);
    };
    let description = validate_job_description(job_description.as_deref().unwrap_or(""))?;

    let extracted = extract_text(&upload.bytes, kind)?;
    info!(
        filename = upload.filename.as_deref().unwrap_or("<unnamed>"),
        upload_bytes = upload.bytes.len(),
        extracted_bytes = extracted.text.len(),
        "resume text extracted"
    );

    let request = ScoreRequest {
        resume_text: extracted.text,
        job_description_text: description.to_string(),
    };

    let data = score_resume(state.score_model.as_ref(), &request).await?;
    info!(score = data.compatibility_score, "resume scored");

    Ok(Json(ScoreResponse {
        success: true,
        data,
    }))
}
