use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type covering the full screening taxonomy.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is recoverable at the request boundary: it renders as a
/// structured `{ success: false, error, fieldErrors }` body, never a crash.
/// Classification happens where the underlying failure occurs; downstream
/// code never reconstructs error kinds by sniffing message text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume file is required")]
    MissingResume,

    #[error("Resume file is {size} bytes, above the {limit} byte limit")]
    OversizedResume { size: usize, limit: usize },

    #[error("Unsupported resume type: {0}")]
    UnsupportedType(String),

    #[error("Job description is {len} characters after trimming, below the {min} minimum")]
    DescriptionTooShort { len: usize, min: usize },

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Extracted only {len} characters of text, below the {min} minimum")]
    InsufficientText { len: usize, min: usize },

    #[error("Model transport error: {0}")]
    ModelTransport(String),

    #[error("Model response error: {0}")]
    ModelResponse(String),

    #[error("Model returned an empty response")]
    EmptyModelResponse,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::llm_client::LlmError> for AppError {
    fn from(e: crate::llm_client::LlmError) -> Self {
        use crate::llm_client::LlmError;
        match e {
            LlmError::EmptyContent => AppError::EmptyModelResponse,
            e if e.is_transport() => AppError::ModelTransport(e.to_string()),
            e => AppError::ModelResponse(e.to_string()),
        }
    }
}

impl AppError {
    /// The form field this error should be attached to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AppError::MissingResume
            | AppError::OversizedResume { .. }
            | AppError::UnsupportedType(_)
            | AppError::Extraction(_)
            | AppError::InsufficientText { .. } => Some("resumeFile"),
            AppError::DescriptionTooShort { .. } => Some("jobDescriptionText"),
            _ => None,
        }
    }

    /// User-facing message. Internal detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingResume => "Resume file is required.".to_string(),
            AppError::OversizedResume { .. } => "Max file size is 5MB.".to_string(),
            AppError::UnsupportedType(_) => {
                ".pdf, .docx, and .txt files are accepted.".to_string()
            }
            AppError::DescriptionTooShort { min, .. } => {
                format!("Job description is missing or too short. It must be at least {min} characters.")
            }
            AppError::Extraction(_) => {
                "There was an error reading the content of the uploaded file. \
                 It might be corrupted or password-protected."
                    .to_string()
            }
            AppError::InsufficientText { min, .. } => format!(
                "Could not extract sufficient text from the resume file. Ensure the file \
                 is not empty or corrupted and contains at least {min} characters."
            ),
            AppError::ModelTransport(_) => {
                "The scoring service could not be reached. Please try again.".to_string()
            }
            AppError::ModelResponse(_) => {
                "The scoring service returned an unexpected response. Please try again."
                    .to_string()
            }
            AppError::EmptyModelResponse => {
                "The scoring service returned no result. Please try again.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Internal(e) => format!("An unexpected error occurred: {e}"),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingResume
            | AppError::OversizedResume { .. }
            | AppError::UnsupportedType(_)
            | AppError::DescriptionTooShort { .. }
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) | AppError::InsufficientText { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::ModelTransport(_)
            | AppError::ModelResponse(_)
            | AppError::EmptyModelResponse => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Extraction(detail) => tracing::warn!("extraction failed: {detail}"),
            AppError::ModelTransport(detail) => tracing::error!("model transport error: {detail}"),
            AppError::ModelResponse(detail) => tracing::error!("model response error: {detail}"),
            AppError::EmptyModelResponse => tracing::error!("model returned empty response"),
            AppError::Internal(e) => tracing::error!("internal error: {e:?}"),
            _ => tracing::debug!("request rejected: {self}"),
        }

        let message = self.user_message();
        let body = match self.field() {
            Some(field) => Json(json!({
                "success": false,
                "error": message,
                "fieldErrors": { field: [message] }
            })),
            None => Json(json!({
                "success": false,
                "error": message
            })),
        };

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_errors_attach_to_resume_field() {
        let errors = [
            AppError::MissingResume,
            AppError::OversizedResume {
                size: 6 * 1024 * 1024,
                limit: 5 * 1024 * 1024,
            },
            AppError::UnsupportedType("image/png".to_string()),
            AppError::Extraction("broken xref".to_string()),
            AppError::InsufficientText { len: 10, min: 50 },
        ];
        for e in errors {
            assert_eq!(e.field(), Some("resumeFile"), "wrong field for {e}");
        }
    }

    #[test]
    fn test_description_error_attaches_to_description_field() {
        let e = AppError::DescriptionTooShort { len: 12, min: 50 };
        assert_eq!(e.field(), Some("jobDescriptionText"));
    }

    #[test]
    fn test_model_errors_have_no_field() {
        assert_eq!(AppError::EmptyModelResponse.field(), None);
        assert_eq!(AppError::ModelTransport("timeout".into()).field(), None);
        assert_eq!(AppError::ModelResponse("bad schema".into()).field(), None);
    }

    #[test]
    fn test_user_message_never_leaks_internal_detail() {
        let e = AppError::ModelResponse("missing field `compatibilityScore` at line 1".into());
        assert!(!e.user_message().contains("compatibilityScore"));
    }

    #[test]
    fn test_validation_statuses() {
        assert_eq!(AppError::MissingResume.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Extraction("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::EmptyModelResponse.status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
