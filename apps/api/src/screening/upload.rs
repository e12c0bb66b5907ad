//! Input validation for the score endpoint: the uploaded resume artifact and
//! the job description string are checked before any decoding work begins.

use bytes::Bytes;

use crate::errors::AppError;

/// Hard cap on resume uploads: 5 MiB.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Minimum meaningful length, in characters after trimming, for both the
/// job description and the extracted resume text.
pub const MIN_TEXT_CHARS: usize = 50;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_PLAIN: &str = "text/plain";

/// The document formats the extractor owns, derived from the declared MIME
/// type at validation time. An unrecognized type never reaches extraction;
/// it is unrepresentable past this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Some clients append parameters ("text/plain; charset=utf-8").
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        match essence {
            MIME_PDF => Some(DocumentKind::Pdf),
            MIME_DOCX => Some(DocumentKind::Docx),
            MIME_PLAIN => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// A resume artifact as it arrived at the multipart boundary.
/// Dropped as soon as text extraction has produced plain text.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub bytes: Bytes,
    pub content_type: String,
    /// Original filename, kept for display and logging only.
    pub filename: Option<String>,
}

/// Validates the uploaded resume: presence, size, then declared type.
/// Cheap checks run first so oversized or mistyped uploads fail before any
/// decoding is attempted.
pub fn validate_resume(upload: Option<&UploadedResume>) -> Result<DocumentKind, AppError> {
    let upload = upload.ok_or(AppError::MissingResume)?;

    if upload.bytes.is_empty() {
        return Err(AppError::MissingResume);
    }

    if upload.bytes.len() > MAX_RESUME_BYTES {
        return Err(AppError::OversizedResume {
            size: upload.bytes.len(),
            limit: MAX_RESUME_BYTES,
        });
    }

    DocumentKind::from_mime(&upload.content_type)
        .ok_or_else(|| AppError::UnsupportedType(upload.content_type.clone()))
}

/// Validates the job description and returns it trimmed.
/// Exactly `MIN_TEXT_CHARS` characters passes.
pub fn validate_job_description(text: &str) -> Result<&str, AppError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if len < MIN_TEXT_CHARS {
        return Err(AppError::DescriptionTooShort {
            len,
            min: MIN_TEXT_CHARS,
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(bytes: Vec<u8>, content_type: &str) -> UploadedResume {
        UploadedResume {
            bytes: Bytes::from(bytes),
            content_type: content_type.to_string(),
            filename: Some("resume.pdf".to_string()),
        }
    }

    #[test]
    fn test_missing_upload_rejected() {
        assert!(matches!(
            validate_resume(None),
            Err(AppError::MissingResume)
        ));
    }

    #[test]
    fn test_empty_upload_rejected() {
        let u = upload(vec![], MIME_PDF);
        assert!(matches!(
            validate_resume(Some(&u)),
            Err(AppError::MissingResume)
        ));
    }

    #[test]
    fn test_oversized_rejected_regardless_of_type() {
        for mime in [MIME_PDF, MIME_DOCX, MIME_PLAIN, "image/png"] {
            let u = upload(vec![0u8; MAX_RESUME_BYTES + 1], mime);
            assert!(
                matches!(
                    validate_resume(Some(&u)),
                    Err(AppError::OversizedResume { .. })
                ),
                "size check should come before type check for {mime}"
            );
        }
    }

    #[test]
    fn test_exactly_at_limit_passes_size_check() {
        let u = upload(vec![0u8; MAX_RESUME_BYTES], MIME_PLAIN);
        assert_eq!(validate_resume(Some(&u)).unwrap(), DocumentKind::PlainText);
    }

    #[test]
    fn test_unsupported_types_rejected() {
        for mime in ["image/png", "application/msword", "text/html", ""] {
            let u = upload(vec![1, 2, 3], mime);
            match validate_resume(Some(&u)) {
                Err(AppError::UnsupportedType(t)) => assert_eq!(t, mime),
                other => panic!("expected UnsupportedType for {mime}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_accepted_types_map_to_kinds() {
        assert_eq!(DocumentKind::from_mime(MIME_PDF), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_mime(MIME_DOCX), Some(DocumentKind::Docx));
        assert_eq!(
            DocumentKind::from_mime(MIME_PLAIN),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_mime_parameters_tolerated() {
        assert_eq!(
            DocumentKind::from_mime("text/plain; charset=utf-8"),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let err = validate_job_description("   too short   ").unwrap_err();
        assert!(matches!(err, AppError::DescriptionTooShort { .. }));
    }

    #[test]
    fn test_description_of_exactly_minimum_length_passes() {
        let text = "x".repeat(MIN_TEXT_CHARS);
        assert_eq!(validate_job_description(&text).unwrap(), text);
    }

    #[test]
    fn test_description_trimmed_before_length_check() {
        // 49 real characters padded with whitespace must still fail
        let text = format!("   {}   ", "x".repeat(MIN_TEXT_CHARS - 1));
        assert!(matches!(
            validate_job_description(&text),
            Err(AppError::DescriptionTooShort { len: 49, .. })
        ));
    }
}
