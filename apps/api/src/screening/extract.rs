//! Text extraction from validated resume uploads.
//!
//! One capability ("produce plain text from bytes") with three variants,
//! dispatched on `DocumentKind`. Decoder failures are classified at this
//! boundary as `AppError::Extraction`; they never escape as raw parse errors
//! or panics.

use std::panic::{catch_unwind, AssertUnwindSafe};

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;
use crate::screening::upload::{DocumentKind, MIN_TEXT_CHARS};

/// Plain text pulled out of an uploaded document, tagged with its source
/// format. Guaranteed to hold at least `MIN_TEXT_CHARS` characters after
/// trimming.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub kind: DocumentKind,
}

/// Extracts plain text from `bytes` according to the validated `kind`.
/// Every format shares the same post-condition: too little text is an
/// `InsufficientText` failure, protecting the scoring call from near-empty
/// input.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<ExtractedText, AppError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::PlainText => extract_plain(bytes),
    };

    let len = text.trim().chars().count();
    if len < MIN_TEXT_CHARS {
        return Err(AppError::InsufficientText {
            len,
            min: MIN_TEXT_CHARS,
        });
    }

    Ok(ExtractedText { text, kind })
}

/// All page text in document order, whitespace as the decoder emits it.
fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    // pdf-extract can panic on malformed xref tables and damaged streams;
    // a corrupt upload must classify as Extraction, not take down the task.
    let result = catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Extraction(format!("PDF decode failed: {e}"))),
        Err(_) => Err(AppError::Extraction(
            "PDF decoder panicked on malformed input".to_string(),
        )),
    }
}

/// Visible text of the OOXML document body, one line per paragraph.
/// Formatting, images, and structural markup are discarded.
fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    let docx =
        read_docx(bytes).map_err(|e| AppError::Extraction(format!("DOCX decode failed: {e}")))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for p_child in paragraph.children {
                if let ParagraphChild::Run(run) = p_child {
                    for r_child in run.children {
                        match r_child {
                            RunChild::Text(t) => text.push_str(&t.text),
                            RunChild::Tab(_) => text.push('\t'),
                            RunChild::Break(_) => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

/// Lenient UTF-8 decode: invalid byte sequences become U+FFFD rather than
/// failing the request.
fn extract_plain(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    const FILLER: &str = "This filler sentence only exists to satisfy the minimum length check.";

    /// Builds a valid single-page PDF with one Helvetica text run and a
    /// correct xref table. `text` must not contain parentheses.
    fn minimal_pdf(text: &str) -> Vec<u8> {
        let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_offset = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    fn minimal_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("packing docx fixture");
        buf.into_inner()
    }

    #[test]
    fn test_plain_text_round_trips_unchanged() {
        let payload = "A".repeat(100);
        let extracted = extract_text(payload.as_bytes(), DocumentKind::PlainText).unwrap();
        assert_eq!(extracted.text, payload);
        assert_eq!(extracted.kind, DocumentKind::PlainText);
    }

    #[test]
    fn test_plain_text_invalid_utf8_decodes_lossily() {
        let mut payload = FILLER.as_bytes().to_vec();
        payload.extend_from_slice(&[0xFF, 0xFE, 0xFD]);
        let extracted = extract_text(&payload, DocumentKind::PlainText).unwrap();
        assert!(extracted.text.starts_with(FILLER));
        assert!(extracted.text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_short_plain_text_is_insufficient() {
        let err = extract_text(b"Jane Doe", DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, AppError::InsufficientText { len: 8, .. }));
    }

    #[test]
    fn test_whitespace_only_plain_text_is_insufficient() {
        let payload = " \n\t ".repeat(40);
        let err = extract_text(payload.as_bytes(), DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, AppError::InsufficientText { len: 0, .. }));
    }

    #[test]
    fn test_minimal_pdf_extracts_its_text() {
        let pdf = minimal_pdf(
            "Hello World, this resume has enough characters to pass the length check.",
        );
        let extracted = extract_text(&pdf, DocumentKind::Pdf).unwrap();
        assert!(
            extracted.text.contains("Hello World"),
            "got: {:?}",
            extracted.text
        );
        assert_eq!(extracted.kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_truncated_pdf_is_extraction_error() {
        let mut pdf = minimal_pdf(FILLER);
        pdf.truncate(pdf.len() / 2);
        let err = extract_text(&pdf, DocumentKind::Pdf).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)), "got {err:?}");
    }

    #[test]
    fn test_garbage_pdf_is_extraction_error() {
        let err = extract_text(b"%PDF-1.4 not actually a pdf", DocumentKind::Pdf).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_docx_round_trip_extracts_paragraphs() {
        let docx = minimal_docx(&["Jane Doe, Senior Engineer", FILLER]);
        let extracted = extract_text(&docx, DocumentKind::Docx).unwrap();
        assert!(extracted.text.contains("Jane Doe, Senior Engineer"));
        assert!(extracted.text.contains(FILLER));
    }

    #[test]
    fn test_malformed_docx_is_extraction_error() {
        let err = extract_text(b"PK\x03\x04 not a real archive", DocumentKind::Docx).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_nearly_empty_docx_is_insufficient() {
        let docx = minimal_docx(&["Jane"]);
        let err = extract_text(&docx, DocumentKind::Docx).unwrap_err();
        assert!(matches!(err, AppError::InsufficientText { .. }));
    }
}
