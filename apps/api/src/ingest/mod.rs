//! Résumé ingestion — PDF binary in, one plain-text string out.
//!
//! Writes the upload to a temp file, extracts the text, splits it into
//! fixed-size overlapping character chunks, and joins the chunk contents
//! with single spaces. The overlap means joined text repeats at chunk
//! seams; downstream prompt budgets truncate it anyway.

pub mod handlers;

use std::io::Write;

use crate::errors::AppError;

pub const CHUNK_SIZE: usize = 1000;
pub const CHUNK_OVERLAP: usize = 200;

/// Splits text into character windows of `size` chars advancing by
/// `size - overlap`. The final window may be shorter. Empty input yields no
/// chunks.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || size == 0 {
        return Vec::new();
    }
    let step = size.saturating_sub(overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start += step;
    }
    chunks
}

/// Extracts résumé text from an uploaded PDF binary.
///
/// Extraction failures (encrypted, image-only, corrupt files) surface as
/// `AppError::Pdf`; there is no recovery path.
pub fn extract_resume_text(pdf_bytes: &[u8]) -> Result<String, AppError> {
    let mut tmp = tempfile::NamedTempFile::new().map_err(anyhow::Error::from)?;
    tmp.write_all(pdf_bytes).map_err(anyhow::Error::from)?;

    let raw = pdf_extract::extract_text(tmp.path()).map_err(|e| AppError::Pdf(e.to_string()))?;

    let chunks = chunk_text(&raw, CHUNK_SIZE, CHUNK_OVERLAP);
    Ok(chunks.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_text_short_input_passes_through() {
        let chunks = chunk_text("short resume", CHUNK_SIZE, CHUNK_OVERLAP);
        assert_eq!(chunks, vec!["short resume".to_string()]);
    }

    #[test]
    fn test_chunk_text_empty_input_yields_no_chunks() {
        assert!(chunk_text("", CHUNK_SIZE, CHUNK_OVERLAP).is_empty());
    }

    #[test]
    fn test_chunk_text_windows_overlap() {
        let text: String = ('a'..='z').cycle().take(2500).collect();
        let chunks = chunk_text(&text, 1000, 200);

        // Windows start at 0, 800, 1600, 2400
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].chars().count(), 1000);
        assert_eq!(chunks[1].chars().count(), 1000);
        assert_eq!(chunks[3].chars().count(), 100);

        // Last 200 chars of a chunk are the first 200 of the next
        let tail: String = chunks[0].chars().skip(800).collect();
        let head: String = chunks[1].chars().take(200).collect();
        assert_eq!(tail, head);
    }

    #[test]
    fn test_chunk_text_is_char_based_not_byte_based() {
        let text = "é".repeat(1200);
        let chunks = chunk_text(&text, 1000, 200);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 1000);
        assert_eq!(chunks[1].chars().count(), 400);
    }

    #[test]
    fn test_extract_resume_text_rejects_non_pdf_bytes() {
        let err = extract_resume_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Pdf(_)));
    }
}
