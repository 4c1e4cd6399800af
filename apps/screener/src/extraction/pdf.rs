use std::panic;

use super::ExtractError;

/// Page-wise PDF text extraction. Every page, including the last, is followed
/// by `\n`; pages without text still contribute the separator.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning Err.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractError::Pdf("parser panicked on malformed input".to_string()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::pdf_bytes;

    #[test]
    fn test_join_pages_trails_every_page() {
        let pages = vec!["one".to_string(), String::new(), "three".to_string()];
        assert_eq!(join_pages(&pages), "one\n\nthree\n");
    }

    #[test]
    fn test_join_pages_empty_document() {
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn test_extracts_text_from_generated_pdf() {
        let bytes = pdf_bytes(&["Python developer with cloud experience"]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Python developer with cloud experience"), "got {text:?}");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_pages_come_out_in_order() {
        let bytes = pdf_bytes(&["Alpha page", "Omega page"]);
        let text = extract_pdf_text(&bytes).unwrap();
        let alpha = text.find("Alpha").expect("first page text");
        let omega = text.find("Omega").expect("second page text");
        assert!(alpha < omega);
    }

    #[test]
    fn test_truncated_pdf_is_an_error() {
        let bytes = pdf_bytes(&["Rust engineer"]);
        let truncated = &bytes[..bytes.len() / 3];
        assert!(extract_pdf_text(truncated).is_err());
    }
}
