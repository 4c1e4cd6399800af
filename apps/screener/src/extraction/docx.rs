use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractError;

/// Joins top-level body paragraphs with `\n` (no trailing separator).
/// Empty paragraphs are kept so line structure survives; tables are not read.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(format!("{e:?}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{docx_bytes, pack_docx};
    use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Run};

    #[test]
    fn test_paragraphs_joined_with_single_newline() {
        let bytes = docx_bytes(&["Senior Rust engineer", "Distributed systems"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Senior Rust engineer\nDistributed systems");
    }

    #[test]
    fn test_empty_paragraph_is_preserved() {
        let bytes = docx_bytes(&["Summary", "", "Skills"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Summary\n\nSkills");
    }

    #[test]
    fn test_single_paragraph_has_no_trailing_newline() {
        let bytes = docx_bytes(&["Kubernetes"]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Kubernetes");
    }

    #[test]
    fn test_tab_becomes_tab_character() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new().add_run(Run::new().add_text("Skills").add_tab().add_text("Rust")),
        );
        assert_eq!(extract_docx_text(&pack_docx(docx)).unwrap(), "Skills\tRust");
    }

    #[test]
    fn test_break_becomes_newline() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text("Line one")
                    .add_break(BreakType::TextWrapping)
                    .add_text("Line two"),
            ),
        );
        assert_eq!(extract_docx_text(&pack_docx(docx)).unwrap(), "Line one\nLine two");
    }

    #[test]
    fn test_hyperlink_text_is_included() {
        let link = Hyperlink::new("https://github.com/jo", HyperlinkType::External)
            .add_run(Run::new().add_text("github.com/jo"));
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Portfolio:"))
                .add_hyperlink(link)
                .add_run(Run::new().add_text("(open source)")),
        );
        assert_eq!(
            extract_docx_text(&pack_docx(docx)).unwrap(),
            "Portfolio:github.com/jo(open source)"
        );
    }

    #[test]
    fn test_non_zip_payload_is_an_error() {
        let err = extract_docx_text(b"%PDF-1.4 definitely not a docx").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
