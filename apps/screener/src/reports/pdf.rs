//! PDF report: centered title, bordered `Filename` / `Score (%)` table.
//!
//! Drawn directly with lopdf content streams using the standard Helvetica
//! fonts, so no font files are embedded. Rows continue onto new pages with the
//! header repeated.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::{format_score, ReportError};
use crate::pipeline::ScoreResult;

pub const TITLE: &str = "Resume Analysis Report";

// A4 in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 42.5;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 8.0;

const FILENAME_COL_WIDTH: f32 = 283.5;
const SCORE_COL_WIDTH: f32 = 141.7;
const ROW_HEIGHT: f32 = 28.3;
const CELL_PADDING: f32 = 4.0;

/// Helvetica averages about half an em per character.
const AVG_CHAR_WIDTH_EM: f32 = 0.5;

pub fn render_pdf(results: &[ScoreResult], generated_at: DateTime<Utc>) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = doc.add_object(helvetica("Helvetica"));
    let bold = doc.add_object(helvetica("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular,
            "F2" => bold,
        },
    });

    let pages = paginate(results);
    let total = pages.len();
    let stamp = generated_at.format("%Y-%m-%d %H:%M UTC").to_string();

    let mut kids: Vec<Object> = Vec::with_capacity(total);
    for (index, rows) in pages.iter().enumerate() {
        let mut page = PageBuilder::default();
        let mut y = PAGE_HEIGHT - MARGIN;

        if index == 0 {
            y -= TITLE_SIZE;
            let title_width = text_width(TITLE, TITLE_SIZE);
            page.text("F2", TITLE_SIZE, (PAGE_WIDTH - title_width) / 2.0, y, TITLE);
            y -= 2.0 * TITLE_SIZE;
        }

        y -= ROW_HEIGHT;
        page.row(y, "Filename", "Score (%)", "F2");
        for result in rows.iter() {
            y -= ROW_HEIGHT;
            page.row(y, &fit_to_cell(&result.filename), &format_score(result.score), "F1");
        }

        page.text(
            "F1",
            FOOTER_SIZE,
            MARGIN,
            MARGIN / 2.0,
            &format!("Generated {stamp} - page {} of {total}", index + 1),
        );

        let content_id = doc.add_object(Stream::new(dictionary! {}, page.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => total as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = info_dictionary(&mut doc, generated_at);
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    Ok(out)
}

fn helvetica(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn info_dictionary(doc: &mut Document, generated_at: DateTime<Utc>) -> ObjectId {
    doc.add_object(dictionary! {
        "Title" => Object::string_literal(TITLE),
        "Producer" => Object::string_literal(concat!("screener ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(generated_at.format("D:%Y%m%d%H%M%SZ").to_string()),
    })
}

/// Splits rows into pages. The first page loses room to the title; every
/// page keeps one row for the repeated header. Always yields at least one page.
fn paginate(results: &[ScoreResult]) -> Vec<&[ScoreResult]> {
    let usable = PAGE_HEIGHT - 2.0 * MARGIN;
    let rows_per_page = ((usable / ROW_HEIGHT) as usize).saturating_sub(1).max(1);
    let title_rows = ((3.0 * TITLE_SIZE) / ROW_HEIGHT).ceil() as usize;
    let first_page_rows = rows_per_page.saturating_sub(title_rows).max(1);

    let mut pages = Vec::new();
    let (first, mut rest) = results.split_at(results.len().min(first_page_rows));
    pages.push(first);
    while !rest.is_empty() {
        let (page, tail) = rest.split_at(rest.len().min(rows_per_page));
        pages.push(page);
        rest = tail;
    }
    pages
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_CHAR_WIDTH_EM
}

/// Shortens a filename with "..." so it stays inside the filename column.
fn fit_to_cell(text: &str) -> String {
    let max_chars = ((FILENAME_COL_WIDTH - 2.0 * CELL_PADDING) / (BODY_SIZE * AVG_CHAR_WIDTH_EM)) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[derive(Default)]
struct PageBuilder {
    operations: Vec<Operation>,
}

impl PageBuilder {
    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, text: &str) {
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn cell(&mut self, x: f32, y: f32, width: f32, text: &str, font: &str) {
        self.operations.extend([
            Operation::new("w", vec![0.5_f32.into()]),
            Operation::new("re", vec![x.into(), y.into(), width.into(), ROW_HEIGHT.into()]),
            Operation::new("S", vec![]),
        ]);
        let baseline = y + (ROW_HEIGHT - BODY_SIZE) / 2.0 + 2.0;
        self.text(font, BODY_SIZE, x + CELL_PADDING, baseline, text);
    }

    fn row(&mut self, y: f32, filename: &str, score: &str, font: &str) {
        self.cell(MARGIN, y, FILENAME_COL_WIDTH, filename, font);
        self.cell(MARGIN + FILENAME_COL_WIDTH, y, SCORE_COL_WIDTH, score, font);
    }

    fn encode(self) -> Result<Vec<u8>, ReportError> {
        Content {
            operations: self.operations,
        }
        .encode()
        .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::pdf::extract_pdf_text;

    fn result(name: &str, score: f64) -> ScoreResult {
        ScoreResult {
            filename: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_report_text_contains_title_and_rows_in_order() {
        let results = vec![result("alice.pdf", 50.0), result("bob.docx", 66.67)];
        let bytes = render_pdf(&results, Utc::now()).unwrap();
        let text = extract_pdf_text(&bytes).unwrap();

        assert!(text.contains(TITLE), "got {text:?}");
        assert!(text.contains("Score (%)"));
        let alice = text.find("alice.pdf").expect("alice row");
        let bob = text.find("bob.docx").expect("bob row");
        assert!(alice < bob);
        assert!(text.contains("66.67"));
    }

    #[test]
    fn test_long_batches_span_pages() {
        let results: Vec<_> = (0..60).map(|i| result(&format!("cv{i}.pdf"), i as f64)).collect();
        let bytes = render_pdf(&results, Utc::now()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn test_paginate_keeps_every_row_once() {
        let results: Vec<_> = (0..75).map(|i| result(&i.to_string(), 1.0)).collect();
        let pages = paginate(&results);
        assert_eq!(pages.iter().map(|p| p.len()).sum::<usize>(), 75);
        assert!(pages[0].len() < pages[1].len());
    }

    #[test]
    fn test_paginate_empty_yields_one_page() {
        assert_eq!(paginate(&[]).len(), 1);
    }

    #[test]
    fn test_fit_to_cell() {
        assert_eq!(fit_to_cell("short.pdf"), "short.pdf");
        let long = "x".repeat(200);
        let fitted = fit_to_cell(&long);
        assert!(fitted.ends_with("..."));
        assert!(fitted.chars().count() < 200);
    }
}
