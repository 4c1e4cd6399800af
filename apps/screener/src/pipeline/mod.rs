//! Batch pipeline: uploaded documents in, one tagged outcome per document out.
//!
//! classify format → extract text → score against the prepared job profile.
//! CPU-bound; callers run it inside `tokio::task::spawn_blocking`.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extraction::{extract_text, DocumentFormat};
use crate::scoring::{JobProfile, Scorer};

pub mod filename;
pub mod handlers;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// An uploaded file. Read once during extraction, then dropped.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// A scored document as it appears in the response and in every export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub filename: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    UnsupportedFormat,
    ReadFailed { detail: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub reason: SkipReason,
}

/// Per-document result; keeps skipped files visible instead of dropping them.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    Scored(ScoreResult),
    Skipped(SkippedDocument),
}

/// Outcomes of one batch, in upload order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    pub fn results(&self) -> Vec<ScoreResult> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DocumentOutcome::Scored(r) => Some(r.clone()),
                DocumentOutcome::Skipped(_) => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> Vec<SkippedDocument> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DocumentOutcome::Skipped(s) => Some(s.clone()),
                DocumentOutcome::Scored(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("No valid resumes processed")]
    Empty,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Stateless between runs; the scorer (and the tagger behind it) is injected.
#[derive(Clone)]
pub struct BatchPipeline {
    scorer: Arc<dyn Scorer>,
}

impl BatchPipeline {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Scores every supported document against `job_desc`.
    /// Fails with `BatchError::Empty` when nothing could be scored.
    pub fn run(&self, documents: &[Document], job_desc: &str) -> Result<BatchReport, BatchError> {
        let job = self.scorer.prepare(job_desc);

        let outcomes: Vec<DocumentOutcome> = documents
            .iter()
            .map(|doc| self.process(doc, &job))
            .collect();

        let scored = outcomes
            .iter()
            .filter(|o| matches!(o, DocumentOutcome::Scored(_)))
            .count();
        info!(
            "Batch finished: {scored} scored, {} skipped (scorer: {})",
            outcomes.len() - scored,
            self.scorer.name()
        );

        if scored == 0 {
            return Err(BatchError::Empty);
        }
        Ok(BatchReport { outcomes })
    }

    fn process(&self, doc: &Document, job: &JobProfile) -> DocumentOutcome {
        let skip = |reason: SkipReason| {
            warn!("Skipping '{}': {:?}", doc.filename, reason);
            DocumentOutcome::Skipped(SkippedDocument {
                filename: doc.filename.clone(),
                reason,
            })
        };

        let Some(format) = DocumentFormat::from_filename(&doc.filename) else {
            return skip(SkipReason::UnsupportedFormat);
        };

        let text = match extract_text(format, &doc.bytes) {
            Ok(text) => text,
            Err(e) => {
                return skip(SkipReason::ReadFailed {
                    detail: e.to_string(),
                })
            }
        };

        let score = self.scorer.score(&text, job);
        debug!(
            "Scored '{}' ({format}, {} chars): {score}",
            doc.filename,
            text.len()
        );

        DocumentOutcome::Scored(ScoreResult {
            filename: doc.filename.clone(),
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{build_scorer, ScoringStrategy};
    use crate::terms::LexiconTagger;
    use crate::test_support::{docx_bytes, pdf_bytes};

    fn pipeline() -> BatchPipeline {
        BatchPipeline::new(build_scorer(
            ScoringStrategy::Overlap,
            Arc::new(LexiconTagger::new()),
        ))
    }

    const JD: &str = "Python cloud engineer role";

    #[test]
    fn test_pdf_scenario_scores_fifty() {
        let docs = vec![Document::new(
            "resume.pdf",
            pdf_bytes(&["Python developer with cloud experience"]),
        )];
        let report = pipeline().run(&docs, JD).unwrap();
        assert_eq!(
            report.results(),
            vec![ScoreResult {
                filename: "resume.pdf".to_string(),
                score: 50.0
            }]
        );
    }

    #[test]
    fn test_unsupported_file_skipped_alongside_docx() {
        let docs = vec![
            Document::new("notes.txt", b"Python cloud engineer role".to_vec()),
            Document::new("cv.docx", docx_bytes(&["Python cloud engineer"])),
        ];
        let report = pipeline().run(&docs, JD).unwrap();

        let results = report.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].filename, "cv.docx");

        let skipped = report.skipped();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].filename, "notes.txt");
        assert_eq!(skipped[0].reason, SkipReason::UnsupportedFormat);
    }

    #[test]
    fn test_no_valid_documents_is_batch_empty() {
        let docs = vec![
            Document::new("a.txt", b"text".to_vec()),
            Document::new("b.png", vec![0x89, 0x50]),
        ];
        assert!(matches!(pipeline().run(&docs, JD), Err(BatchError::Empty)));
    }

    #[test]
    fn test_empty_upload_list_is_batch_empty() {
        assert!(matches!(pipeline().run(&[], JD), Err(BatchError::Empty)));
    }

    #[test]
    fn test_corrupt_document_reported_as_read_failure() {
        let docs = vec![
            Document::new("broken.docx", b"garbage".to_vec()),
            Document::new("ok.docx", docx_bytes(&["Python"])),
        ];
        let report = pipeline().run(&docs, JD).unwrap();
        assert_eq!(report.results().len(), 1);
        assert!(matches!(
            report.skipped()[0].reason,
            SkipReason::ReadFailed { .. }
        ));
    }

    #[test]
    fn test_order_follows_upload_not_score() {
        let docs = vec![
            Document::new("low.docx", docx_bytes(&["Accountant"])),
            Document::new("high.docx", docx_bytes(&["Python cloud engineer role"])),
            Document::new("mid.docx", docx_bytes(&["Python"])),
        ];
        let report = pipeline().run(&docs, JD).unwrap();
        let names: Vec<_> = report.results().into_iter().map(|r| r.filename).collect();
        assert_eq!(names, vec!["low.docx", "high.docx", "mid.docx"]);
        let scores: Vec<_> = report.results().into_iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.0, 100.0, 25.0]);
    }

    #[test]
    fn test_runs_are_idempotent() {
        let docs = vec![
            Document::new("a.docx", docx_bytes(&["Rust and Python on AWS cloud"])),
            Document::new("b.pdf", pdf_bytes(&["Cloud engineer"])),
        ];
        let p = pipeline();
        assert_eq!(p.run(&docs, JD).unwrap(), p.run(&docs, JD).unwrap());
    }

    #[test]
    fn test_cosine_pipeline() {
        let p = BatchPipeline::new(build_scorer(
            ScoringStrategy::Cosine,
            Arc::new(LexiconTagger::new()),
        ));
        let docs = vec![Document::new("same.docx", docx_bytes(&[JD]))];
        let report = p.run(&docs, JD).unwrap();
        assert!((report.results()[0].score - 100.0).abs() < 1e-9);
        assert_eq!(p.scorer_name(), "cosine");
    }
}
