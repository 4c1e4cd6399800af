//! Report exports: CSV, XLSX and PDF renderings of one batch's scores.
//!
//! Every batch gets its own directory `<root>/<report_id>/`, so concurrent
//! uploads never overwrite each other's files. `latest` tracks the most
//! recent report for downloads that do not name one. Only the newest
//! `retention` published reports stay on disk.

use std::collections::VecDeque;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::pipeline::ScoreResult;

pub mod csv;
pub mod handlers;
pub mod pdf;
pub mod xlsx;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF error: {0}")]
    Pdf(String),
}

/// The three export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Csv,
    Xlsx,
    Pdf,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Csv, ReportKind::Xlsx, ReportKind::Pdf];

    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Csv => "resume_results.csv",
            ReportKind::Xlsx => "resume_results.xlsx",
            ReportKind::Pdf => "resume_results.pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ReportKind::Csv => "text/csv; charset=utf-8",
            ReportKind::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ReportKind::Pdf => "application/pdf",
        }
    }

    /// Route serving this export.
    pub fn route(self) -> &'static str {
        match self {
            ReportKind::Csv => "/download_csv",
            ReportKind::Xlsx => "/download_excel",
            ReportKind::Pdf => "/download_pdf",
        }
    }

    /// Download URL pinned to one report.
    pub fn download_url(self, report_id: Uuid) -> String {
        format!("{}?report={report_id}", self.route())
    }

    fn render(self, results: &[ScoreResult], generated_at: DateTime<Utc>) -> Result<Vec<u8>, ReportError> {
        match self {
            ReportKind::Csv => csv::render_csv(results),
            ReportKind::Xlsx => xlsx::render_xlsx(results),
            ReportKind::Pdf => pdf::render_pdf(results, generated_at),
        }
    }
}

/// Published report ids, oldest first. The back entry is the latest.
#[derive(Default)]
struct Published {
    history: VecDeque<Uuid>,
}

/// On-disk home of generated reports.
#[derive(Clone)]
pub struct ReportStore {
    root: PathBuf,
    retention: usize,
    published: Arc<RwLock<Published>>,
}

impl ReportStore {
    pub fn new(root: impl Into<PathBuf>, retention: usize) -> Self {
        Self {
            root: root.into(),
            retention: retention.max(1),
            published: Arc::new(RwLock::new(Published::default())),
        }
    }

    /// Writes all three exports for `results` into a fresh report directory.
    /// Blocking; call from `spawn_blocking`. Does not touch `latest`.
    pub fn write(&self, results: &[ScoreResult]) -> Result<Uuid, ReportError> {
        let report_id = Uuid::new_v4();
        self.write_as(report_id, results)?;
        Ok(report_id)
    }

    /// On failure the partially written directory is removed.
    fn write_as(&self, report_id: Uuid, results: &[ScoreResult]) -> Result<(), ReportError> {
        let dir = self.report_dir(report_id);
        std::fs::create_dir_all(&dir)?;

        if let Err(e) = write_exports(&dir, results) {
            if let Err(cleanup) = std::fs::remove_dir_all(&dir) {
                warn!("Could not remove incomplete report {}: {cleanup}", dir.display());
            }
            return Err(e);
        }

        info!(
            "Report {report_id} written ({} rows) to {}",
            results.len(),
            dir.display()
        );
        Ok(())
    }

    /// Publishes `report_id` as the latest report and deletes published
    /// reports that fall outside the retention window.
    pub async fn set_latest(&self, report_id: Uuid) {
        let expired = {
            let mut published = self.published.write().await;
            published.history.push_back(report_id);
            let excess = published.history.len().saturating_sub(self.retention);
            let expired: Vec<Uuid> = published.history.drain(..excess).collect();
            expired
        };

        for id in expired {
            let dir = self.report_dir(id);
            match tokio::fs::remove_dir_all(&dir).await {
                Ok(()) => info!("Pruned report {id}"),
                Err(e) => warn!("Could not prune report {}: {e}", dir.display()),
            }
        }
    }

    pub async fn latest(&self) -> Option<Uuid> {
        self.published.read().await.history.back().copied()
    }

    /// Path of `kind` for `report_id`, or for the latest report when `None`.
    /// Returns `None` when no such report has been generated.
    pub async fn locate(&self, kind: ReportKind, report_id: Option<Uuid>) -> Option<PathBuf> {
        let id = match report_id {
            Some(id) => id,
            None => self.latest().await?,
        };
        let path = self.report_dir(id).join(kind.file_name());
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Some(path),
            _ => None,
        }
    }

    fn report_dir(&self, report_id: Uuid) -> PathBuf {
        self.root.join(report_id.to_string())
    }
}

fn write_exports(dir: &Path, results: &[ScoreResult]) -> Result<(), ReportError> {
    let generated_at = Utc::now();
    for kind in ReportKind::ALL {
        let bytes = kind.render(results, generated_at)?;
        persist(dir, kind.file_name(), &bytes)?;
    }
    Ok(())
}

/// Writes through a temp file in the same directory so readers never see a partial export.
fn persist(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<(), ReportError> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(dir.join(file_name)).map_err(|e| e.error)?;
    Ok(())
}

/// Python-style float text: whole numbers keep one decimal ("50.0").
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}
