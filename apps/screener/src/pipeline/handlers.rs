//! Axum route handler for batch uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipeline::filename::secure_filename;
use crate::pipeline::{Document, ScoreResult, SkippedDocument};
use crate::reports::ReportKind;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub results: Vec<ScoreResult>,
    pub skipped: Vec<SkippedDocument>,
    pub report_id: Uuid,
    pub csv_download: String,
    pub excel_download: String,
    pub pdf_download: String,
}

/// POST /upload
///
/// Multipart fields: `files` (repeatable) and `job_desc`. Scores every file,
/// writes the three exports for this batch and returns links pinned to it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut documents = Vec::new();
    let mut saw_files = false;
    let mut job_desc: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("files") => {
                saw_files = true;
                let filename = secure_filename(field.file_name().unwrap_or_default());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                documents.push(Document::new(filename, bytes));
            }
            Some("job_desc") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read job_desc: {e}")))?;
                job_desc = Some(text);
            }
            _ => {}
        }
    }

    let job_desc = match job_desc {
        Some(text) if saw_files => text,
        _ => {
            return Err(AppError::Validation(
                "Missing files or job description".to_string(),
            ))
        }
    };

    info!(
        "Upload received: {} file(s), scorer: {}",
        documents.len(),
        state.pipeline.scorer_name()
    );

    let pipeline = state.pipeline.clone();
    let reports = state.reports.clone();
    let (batch, report_id) = tokio::task::spawn_blocking(move || -> Result<_, AppError> {
        let batch = pipeline.run(&documents, &job_desc)?;
        let report_id = reports.write(&batch.results())?;
        Ok((batch, report_id))
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    state.reports.set_latest(report_id).await;

    Ok(Json(UploadResponse {
        results: batch.results(),
        skipped: batch.skipped(),
        report_id,
        csv_download: ReportKind::Csv.download_url(report_id),
        excel_download: ReportKind::Xlsx.download_url(report_id),
        pdf_download: ReportKind::Pdf.download_url(report_id),
    }))
}
