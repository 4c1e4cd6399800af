//! Axum route handlers for report downloads.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::reports::ReportKind;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    /// Report to fetch; the most recent one when absent.
    pub report: Option<Uuid>,
}

/// GET /download_csv
pub async fn handle_download_csv(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, AppError> {
    download(&state, ReportKind::Csv, query.report).await
}

/// GET /download_excel
pub async fn handle_download_excel(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, AppError> {
    download(&state, ReportKind::Xlsx, query.report).await
}

/// GET /download_pdf
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, AppError> {
    download(&state, ReportKind::Pdf, query.report).await
}

async fn download(
    state: &AppState,
    kind: ReportKind,
    report_id: Option<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let path = state
        .reports
        .locate(kind, report_id)
        .await
        .ok_or_else(|| match report_id {
            Some(id) => AppError::NotFound(format!("Report {id} not found")),
            None => AppError::NotFound("No report has been generated yet".to_string()),
        })?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context(format!("reading {}", path.display()))))?;

    Ok((
        [
            (header::CONTENT_TYPE, kind.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", kind.file_name()),
            ),
        ],
        bytes,
    ))
}
