pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers::handle_upload;
use crate::reports::handlers::{handle_download_csv, handle_download_excel, handle_download_pdf};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/upload",
            post(handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/download_csv", get(handle_download_csv))
        .route("/download_excel", get(handle_download_excel))
        .route("/download_pdf", get(handle_download_pdf))
        .with_state(state)
}
