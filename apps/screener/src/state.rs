use crate::config::Config;
use crate::pipeline::BatchPipeline;
use crate::reports::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring pipeline; owns the scorer and, through it, the tagger.
    pub pipeline: BatchPipeline,
    /// Per-request report directories under `config.upload_dir`.
    pub reports: ReportStore,
}

impl AppState {
    pub fn new(config: Config, pipeline: BatchPipeline) -> Self {
        let reports = ReportStore::new(config.upload_dir.clone(), config.report_retention);
        Self {
            config,
            pipeline,
            reports,
        }
    }
}
