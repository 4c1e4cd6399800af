use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::scoring::ScoringStrategy;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
const DEFAULT_REPORT_RETENTION: usize = 20;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Root under which each batch gets its own report directory.
    pub upload_dir: PathBuf,
    pub scoring_strategy: ScoringStrategy,
    pub max_upload_bytes: usize,
    /// Published report directories kept on disk; older ones are pruned.
    pub report_retention: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            scoring_strategy: parse_env("SCORING_STRATEGY", ScoringStrategy::default())
                .context("SCORING_STRATEGY must be 'overlap' or 'cosine'")?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            report_retention: parse_env("REPORT_RETENTION", DEFAULT_REPORT_RETENTION)
                .context("REPORT_RETENTION must be a count")?
                .max(1),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}
