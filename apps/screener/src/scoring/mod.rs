//! Match scoring: a pluggable scorer that rates a resume against a job description.
//!
//! Default: `OverlapScorer` (share of job-description terms found in the resume).
//! Alternate: `CosineScorer` (TF-IDF cosine similarity over the resume/JD pair).
//!
//! `BatchPipeline` holds an `Arc<dyn Scorer>`, chosen at startup via `SCORING_STRATEGY`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::terms::{TermSet, Tagger};

pub mod cosine;
pub mod overlap;

pub use cosine::CosineScorer;
pub use overlap::OverlapScorer;

// ────────────────────────────────────────────────────────────────────────────
// Job profile
// ────────────────────────────────────────────────────────────────────────────

/// A job description prepared once per batch and reused for every resume.
#[derive(Debug, Clone)]
pub struct JobProfile {
    pub text: String,
    /// Populated only by scorers that work on term sets.
    pub terms: Option<TermSet>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores resume text against a prepared job description. Scores lie in [0, 100].
pub trait Scorer: Send + Sync {
    /// Backend label, surfaced in logs.
    fn name(&self) -> &'static str;

    fn prepare(&self, job_desc: &str) -> JobProfile;

    fn score(&self, resume_text: &str, job: &JobProfile) -> f64;
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringStrategy {
    #[default]
    Overlap,
    Cosine,
}

#[derive(Debug, Error)]
#[error("unknown scoring strategy '{0}' (expected 'overlap' or 'cosine')")]
pub struct UnknownStrategy(String);

impl FromStr for ScoringStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overlap" => Ok(ScoringStrategy::Overlap),
            "cosine" => Ok(ScoringStrategy::Cosine),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringStrategy::Overlap => f.write_str("overlap"),
            ScoringStrategy::Cosine => f.write_str("cosine"),
        }
    }
}

/// Builds the scorer for `strategy`. Only the overlap scorer needs the tagger.
pub fn build_scorer(strategy: ScoringStrategy, tagger: Arc<dyn Tagger>) -> Arc<dyn Scorer> {
    match strategy {
        ScoringStrategy::Overlap => Arc::new(OverlapScorer::new(tagger)),
        ScoringStrategy::Cosine => Arc::new(CosineScorer),
    }
}

/// Rounds to two decimal places, ties to even on the exact binary value
/// (so 3.125 becomes 3.12, not 3.13).
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
