use std::sync::Arc;

use crate::scoring::{round2, JobProfile, Scorer};
use crate::terms::{extract_terms, TermSet, Tagger};

/// Share of job-description terms that also appear in the resume.
///
/// score = |R ∩ J| / |J| × 100, rounded to two places; 0 when J is empty.
/// Term frequency and order are ignored, so a resume that mentions every JD
/// term scores 100 whatever else it contains.
pub struct OverlapScorer {
    tagger: Arc<dyn Tagger>,
}

impl OverlapScorer {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self { tagger }
    }
}

impl Scorer for OverlapScorer {
    fn name(&self) -> &'static str {
        "overlap"
    }

    fn prepare(&self, job_desc: &str) -> JobProfile {
        JobProfile {
            text: job_desc.to_string(),
            terms: Some(extract_terms(self.tagger.as_ref(), job_desc)),
        }
    }

    fn score(&self, resume_text: &str, job: &JobProfile) -> f64 {
        let resume_terms = extract_terms(self.tagger.as_ref(), resume_text);
        match &job.terms {
            Some(job_terms) => overlap_score(&resume_terms, job_terms),
            // Profile prepared by a different scorer; derive the terms here.
            None => overlap_score(&resume_terms, &extract_terms(self.tagger.as_ref(), &job.text)),
        }
    }
}

pub fn overlap_score(resume: &TermSet, job: &TermSet) -> f64 {
    if job.is_empty() {
        return 0.0;
    }
    round2(resume.overlap(job) as f64 / job.len() as f64 * 100.0)
}
