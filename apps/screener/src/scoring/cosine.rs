use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use crate::scoring::{JobProfile, Scorer};

/// TF-IDF cosine similarity between a resume and a job description, ×100.
///
/// The vector space is fitted on exactly the two documents being compared, so
/// idf values are pair-relative: scores from different resume/JD pairs are not
/// on a shared scale. No rounding is applied.
pub struct CosineScorer;

impl Scorer for CosineScorer {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn prepare(&self, job_desc: &str) -> JobProfile {
        JobProfile {
            text: job_desc.to_string(),
            terms: None,
        }
    }

    fn score(&self, resume_text: &str, job: &JobProfile) -> f64 {
        let vectors = tfidf_vectors(&[resume_text, &job.text]);
        cosine_similarity(&vectors[0], &vectors[1]) * 100.0
    }
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("word pattern is valid"))
}

/// Lowercased words of two or more word characters.
fn analyze(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_regex()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Fits TF-IDF on `docs` and returns one L2-normalized vector per document.
///
/// idf(t) = ln((1 + n) / (1 + df(t))) + 1, weight = count × idf.
fn tfidf_vectors(docs: &[&str]) -> Vec<BTreeMap<String, f64>> {
    let counts: Vec<HashMap<String, usize>> = docs
        .iter()
        .map(|doc| {
            let mut tf = HashMap::new();
            for token in analyze(doc) {
                *tf.entry(token).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    let mut df: HashMap<&str, usize> = HashMap::new();
    for tf in &counts {
        for term in tf.keys() {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = docs.len() as f64;
    counts
        .iter()
        .map(|tf| {
            let mut vector: BTreeMap<String, f64> = tf
                .iter()
                .map(|(term, &count)| {
                    let idf = ((1.0 + n) / (1.0 + df[term.as_str()] as f64)).ln() + 1.0;
                    (term.clone(), count as f64 * idf)
                })
                .collect();
            let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                vector.values_mut().for_each(|w| *w /= norm);
            }
            vector
        })
        .collect()
}

/// Cosine of two sparse vectors; 0 when either is the zero vector.
fn cosine_similarity(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(resume: &str, job: &str) -> f64 {
        let scorer = CosineScorer;
        scorer.score(resume, &scorer.prepare(job))
    }

    #[test]
    fn test_identical_texts_score_hundred() {
        let s = score("Rust engineer with Kafka", "Rust engineer with Kafka");
        assert!((s - 100.0).abs() < 1e-9, "score {s}");
    }

    #[test]
    fn test_disjoint_vocabulary_scores_zero() {
        assert_eq!(score("java spring hibernate", "rust tokio axum"), 0.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(score("", "rust engineer"), 0.0);
        assert_eq!(score("rust engineer", ""), 0.0);
        assert_eq!(score("", ""), 0.0);
    }

    #[test]
    fn test_single_char_tokens_ignored() {
        // "a" and "c" are below the two-character token minimum.
        assert_eq!(score("a c", "a c"), 0.0);
    }

    #[test]
    fn test_known_value() {
        // docs: ["rust go", "rust"]; idf(rust) = 1, idf(go) = ln(3/2) + 1
        // v0 = (1, 1.405465) normalized, v1 = (1, 0); cos = 1 / sqrt(1 + 1.405465^2)
        let idf_go = (3.0_f64 / 2.0).ln() + 1.0;
        let expected = 100.0 / (1.0 + idf_go * idf_go).sqrt();
        let s = score("rust go", "rust");
        assert!((s - expected).abs() < 1e-9, "score {s} expected {expected}");
    }

    #[test]
    fn test_partial_overlap_is_bounded() {
        let s = score(
            "Python developer with cloud experience",
            "Python cloud engineer role",
        );
        assert!(s > 0.0 && s < 100.0, "score {s}");
    }

    #[test]
    fn test_case_insensitive() {
        let s = score("RUST", "rust");
        assert!((s - 100.0).abs() < 1e-9);
    }
}
