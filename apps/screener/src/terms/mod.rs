//! Significant-term extraction: plain text in, set of lowercase content words out.

use std::collections::BTreeSet;

pub mod lexicon;
pub mod tagger;

pub use tagger::{LexiconTagger, Tagger};

/// Lowercase nouns, proper nouns and adjectives of a document.
/// Ordered so that logs and debug output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet(BTreeSet<String>);

impl TermSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    /// Number of terms present in both sets.
    pub fn overlap(&self, other: &TermSet) -> usize {
        self.0.intersection(&other.0).count()
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TermSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Tags `text` and keeps the lowercase form of every content-bearing token.
pub fn extract_terms(tagger: &dyn Tagger, text: &str) -> TermSet {
    tagger
        .tag(text)
        .into_iter()
        .filter(|t| t.tag.is_content())
        .map(|t| t.text.to_lowercase())
        .collect()
}
