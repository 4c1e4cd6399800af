//! Part-of-speech tagging used to pick out content-bearing words.
//!
//! `LexiconTagger` is a deterministic rule tagger: closed-class word lists first,
//! then capitalization and suffix rules, with common noun as the fallback.
//! It is built once at startup and shared behind `Arc<dyn Tagger>`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use crate::terms::lexicon;

/// Coarse universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Auxiliary,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
}

impl PosTag {
    /// Nouns, proper nouns and adjectives carry the skills vocabulary of a resume.
    pub fn is_content(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Adjective)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

/// Assigns a part-of-speech tag to every token in a text.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

// ────────────────────────────────────────────────────────────────────────────
// Tokenization
// ────────────────────────────────────────────────────────────────────────────

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Words keep inner `.`, `-`, `'` and trailing `+`/`#` so c++, c#, node.js survive.
    RE.get_or_init(|| {
        Regex::new(r"[\p{L}\p{N}](?:[\p{L}\p{N}'\-.]*[\p{L}\p{N}])?[+#]*|[^\s\p{L}\p{N}]")
            .expect("token pattern is valid")
    })
}

/// Splits text into word and punctuation tokens. Slashes separate words (`CI/CD`).
pub fn tokenize(text: &str) -> Vec<&str> {
    token_regex().find_iter(text).map(|m| m.as_str()).collect()
}

fn is_sentence_end(token: &str) -> bool {
    matches!(token, "." | "!" | "?" | ":" | ";" | "•" | "-" | "*")
}

// ────────────────────────────────────────────────────────────────────────────
// LexiconTagger
// ────────────────────────────────────────────────────────────────────────────

pub struct LexiconTagger {
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    particles: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            determiners: lexicon::DETERMINERS.iter().copied().collect(),
            pronouns: lexicon::PRONOUNS.iter().copied().collect(),
            adpositions: lexicon::ADPOSITIONS.iter().copied().collect(),
            conjunctions: lexicon::CONJUNCTIONS.iter().copied().collect(),
            auxiliaries: lexicon::AUXILIARIES.iter().copied().collect(),
            particles: lexicon::PARTICLES.iter().copied().collect(),
            adverbs: lexicon::ADVERBS.iter().copied().collect(),
            verbs: lexicon::VERBS.iter().copied().collect(),
            adjectives: lexicon::ADJECTIVES.iter().copied().collect(),
        }
    }

    fn closed_class(&self, lower: &str) -> Option<PosTag> {
        if self.determiners.contains(lower) {
            Some(PosTag::Determiner)
        } else if self.pronouns.contains(lower) {
            Some(PosTag::Pronoun)
        } else if self.adpositions.contains(lower) {
            Some(PosTag::Adposition)
        } else if self.conjunctions.contains(lower) {
            Some(PosTag::Conjunction)
        } else if self.auxiliaries.contains(lower) {
            Some(PosTag::Auxiliary)
        } else if self.particles.contains(lower) {
            Some(PosTag::Particle)
        } else {
            None
        }
    }

    fn tag_word(&self, token: &str, lower: &str, sentence_start: bool, prev: Option<PosTag>) -> PosTag {
        if !token.chars().any(char::is_alphanumeric) {
            return PosTag::Punctuation;
        }
        if token.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | '%')) {
            return PosTag::Numeral;
        }
        if let Some(tag) = self.closed_class(lower) {
            return tag;
        }
        if self.adverbs.contains(lower) {
            return PosTag::Adverb;
        }
        if self.adjectives.contains(lower) {
            return PosTag::Adjective;
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        // Mixed-case or all-caps tokens (AWS, GraphQL, iOS) read as names anywhere.
        let has_inner_upper = token.chars().skip(1).any(char::is_uppercase);
        if has_inner_upper || (capitalized && !sentence_start) {
            return PosTag::ProperNoun;
        }

        if self.verbs.contains(lower) {
            // "design" after a determiner or adjective is a noun ("the design").
            return match prev {
                Some(PosTag::Determiner | PosTag::Adjective | PosTag::Adposition) => PosTag::Noun,
                _ => PosTag::Verb,
            };
        }

        suffix_tag(lower, prev).unwrap_or(if capitalized && sentence_start {
            // Sentence-initial capitals are ambiguous; the lexicon covers the
            // common non-nouns, so the rest are treated as names.
            PosTag::ProperNoun
        } else {
            PosTag::Noun
        })
    }
}

fn suffix_tag(lower: &str, prev: Option<PosTag>) -> Option<PosTag> {
    const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "al", "ic"];
    const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

    let len = lower.chars().count();
    if len <= 3 {
        return None;
    }
    if len > 4 && lower.ends_with("ly") {
        return Some(PosTag::Adverb);
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(PosTag::Adjective);
    }
    if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(PosTag::Verb);
    }
    if len > 4 && lower.ends_with("ed") {
        return Some(PosTag::Verb);
    }
    if len > 5 && lower.ends_with("ing") {
        // Gerunds after a determiner or adposition act as nouns ("in testing").
        return match prev {
            Some(PosTag::Auxiliary | PosTag::Pronoun) | None => Some(PosTag::Verb),
            _ => None,
        };
    }
    None
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tagged = Vec::new();

        // Line breaks in resumes usually start a new bullet or heading.
        for line in text.lines() {
            let mut sentence_start = true;
            let mut prev: Option<PosTag> = None;
            for token in tokenize(line) {
                let lower = token.to_lowercase();
                let tag = self.tag_word(token, &lower, sentence_start, prev);
                sentence_start = is_sentence_end(token);
                prev = Some(tag);
                tagged.push(TaggedToken {
                    text: token.to_string(),
                    tag,
                });
            }
        }

        tagged
    }
}
