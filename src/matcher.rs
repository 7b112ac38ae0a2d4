use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::lexicon::{Term, TermKind};

/// A concrete occurrence of a lexicon term in analyzed text. Offsets are
/// half-open byte positions into the input; `surface_text` preserves the
/// casing as found, `term_text` is the lowercase lexicon form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub kind: TermKind,
    pub term_text: String,
    pub surface_text: String,
    pub start: usize,
    pub end: usize,
    pub weight: u32,
    pub category: String,
    pub source: String,
}

impl Match {
    fn new(term: &Term, found: regex::Match<'_>) -> Self {
        Self {
            kind: term.kind,
            term_text: term.text.clone(),
            surface_text: found.as_str().to_string(),
            start: found.start(),
            end: found.end(),
            weight: term.weight,
            category: term.category.clone(),
            source: term.source.clone(),
        }
    }
}

fn term_pattern(text: &str) -> Option<Regex> {
    // Terms are literal: hyphens and apostrophes inside them are characters,
    // not boundaries. \b on each side keeps "art" from matching "article".
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(text)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Find every occurrence of every lexicon term in `text`.
///
/// Phrases are scanned first; a word occurrence whose span falls entirely
/// inside a phrase match is suppressed. Word/word and phrase/phrase overlaps
/// are all kept, matching the historical behavior this tool replaces.
/// Malformed terms contribute nothing. Output order is phrases before words,
/// each in lexicon order and left to right.
pub fn find_matches(text: &str, terms: &[Term]) -> Vec<Match> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<Match> = Vec::new();

    for term in terms
        .iter()
        .filter(|t| t.kind == TermKind::Phrase && t.is_well_formed())
    {
        let Some(pattern) = term_pattern(&term.text) else {
            continue;
        };
        for m in pattern.find_iter(text) {
            found.push(Match::new(term, m));
        }
    }

    for term in terms
        .iter()
        .filter(|t| t.kind == TermKind::Word && t.is_well_formed())
    {
        let Some(pattern) = term_pattern(&term.text) else {
            continue;
        };
        for m in pattern.find_iter(text) {
            let inside_phrase = found
                .iter()
                .any(|p| p.kind == TermKind::Phrase && p.start <= m.start() && m.end() <= p.end);
            if !inside_phrase {
                found.push(Match::new(term, m));
            }
        }
    }

    debug!(
        matches = found.len(),
        terms = terms.len(),
        "marker scan complete"
    );
    found
}
