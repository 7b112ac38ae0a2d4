use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::lexicon::TermKind;
use crate::matcher::Match;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

const SCORE_CEILING: f64 = 10.0;

/// Quantitative signals derived from one analysis pass. Built fresh per
/// call, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub total_words: usize,
    pub total_sentences: usize,
    pub unique_words: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    /// All markers found, words and phrases together.
    pub marker_count: usize,
    pub word_marker_count: usize,
    pub phrase_marker_count: usize,
    /// Word markers per 100 tokens. Phrase markers use sentences as the
    /// denominator instead; the two are deliberately separate signals.
    pub word_density_pct: f64,
    pub phrase_density_pct: f64,
    /// Matched weight normalized by text size, scaled to [0, 10].
    pub weighted_score: f64,
    pub word_counts: BTreeMap<String, usize>,
    pub phrase_counts: BTreeMap<String, usize>,
    pub category_counts: BTreeMap<String, usize>,
    pub source_counts: BTreeMap<String, usize>,
}

/// Aggregate a match set into an `AnalysisReport`. Empty text or an empty
/// match set yields a well-formed zero-valued report; no ratio here can
/// divide by zero.
pub fn score(text: &str, matches: &[Match]) -> AnalysisReport {
    let tokens: Vec<&str> = TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect();
    let total_words = tokens.len();
    let unique_words = tokens
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<HashSet<_>>()
        .len();
    let total_sentences = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();

    let avg_word_length = if total_words > 0 {
        tokens.iter().map(|t| t.chars().count()).sum::<usize>() as f64 / total_words as f64
    } else {
        0.0
    };
    let avg_sentence_length = if total_sentences > 0 {
        total_words as f64 / total_sentences as f64
    } else {
        0.0
    };

    let mut word_counts = BTreeMap::new();
    let mut phrase_counts = BTreeMap::new();
    let mut category_counts = BTreeMap::new();
    let mut source_counts = BTreeMap::new();
    let mut word_marker_count = 0;
    let mut phrase_marker_count = 0;
    let mut total_weight = 0u64;

    for m in matches {
        match m.kind {
            TermKind::Word => {
                word_marker_count += 1;
                *word_counts.entry(m.term_text.clone()).or_insert(0) += 1;
            }
            TermKind::Phrase => {
                phrase_marker_count += 1;
                *phrase_counts.entry(m.term_text.clone()).or_insert(0) += 1;
            }
        }
        *category_counts.entry(m.category.clone()).or_insert(0) += 1;
        *source_counts.entry(m.source.clone()).or_insert(0) += 1;
        total_weight += u64::from(m.weight);
    }

    let word_density_pct = if total_words > 0 {
        100.0 * word_marker_count as f64 / total_words as f64
    } else {
        0.0
    };
    let phrase_density_pct = if total_sentences > 0 {
        100.0 * phrase_marker_count as f64 / total_sentences as f64
    } else {
        0.0
    };
    let size_basis = total_words + total_sentences;
    let weighted_score = if size_basis > 0 {
        (SCORE_CEILING * total_weight as f64 / size_basis as f64).min(SCORE_CEILING)
    } else {
        0.0
    };

    AnalysisReport {
        total_words,
        total_sentences,
        unique_words,
        avg_word_length,
        avg_sentence_length,
        marker_count: matches.len(),
        word_marker_count,
        phrase_marker_count,
        word_density_pct,
        phrase_density_pct,
        weighted_score,
        word_counts,
        phrase_counts,
        category_counts,
        source_counts,
    }
}
