use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bank;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("lexicon store I/O: {0}")]
    Io(#[from] io::Error),
    #[error("lexicon csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Whether a term is a single word or a multi-word phrase.
/// Identity of a term is `(text, kind)`, so the same text may exist as both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Word,
    Phrase,
}

/// A weighted detection pattern. `text` is lowercase-normalized on
/// construction; matching against input text is case-insensitive anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub text: String,
    pub kind: TermKind,
    /// 1-10, how strongly the term indicates AI-generated text.
    pub weight: u32,
    pub category: String,
    pub source: String,
}

impl Term {
    pub fn new(text: &str, kind: TermKind, weight: u32, category: &str, source: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            kind,
            weight,
            category: category.to_string(),
            source: source.to_string(),
        }
    }

    pub fn word(text: &str, weight: u32, category: &str, source: &str) -> Self {
        Self::new(text, TermKind::Word, weight, category, source)
    }

    pub fn phrase(text: &str, weight: u32, category: &str, source: &str) -> Self {
        Self::new(text, TermKind::Phrase, weight, category, source)
    }

    /// Entries the matcher will actually scan for. The lexicon is externally
    /// controlled data, so anything else is skipped rather than rejected.
    pub fn is_well_formed(&self) -> bool {
        !self.text.is_empty() && self.weight >= 1
    }
}

/// Filter for `LexiconStore::list_terms`. An empty filter means a full
/// snapshot; a filtered listing must equal the full snapshot restricted to
/// the matching subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFilter {
    pub kind: Option<TermKind>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub min_weight: Option<u32>,
}

impl TermFilter {
    pub fn min_weight(weight: u32) -> Self {
        Self {
            min_weight: Some(weight),
            ..Self::default()
        }
    }

    pub fn kind(kind: TermKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    fn accepts(&self, term: &Term) -> bool {
        self.kind.is_none_or(|k| term.kind == k)
            && self.category.as_deref().is_none_or(|c| term.category == c)
            && self.source.as_deref().is_none_or(|s| term.source == s)
            && self.min_weight.is_none_or(|w| term.weight >= w)
    }
}

/// The lexicon collaborator. The analysis core only ever reads a snapshot
/// through `list_terms`; mutation belongs to whoever owns the store.
pub trait LexiconStore {
    fn list_terms(&self, filter: &TermFilter) -> Result<Vec<Term>, LexiconError>;
    fn upsert_term(&mut self, term: Term) -> Result<(), LexiconError>;
    fn delete_term(&mut self, text: &str, kind: TermKind) -> Result<bool, LexiconError>;
}

/// In-memory store, deduplicated by `(kind, text)`. Listings come back
/// ordered by weight descending, then text ascending.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    terms: BTreeMap<(TermKind, String), Term>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    text: String,
    weight: u32,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the default word and phrase bank.
    pub fn with_default_bank() -> Self {
        let mut store = Self::new();
        for term in bank::default_terms() {
            store.insert(term);
        }
        store
    }

    pub fn from_terms(terms: Vec<Term>) -> Self {
        let mut store = Self::new();
        for term in terms {
            store.insert(term);
        }
        store
    }

    fn insert(&mut self, term: Term) {
        self.terms.insert((term.kind, term.text.clone()), term);
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Import terms of one kind from CSV with columns
    /// `text,weight[,category,source]`. Malformed rows are skipped; returns
    /// the number of terms imported.
    pub fn import_csv<R: io::Read>(
        &mut self,
        reader: R,
        kind: TermKind,
    ) -> Result<usize, LexiconError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut imported = 0;
        for record in csv_reader.deserialize::<CsvRecord>() {
            let record = record?;
            let term = Term::new(
                &record.text,
                kind,
                record.weight,
                record.category.as_deref().unwrap_or("general"),
                record.source.as_deref().unwrap_or("csv_import"),
            );
            if term.is_well_formed() {
                self.insert(term);
                imported += 1;
            }
        }
        Ok(imported)
    }

    /// Export all terms of one kind as CSV; returns the number of rows
    /// written.
    pub fn export_csv<W: io::Write>(
        &self,
        writer: W,
        kind: TermKind,
    ) -> Result<usize, LexiconError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let terms = self.list_terms(&TermFilter::kind(kind))?;
        let exported = terms.len();
        for term in terms {
            csv_writer.serialize(CsvRecord {
                text: term.text,
                weight: term.weight,
                category: Some(term.category),
                source: Some(term.source),
            })?;
        }
        csv_writer.flush()?;
        Ok(exported)
    }
}

impl LexiconStore for MemoryLexicon {
    fn list_terms(&self, filter: &TermFilter) -> Result<Vec<Term>, LexiconError> {
        let mut terms: Vec<Term> = self
            .terms
            .values()
            .filter(|t| filter.accepts(t))
            .cloned()
            .collect();
        terms.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.text.cmp(&b.text)));
        Ok(terms)
    }

    fn upsert_term(&mut self, term: Term) -> Result<(), LexiconError> {
        self.insert(term);
        Ok(())
    }

    fn delete_term(&mut self, text: &str, kind: TermKind) -> Result<bool, LexiconError> {
        let key = (kind, text.trim().to_lowercase());
        Ok(self.terms.remove(&key).is_some())
    }
}
