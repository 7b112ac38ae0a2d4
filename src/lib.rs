//! Detect lexical markers of AI-generated prose.
//!
//! The core is a pure pipeline over in-memory data: take a snapshot of a
//! weighted term lexicon, find every word/phrase occurrence in the input
//! (phrase matches suppress word matches they contain), aggregate counts
//! into a density/score report, and map detected terms to replacement
//! suggestions. Highlighting and report export are transforms over the same
//! match set; no I/O happens inside the library.

pub mod bank;
pub mod highlight;
pub mod lexicon;
pub mod matcher;
pub mod report;
pub mod stats;
pub mod suggest;

use serde::Serialize;
use tracing::debug;

pub use highlight::{render_highlighted, HighlightStyle};
pub use lexicon::{LexiconError, LexiconStore, MemoryLexicon, Term, TermFilter, TermKind};
pub use matcher::{find_matches, Match};
pub use report::{html_report, metrics_csv, term_counts_csv, ReportError};
pub use stats::{score, AnalysisReport};
pub use suggest::{replacements_for, suggest, Suggestions};

/// Everything one analysis pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub matches: Vec<Match>,
    pub report: AnalysisReport,
    pub suggestions: Suggestions,
}

/// Run the full pipeline against one lexicon snapshot. The snapshot is
/// fetched once; concurrent mutation of the store does not affect an
/// in-flight call.
pub fn analyze(
    text: &str,
    store: &dyn LexiconStore,
    filter: &TermFilter,
) -> Result<Analysis, LexiconError> {
    let terms = store.list_terms(filter)?;
    debug!(terms = terms.len(), chars = text.len(), "analyzing text");
    let matches = find_matches(text, &terms);
    let report = score(text, &matches);
    let suggestions = suggest(&report);
    Ok(Analysis {
        matches,
        report,
        suggestions,
    })
}
