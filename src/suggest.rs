use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::lexicon::TermKind;
use crate::stats::AnalysisReport;

static WORD_REPLACEMENTS: Lazy<BTreeMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        BTreeMap::from([
            ("delve", &["explore", "examine", "investigate", "look into"][..]),
            ("whilst", &["while", "as", "during", "when"][..]),
            ("furthermore", &["also", "besides", "plus", "in addition"][..]),
            ("utilize", &["use", "apply", "employ"][..]),
            ("leverage", &["use", "apply", "employ", "harness"][..]),
            ("robust", &["strong", "solid", "durable", "powerful"][..]),
            ("optimal", &["best", "ideal", "perfect", "prime"][..]),
            ("essentially", &["basically", "mainly", "primarily", "at heart"][..]),
            ("ultimately", &["finally", "in the end", "eventually", "in conclusion"][..]),
            ("myriad", &["many", "numerous", "countless", "various"][..]),
            ("seamless", &["smooth", "flawless", "perfect", "uninterrupted"][..]),
            ("plethora", &["abundance", "wealth", "excess", "plenty"][..]),
            ("harness", &["use", "utilize", "channel", "direct"][..]),
            ("elevate", &["raise", "lift", "boost", "improve"][..]),
            ("tapestry", &["mixture", "blend", "fabric", "collection"][..]),
            ("captivate", &["engage", "entrance", "fascinate", "charm"][..]),
            ("testament", &["proof", "evidence", "example", "demonstration"][..]),
        ])
    });

static PHRASE_REPLACEMENTS: Lazy<BTreeMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        BTreeMap::from([
            ("in this article", &["here", "in these pages", "below", "in what follows"][..]),
            ("delve into", &["explore", "examine", "look at", "investigate"][..]),
            ("it's important to note", &["note that", "remember", "keep in mind", "be aware"][..]),
            ("on the other hand", &["however", "conversely", "in contrast", "alternatively"][..]),
            ("in the realm of", &["in", "within", "concerning", "regarding"][..]),
            ("a wide range of", &["many", "various", "diverse", "different"][..]),
            ("it is worth mentioning", &["notably", "interestingly", "remarkably"][..]),
            ("plays a crucial role", &["is important for", "is vital to", "is key to"][..]),
            ("in conclusion", &["to wrap up", "finally", "to sum up", "in closing"][..]),
            ("in summary", &["in short", "to recap", "in brief", "to summarize briefly"][..]),
            ("when it comes to", &["regarding", "about", "concerning", "on the topic of"][..]),
            ("as mentioned earlier", &["as I said", "as noted", "as stated above"][..]),
        ])
    });

/// Rewrite candidates for a detected term, if the static table knows it.
pub fn replacements_for(term_text: &str, kind: TermKind) -> Option<&'static [&'static str]> {
    let table = match kind {
        TermKind::Word => &*WORD_REPLACEMENTS,
        TermKind::Phrase => &*PHRASE_REPLACEMENTS,
    };
    table.get(term_text).copied()
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestions {
    pub general: Vec<String>,
    pub word_replacements: BTreeMap<String, Vec<String>>,
    pub phrase_replacements: BTreeMap<String, Vec<String>>,
    pub structure: Vec<String>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.general.is_empty()
            && self.word_replacements.is_empty()
            && self.phrase_replacements.is_empty()
            && self.structure.is_empty()
    }
}

/// Map an analysis report to human-readable rewrite advice. Pure lookup
/// over the static tables; terms the tables don't know get no entry.
pub fn suggest(report: &AnalysisReport) -> Suggestions {
    let mut general = Vec::new();
    if report.weighted_score > 8.0 {
        general.push("Text has a very high AI signature. Consider significant rewrites.".to_string());
    } else if report.weighted_score > 5.0 {
        general.push("Text has a moderate AI signature. Some edits recommended.".to_string());
    } else {
        general.push("Text has a low AI signature. Only minor adjustments needed.".to_string());
    }

    let word_replacements = report
        .word_counts
        .keys()
        .filter_map(|word| {
            replacements_for(word, TermKind::Word)
                .map(|r| (word.clone(), r.iter().map(|s| s.to_string()).collect()))
        })
        .collect();
    let phrase_replacements = report
        .phrase_counts
        .keys()
        .filter_map(|phrase| {
            replacements_for(phrase, TermKind::Phrase)
                .map(|r| (phrase.clone(), r.iter().map(|s| s.to_string()).collect()))
        })
        .collect();

    let mut structure = Vec::new();
    if report.avg_sentence_length > 25.0 {
        structure.push(
            "Sentences are quite long. Consider breaking them up for better readability."
                .to_string(),
        );
    }
    if report.word_density_pct > 20.0 {
        structure.push(
            "High AI word density. Revise the most commonly flagged words.".to_string(),
        );
    }

    Suggestions {
        general,
        word_replacements,
        phrase_replacements,
        structure,
    }
}
