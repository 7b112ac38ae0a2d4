//! Default term bank: words and phrases flagged by public AI-detection
//! tools (ZeroGPT, GPTZero, and others), with weights on a 1-10 scale.

use crate::lexicon::{Term, TermKind};

const DEFAULT_WORDS: &[(&str, u32, &str, &str)] = &[
    ("delve", 10, "verb", "GPTZero"),
    ("whilst", 9, "conjunction", "ZeroGPT"),
    ("furthermore", 8, "conjunction", "ZeroGPT"),
    ("navigate", 8, "verb", "GPTZero"),
    ("indeed", 7, "adverb", "ZeroGPT"),
    ("utilize", 7, "verb", "ZeroGPT"),
    ("leverage", 7, "verb", "ZeroGPT"),
    ("robust", 7, "adjective", "ZeroGPT"),
    ("optimal", 7, "adjective", "ZeroGPT"),
    ("showcase", 6, "verb", "ZeroGPT"),
    ("essentially", 6, "adverb", "ZeroGPT"),
    ("ultimately", 6, "adverb", "ZeroGPT"),
    ("myriad", 6, "adjective", "ZeroGPT"),
    ("seamless", 6, "adjective", "ZeroGPT"),
    ("plethora", 6, "noun", "ZeroGPT"),
    ("harness", 6, "verb", "ZeroGPT"),
    ("elevate", 10, "verb", "GPTZero"),
    ("tapestry", 9, "noun", "GPTZero"),
    ("captivate", 8, "verb", "GPTZero"),
    ("testament", 8, "noun", "GPTZero"),
    ("nuanced", 7, "adjective", "GPTZero"),
    ("enhance", 7, "verb", "ZeroGPT"),
    ("facilitate", 7, "verb", "ZeroGPT"),
    ("comprehensive", 7, "adjective", "ZeroGPT"),
    ("innovative", 6, "adjective", "ZeroGPT"),
    ("streamline", 6, "verb", "ZeroGPT"),
    ("synergy", 6, "noun", "ZeroGPT"),
    ("paradigm", 6, "noun", "ZeroGPT"),
    ("empower", 6, "verb", "ZeroGPT"),
    ("revolutionize", 6, "verb", "ZeroGPT"),
    ("transformative", 6, "adjective", "ZeroGPT"),
    ("ecosystem", 5, "noun", "ZeroGPT"),
    ("unprecedented", 5, "adjective", "ZeroGPT"),
    ("cultivate", 5, "verb", "ZeroGPT"),
    ("catalyst", 5, "noun", "ZeroGPT"),
    ("disrupt", 5, "verb", "ZeroGPT"),
    ("holistic", 5, "adjective", "ZeroGPT"),
    ("cutting-edge", 5, "adjective", "ZeroGPT"),
    ("sustainable", 5, "adjective", "ZeroGPT"),
    ("strategic", 5, "adjective", "ZeroGPT"),
    ("foster", 5, "verb", "ZeroGPT"),
    ("streamlined", 5, "adjective", "ZeroGPT"),
    ("implementation", 5, "noun", "ZeroGPT"),
    ("integration", 5, "noun", "ZeroGPT"),
    ("methodology", 5, "noun", "ZeroGPT"),
    ("functionality", 5, "noun", "ZeroGPT"),
    ("optimization", 5, "noun", "ZeroGPT"),
    ("infrastructure", 5, "noun", "ZeroGPT"),
    ("initiative", 5, "noun", "ZeroGPT"),
];

const DEFAULT_PHRASES: &[(&str, u32, &str, &str)] = &[
    ("in this article", 10, "introduction", "ZeroGPT"),
    ("delve into", 9, "verb phrase", "GPTZero"),
    ("it's important to note", 9, "transition", "ZeroGPT"),
    ("on the other hand", 8, "transition", "ZeroGPT"),
    ("in the realm of", 8, "preposition", "ZeroGPT"),
    ("a wide range of", 8, "description", "ZeroGPT"),
    ("it is worth mentioning", 7, "transition", "ZeroGPT"),
    ("plays a crucial role", 7, "emphasis", "ZeroGPT"),
    ("in conclusion", 7, "conclusion", "ZeroGPT"),
    ("in summary", 7, "conclusion", "ZeroGPT"),
    ("to summarize", 6, "conclusion", "ZeroGPT"),
    ("as we have seen", 6, "conclusion", "ZeroGPT"),
    ("moving forward", 6, "transition", "ZeroGPT"),
    ("when it comes to", 6, "transition", "ZeroGPT"),
    ("as mentioned earlier", 6, "reference", "ZeroGPT"),
    ("in the context of", 6, "context", "ZeroGPT"),
    ("it goes without saying", 5, "emphasis", "ZeroGPT"),
    ("it is essential to", 5, "emphasis", "ZeroGPT"),
    ("needless to say", 5, "emphasis", "ZeroGPT"),
    ("it's worth noting that", 5, "transition", "ZeroGPT"),
    ("a plethora of", 9, "description", "GPTZero"),
    ("treasure trove of", 8, "description", "GPTZero"),
    ("in today's fast-paced world", 8, "context", "GPTZero"),
    ("in the digital age", 7, "context", "GPTZero"),
    ("embark on a journey", 7, "verb phrase", "GPTZero"),
    ("unlock the potential", 7, "verb phrase", "GPTZero"),
    ("harness the power", 6, "verb phrase", "GPTZero"),
    ("foster a culture of", 6, "verb phrase", "GPTZero"),
    ("curated collection", 6, "description", "GPTZero"),
    ("seamless integration", 6, "description", "GPTZero"),
    ("rich tapestry", 5, "description", "GPTZero"),
    ("paradigm shift", 5, "description", "GPTZero"),
    ("as an ai language model", 10, "disclaimer", "Various"),
    ("i don't have access to", 9, "limitation", "Various"),
    ("as of my last update", 9, "limitation", "Various"),
    ("i cannot provide", 8, "limitation", "Various"),
    ("i cannot browse the internet", 8, "limitation", "Various"),
];

pub fn default_terms() -> Vec<Term> {
    let words = DEFAULT_WORDS.iter().map(|&(text, weight, category, source)| {
        Term::new(text, TermKind::Word, weight, category, source)
    });
    let phrases = DEFAULT_PHRASES
        .iter()
        .map(|&(text, weight, category, source)| {
            Term::new(text, TermKind::Phrase, weight, category, source)
        });
    words.chain(phrases).collect()
}
