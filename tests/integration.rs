use markscan::{
    find_matches, html_report, metrics_csv, render_highlighted, score, suggest, term_counts_csv,
    HighlightStyle, LexiconStore, Match, MemoryLexicon, Term, TermFilter, TermKind,
};

fn manual_match(kind: TermKind, term: &str, surface: &str, start: usize, weight: u32) -> Match {
    Match {
        kind,
        term_text: term.to_string(),
        surface_text: surface.to_string(),
        start,
        end: start + surface.len(),
        weight,
        category: "general".to_string(),
        source: "test".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[test]
fn phrase_precedence_suppresses_contained_word() {
    let lexicon = vec![
        Term::word("power", 1, "general", "test"),
        Term::phrase("harness the power", 6, "verb phrase", "test"),
    ];
    let matches = find_matches("They harness the power daily.", &lexicon);
    assert_eq!(matches.len(), 1, "expected only the phrase match");
    assert_eq!(matches[0].kind, TermKind::Phrase);
    assert_eq!(matches[0].term_text, "harness the power");
    assert_eq!(matches[0].surface_text, "harness the power");
}

#[test]
fn word_does_not_match_inside_larger_word() {
    let lexicon = vec![Term::word("art", 5, "noun", "test")];
    let matches = find_matches("in this article", &lexicon);
    assert!(matches.is_empty(), "'art' must not match inside 'article'");
}

#[test]
fn phrase_matches_at_offset_zero() {
    let lexicon = vec![Term::phrase("in this article", 10, "introduction", "test")];
    let matches = find_matches("in this article", &lexicon);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start, 0);
    assert_eq!(matches[0].end, 15);
}

#[test]
fn matching_is_case_insensitive_and_preserves_surface_casing() {
    let lexicon = vec![Term::word("Delve", 10, "verb", "test")];
    let matches = find_matches("DELVE into it", &lexicon);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].term_text, "delve");
    assert_eq!(matches[0].surface_text, "DELVE");
    assert_eq!((matches[0].start, matches[0].end), (0, 5));
}

#[test]
fn empty_text_and_empty_lexicon_yield_no_matches() {
    let lexicon = vec![Term::word("delve", 10, "verb", "test")];
    assert!(find_matches("", &lexicon).is_empty());
    assert!(find_matches("delve into the topic", &[]).is_empty());
}

#[test]
fn malformed_terms_are_skipped() {
    let lexicon = vec![
        Term::word("", 5, "general", "test"),
        Term::word("   ", 5, "general", "test"),
        Term::word("delve", 0, "verb", "test"),
        Term::word("utilize", 7, "verb", "test"),
    ];
    let matches = find_matches("delve and utilize", &lexicon);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].term_text, "utilize");
}

#[test]
fn duplicate_terms_each_contribute_matches() {
    // A lexicon snapshot is externally controlled and may carry duplicates;
    // each entry is scanned independently.
    let lexicon = vec![
        Term::word("delve", 10, "verb", "test"),
        Term::word("delve", 10, "verb", "test"),
    ];
    let matches = find_matches("delve deeper", &lexicon);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].start, matches[1].start);
}

#[test]
fn repeated_phrase_occurrences_are_all_recorded() {
    let lexicon = vec![Term::phrase("in summary", 7, "conclusion", "test")];
    let matches = find_matches("In summary, one point. In summary, another.", &lexicon);
    assert_eq!(matches.len(), 2);
    assert!(matches[0].start < matches[1].start);
}

#[test]
fn hyphenated_term_matches_as_literal() {
    let lexicon = vec![Term::word("cutting-edge", 5, "adjective", "test")];
    let matches = find_matches("a cutting-edge detector", &lexicon);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].surface_text, "cutting-edge");
}

#[test]
fn apostrophe_phrase_matches_as_literal() {
    let lexicon = vec![Term::phrase("it's important to note", 9, "transition", "test")];
    let matches = find_matches("It's important to note this.", &lexicon);
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].start, matches[0].end), (0, 22));
}

#[test]
fn no_word_match_is_contained_in_any_phrase_match() {
    let lexicon = vec![
        Term::word("delve", 10, "verb", "test"),
        Term::word("journey", 6, "noun", "test"),
        Term::phrase("delve into", 9, "verb phrase", "test"),
        Term::phrase("embark on a journey", 7, "verb phrase", "test"),
    ];
    let text = "We delve into it and embark on a journey, then delve again.";
    let matches = find_matches(text, &lexicon);
    for word in matches.iter().filter(|m| m.kind == TermKind::Word) {
        for phrase in matches.iter().filter(|m| m.kind == TermKind::Phrase) {
            assert!(
                !(phrase.start <= word.start && word.end <= phrase.end),
                "word '{}' [{}, {}) sits inside phrase '{}' [{}, {})",
                word.term_text,
                word.start,
                word.end,
                phrase.term_text,
                phrase.start,
                phrase.end
            );
        }
    }
    // The trailing bare "delve" is outside both phrases and must survive.
    assert!(matches
        .iter()
        .any(|m| m.kind == TermKind::Word && m.term_text == "delve"));
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

#[test]
fn rendering_with_no_matches_returns_input_unchanged() {
    for text in ["", "plain text", "punctuation! and? more.", "caf\u{e9} na\u{ef}ve"] {
        assert_eq!(render_highlighted(text, &[], HighlightStyle::Plain), text);
        assert_eq!(render_highlighted(text, &[], HighlightStyle::Markdown), text);
        assert_eq!(render_highlighted(text, &[], HighlightStyle::Html), text);
    }
}

#[test]
fn plain_and_markdown_wrapping() {
    let lexicon = vec![Term::word("delve", 10, "verb", "test")];
    let text = "We delve deeper.";
    let matches = find_matches(text, &lexicon);
    assert_eq!(
        render_highlighted(text, &matches, HighlightStyle::Plain),
        "We [AI:delve] deeper."
    );
    assert_eq!(
        render_highlighted(text, &matches, HighlightStyle::Markdown),
        "We **delve** deeper."
    );
}

#[test]
fn html_wrapping_carries_weight_and_category() {
    let lexicon = vec![Term::word("utilize", 7, "verb", "ZeroGPT")];
    let text = "Utilize this.";
    let matches = find_matches(text, &lexicon);
    let html = render_highlighted(text, &matches, HighlightStyle::Html);
    assert!(html.contains(r#"class="ai-marker ai-weight-7""#), "{html}");
    assert!(html.contains("utilize (verb, weight: 7)"), "{html}");
    assert!(html.contains(">Utilize</span>"), "{html}");
}

#[test]
fn adjacent_matches_render_in_original_order() {
    let text = "helloworld!";
    let matches = vec![
        manual_match(TermKind::Word, "hello", "hello", 0, 5),
        manual_match(TermKind::Word, "world", "world", 5, 5),
    ];
    assert_eq!(
        render_highlighted(text, &matches, HighlightStyle::Plain),
        "[AI:hello][AI:world]!"
    );
}

#[test]
fn descending_start_order_keeps_earlier_offsets_valid() {
    // Input order is irrelevant; the renderer sorts by start descending so
    // splices never shift pending offsets.
    let text = "delve then utilize then delve";
    let matches = vec![
        manual_match(TermKind::Word, "delve", "delve", 0, 10),
        manual_match(TermKind::Word, "delve", "delve", 24, 10),
        manual_match(TermKind::Word, "utilize", "utilize", 11, 7),
    ];
    assert_eq!(
        render_highlighted(text, &matches, HighlightStyle::Markdown),
        "**delve** then **utilize** then **delve**"
    );
}

#[test]
fn multibyte_text_renders_without_corruption() {
    let lexicon = vec![Term::word("delve", 10, "verb", "test")];
    let text = "caf\u{e9} \u{201c}delve\u{201d} na\u{ef}ve";
    let matches = find_matches(text, &lexicon);
    assert_eq!(matches.len(), 1);
    let rendered = render_highlighted(text, &matches, HighlightStyle::Plain);
    assert_eq!(rendered, "caf\u{e9} \u{201c}[AI:delve]\u{201d} na\u{ef}ve");
}

// ---------------------------------------------------------------------------
// Statistics and scoring
// ---------------------------------------------------------------------------

#[test]
fn scenario_article_delve_utilize() {
    let lexicon = vec![
        Term::word("delve", 10, "verb", "test"),
        Term::word("utilize", 7, "verb", "test"),
        Term::phrase("in this article", 10, "introduction", "test"),
    ];
    let text = "In this article, we delve into utilize.";
    let matches = find_matches(text, &lexicon);
    let report = score(text, &matches);

    assert_eq!(report.phrase_marker_count, 1);
    assert_eq!(report.word_marker_count, 2);
    assert_eq!(report.marker_count, 3);
    assert_eq!(report.total_words, 7);
    assert_eq!(report.total_sentences, 1);
    assert_eq!(report.word_counts.get("delve"), Some(&1));
    assert_eq!(report.word_counts.get("utilize"), Some(&1));
    assert_eq!(report.phrase_counts.get("in this article"), Some(&1));
    // 27 matched weight over 8 size units saturates the 10-point ceiling.
    assert_eq!(report.weighted_score, 10.0);
    assert!((report.word_density_pct - 200.0 / 7.0).abs() < 1e-9);
}

#[test]
fn zero_token_text_yields_zero_valued_report() {
    for text in ["", "?! ... !!!", "   \n\t"] {
        let report = score(text, &[]);
        assert_eq!(report.total_words, 0, "text {text:?}");
        assert_eq!(report.word_density_pct, 0.0);
        assert_eq!(report.phrase_density_pct, 0.0);
        assert_eq!(report.weighted_score, 0.0);
        assert_eq!(report.marker_count, 0);
    }
}

#[test]
fn no_matches_scores_zero() {
    let report = score("A perfectly ordinary sentence about nothing much.", &[]);
    assert_eq!(report.weighted_score, 0.0);
    assert_eq!(report.word_density_pct, 0.0);
    assert!(report.total_words > 0);
}

#[test]
fn weighted_score_is_monotonic_in_matched_weight() {
    let text = "delve utilize leverage enhance robust optimal seamless myriad";
    let one = vec![manual_match(TermKind::Word, "delve", "delve", 0, 2)];
    let two = vec![
        manual_match(TermKind::Word, "delve", "delve", 0, 2),
        manual_match(TermKind::Word, "utilize", "utilize", 6, 2),
    ];
    assert!(score(text, &two).weighted_score > score(text, &one).weighted_score);
}

#[test]
fn token_and_sentence_counting() {
    let text = "One two three. Four five! Six?";
    let report = score(text, &[]);
    assert_eq!(report.total_words, 6);
    assert_eq!(report.total_sentences, 3);
    assert_eq!(report.unique_words, 6);

    let folded = score("Delve delve DELVE.", &[]);
    assert_eq!(folded.total_words, 3);
    assert_eq!(folded.unique_words, 1);
}

#[test]
fn category_and_source_tallies_cover_every_match_once() {
    let lexicon = vec![
        Term::word("delve", 10, "verb", "GPTZero"),
        Term::word("tapestry", 9, "noun", "GPTZero"),
        Term::phrase("in summary", 7, "conclusion", "ZeroGPT"),
    ];
    let text = "In summary, we delve into a tapestry. We delve again.";
    let matches = find_matches(text, &lexicon);
    let report = score(text, &matches);

    assert_eq!(report.marker_count, 4);
    assert_eq!(report.category_counts.get("verb"), Some(&2));
    assert_eq!(report.category_counts.get("noun"), Some(&1));
    assert_eq!(report.category_counts.get("conclusion"), Some(&1));
    assert_eq!(report.source_counts.get("GPTZero"), Some(&3));
    assert_eq!(report.source_counts.get("ZeroGPT"), Some(&1));
    let category_total: usize = report.category_counts.values().sum();
    assert_eq!(category_total, report.marker_count);
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn suggestions_map_detected_terms_to_replacements() {
    let lexicon = vec![
        Term::word("delve", 10, "verb", "test"),
        Term::phrase("in this article", 10, "introduction", "test"),
    ];
    let text = "In this article, we delve into the details.";
    let matches = find_matches(text, &lexicon);
    let report = score(text, &matches);
    let suggestions = suggest(&report);

    let delve = suggestions
        .word_replacements
        .get("delve")
        .expect("delve should have replacements");
    assert!(delve.contains(&"explore".to_string()));
    let article = suggestions
        .phrase_replacements
        .get("in this article")
        .expect("phrase should have replacements");
    assert!(article.contains(&"here".to_string()));
    assert!(!suggestions.general.is_empty());
}

#[test]
fn unknown_terms_get_no_replacement_entry() {
    let lexicon = vec![Term::word("zeitgeist", 5, "noun", "test")];
    let text = "Pure zeitgeist, nothing else.";
    let matches = find_matches(text, &lexicon);
    let suggestions = suggest(&score(text, &matches));
    assert!(suggestions.word_replacements.is_empty());
}

// ---------------------------------------------------------------------------
// Lexicon store
// ---------------------------------------------------------------------------

#[test]
fn upsert_replaces_by_text_and_kind() {
    let mut store = MemoryLexicon::new();
    store
        .upsert_term(Term::word("delve", 5, "verb", "user"))
        .unwrap();
    store
        .upsert_term(Term::word("Delve", 10, "verb", "research"))
        .unwrap();
    let terms = store.list_terms(&TermFilter::default()).unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].weight, 10);
    assert_eq!(terms[0].source, "research");
}

#[test]
fn word_and_phrase_with_same_text_are_distinct() {
    let mut store = MemoryLexicon::new();
    store
        .upsert_term(Term::word("moving forward", 6, "transition", "user"))
        .unwrap();
    store
        .upsert_term(Term::phrase("moving forward", 6, "transition", "user"))
        .unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.delete_term("moving forward", TermKind::Word).unwrap());
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_returns_false_for_missing_term() {
    let mut store = MemoryLexicon::new();
    assert!(!store.delete_term("absent", TermKind::Word).unwrap());
}

#[test]
fn listing_orders_by_weight_then_text() {
    let mut store = MemoryLexicon::new();
    store.upsert_term(Term::word("beta", 5, "g", "u")).unwrap();
    store.upsert_term(Term::word("alpha", 5, "g", "u")).unwrap();
    store.upsert_term(Term::word("gamma", 9, "g", "u")).unwrap();
    let texts: Vec<String> = store
        .list_terms(&TermFilter::default())
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, ["gamma", "alpha", "beta"]);
}

#[test]
fn min_weight_filter_equals_restricted_snapshot() {
    let store = MemoryLexicon::with_default_bank();
    let full = store.list_terms(&TermFilter::default()).unwrap();
    let filtered = store.list_terms(&TermFilter::min_weight(8)).unwrap();
    let expected: Vec<_> = full.into_iter().filter(|t| t.weight >= 8).collect();
    assert_eq!(filtered, expected);
    assert!(!filtered.is_empty());
}

#[test]
fn default_bank_contains_words_and_phrases() {
    let store = MemoryLexicon::with_default_bank();
    let words = store.list_terms(&TermFilter::kind(TermKind::Word)).unwrap();
    let phrases = store
        .list_terms(&TermFilter::kind(TermKind::Phrase))
        .unwrap();
    assert!(words.iter().any(|t| t.text == "delve"));
    assert!(phrases.iter().any(|t| t.text == "in this article"));
    assert!(words.iter().all(|t| (1..=10).contains(&t.weight)));
    assert!(phrases.iter().all(|t| (1..=10).contains(&t.weight)));
}

#[test]
fn csv_import_applies_defaults_and_skips_malformed() {
    let csv = "text,weight\ndelve,10\n,5\nzeitgeist,0\nutilize,7\n";
    let mut store = MemoryLexicon::new();
    let imported = store.import_csv(csv.as_bytes(), TermKind::Word).unwrap();
    assert_eq!(imported, 2);
    let terms = store.list_terms(&TermFilter::default()).unwrap();
    assert_eq!(terms.len(), 2);
    assert!(terms
        .iter()
        .all(|t| t.category == "general" && t.source == "csv_import"));
}

#[test]
fn csv_export_round_trips() {
    let mut store = MemoryLexicon::new();
    store
        .upsert_term(Term::phrase("rich tapestry", 5, "description", "GPTZero"))
        .unwrap();
    store
        .upsert_term(Term::phrase("paradigm shift", 5, "description", "GPTZero"))
        .unwrap();
    let mut buffer = Vec::new();
    let exported = store.export_csv(&mut buffer, TermKind::Phrase).unwrap();
    assert_eq!(exported, 2);

    let mut copy = MemoryLexicon::new();
    let imported = copy.import_csv(buffer.as_slice(), TermKind::Phrase).unwrap();
    assert_eq!(imported, 2);
    assert_eq!(
        copy.list_terms(&TermFilter::default()).unwrap(),
        store.list_terms(&TermFilter::default()).unwrap()
    );
}

#[test]
fn csv_export_to_file_and_reimport() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.csv");

    let mut store = MemoryLexicon::new();
    store
        .upsert_term(Term::word("delve", 10, "verb", "GPTZero"))
        .unwrap();
    store
        .export_csv(std::fs::File::create(&path).unwrap(), TermKind::Word)
        .unwrap();

    let mut copy = MemoryLexicon::new();
    let imported = copy
        .import_csv(std::fs::File::open(&path).unwrap(), TermKind::Word)
        .unwrap();
    assert_eq!(imported, 1);
    assert_eq!(
        copy.list_terms(&TermFilter::default()).unwrap(),
        store.list_terms(&TermFilter::default()).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Reports and end-to-end
// ---------------------------------------------------------------------------

#[test]
fn metrics_csv_has_one_metric_per_row() {
    let lexicon = vec![Term::word("delve", 10, "verb", "test")];
    let text = "We delve into it.";
    let matches = find_matches(text, &lexicon);
    let csv = metrics_csv(&score(text, &matches)).unwrap();
    assert!(csv.starts_with("metric,value\n"));
    assert!(csv.contains("total_words,4\n"));
    assert!(csv.contains("word_markers,1\n"));
    assert!(csv.contains("phrase_markers,0\n"));
}

#[test]
fn term_counts_csv_lists_counts() {
    let lexicon = vec![Term::word("delve", 10, "verb", "test")];
    let text = "delve and delve";
    let matches = find_matches(text, &lexicon);
    let report = score(text, &matches);
    let csv = term_counts_csv("word", &report.word_counts).unwrap();
    assert_eq!(csv, "word,count\ndelve,2\n");
}

#[test]
fn html_report_embeds_highlighting_and_stats() {
    let lexicon = vec![Term::word("delve", 10, "verb", "GPTZero")];
    let text = "We delve into it.";
    let matches = find_matches(text, &lexicon);
    let report = score(text, &matches);
    let suggestions = suggest(&report);
    let html = html_report(text, &matches, &report, &suggestions);

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"class="ai-marker ai-weight-10""#));
    assert!(html.contains("AI Words Detected"));
    assert!(html.contains("<strong>delve</strong>"));
}

#[test]
fn analyze_runs_against_default_bank() {
    let store = MemoryLexicon::with_default_bank();
    let text = "In this article, we delve into the rich tapestry of seamless integration.";
    let analysis = markscan::analyze(text, &store, &TermFilter::default()).unwrap();

    assert!(analysis.report.phrase_marker_count >= 4);
    // "delve", "tapestry", "seamless", and "integration" all sit inside
    // phrase matches and must be suppressed.
    assert!(!analysis.report.word_counts.contains_key("delve"));
    assert!(!analysis.report.word_counts.contains_key("tapestry"));
    assert!(analysis.report.weighted_score > 0.0);
    assert!(!analysis.suggestions.phrase_replacements.is_empty());
}

#[test]
fn analyze_honors_min_weight_filter() {
    let store = MemoryLexicon::with_default_bank();
    let text = "We foster and delve."; // foster has weight 5, delve 10
    let all = markscan::analyze(text, &store, &TermFilter::default()).unwrap();
    let strong = markscan::analyze(text, &store, &TermFilter::min_weight(8)).unwrap();
    assert!(all.report.word_counts.contains_key("foster"));
    assert!(!strong.report.word_counts.contains_key("foster"));
    assert!(strong.report.word_counts.contains_key("delve"));
}

#[test]
fn analysis_serializes_to_valid_json() {
    let store = MemoryLexicon::with_default_bank();
    let analysis =
        markscan::analyze("We delve into a robust paradigm.", &store, &TermFilter::default())
            .unwrap();
    let json = serde_json::to_string_pretty(&analysis).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.get("matches").is_some());
    let report = parsed.get("report").unwrap();
    assert!(report.get("weighted_score").is_some());
    assert!(report.get("word_density_pct").is_some());
    assert!(parsed.get("suggestions").is_some());
}
