//! Report exporters: pure serializers over an `AnalysisReport`. Nothing in
//! here recomputes counts or offsets.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use thiserror::Error;

use crate::highlight::{render_highlighted, HighlightStyle};
use crate::matcher::Match;
use crate::stats::AnalysisReport;
use crate::suggest::Suggestions;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output was not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String, ReportError> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// One-metric-per-row CSV table of the report's scalar statistics.
pub fn metrics_csv(report: &AnalysisReport) -> Result<String, ReportError> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record(["metric", "value"])?;
    w.write_record(["total_words", &report.total_words.to_string()])?;
    w.write_record(["total_sentences", &report.total_sentences.to_string()])?;
    w.write_record(["unique_words", &report.unique_words.to_string()])?;
    w.write_record(["avg_word_length", &format!("{:.2}", report.avg_word_length)])?;
    w.write_record([
        "avg_sentence_length",
        &format!("{:.2}", report.avg_sentence_length),
    ])?;
    w.write_record(["ai_markers", &report.marker_count.to_string()])?;
    w.write_record(["word_markers", &report.word_marker_count.to_string()])?;
    w.write_record(["phrase_markers", &report.phrase_marker_count.to_string()])?;
    w.write_record(["word_density_pct", &format!("{:.2}", report.word_density_pct)])?;
    w.write_record([
        "phrase_density_pct",
        &format!("{:.2}", report.phrase_density_pct),
    ])?;
    w.write_record(["weighted_score", &format!("{:.2}", report.weighted_score)])?;
    w.flush()?;
    finish_csv(w)
}

/// Per-term occurrence counts as a two-column CSV table.
pub fn term_counts_csv(
    header: &str,
    counts: &BTreeMap<String, usize>,
) -> Result<String, ReportError> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record([header, "count"])?;
    for (term, count) in counts {
        w.write_record([term.as_str(), &count.to_string()])?;
    }
    w.flush()?;
    finish_csv(w)
}

fn term_table(
    out: &mut String,
    title: &str,
    column: &str,
    counts: &BTreeMap<String, usize>,
    matches: &[Match],
) {
    let _ = write!(out, "<h2>{title}</h2><table><tr><th>{column}</th><th>Count</th><th>Weight</th><th>Category</th></tr>");
    let mut rows: Vec<(&String, usize, u32, &str)> = counts
        .iter()
        .map(|(term, &count)| {
            let m = matches.iter().find(|m| &m.term_text == term);
            (
                term,
                count,
                m.map(|m| m.weight).unwrap_or(0),
                m.map(|m| m.category.as_str()).unwrap_or("general"),
            )
        })
        .collect();
    rows.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));
    for (term, count, weight, category) in rows {
        let _ = write!(
            out,
            "<tr><td>{term}</td><td>{count}</td><td>{weight}</td><td>{category}</td></tr>"
        );
    }
    out.push_str("</table>");
}

fn suggestion_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(out, "<h3>{title}</h3><ul>");
    for item in items {
        let _ = write!(out, "<li>{item}</li>");
    }
    out.push_str("</ul>");
}

fn replacement_list(out: &mut String, title: &str, table: &BTreeMap<String, Vec<String>>) {
    if table.is_empty() {
        return;
    }
    let _ = write!(out, "<h3>{title}</h3><ul>");
    for (term, replacements) in table {
        let _ = write!(
            out,
            "<li><strong>{term}</strong> &rarr; {}</li>",
            replacements.join(", ")
        );
    }
    out.push_str("</ul>");
}

const REPORT_CSS: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; margin: 0; padding: 20px; }
.container { max-width: 1200px; margin: 0 auto; }
.text-container { margin-bottom: 20px; padding: 15px; border: 1px solid #ddd; border-radius: 5px; }
.stats-container { display: flex; flex-wrap: wrap; margin-bottom: 20px; }
.stat-box { background-color: #f5f5f5; border-radius: 5px; padding: 10px; margin-right: 10px; margin-bottom: 10px; }
.ai-marker { background-color: #FFECB3; border-radius: 3px; padding: 0 2px; }
.ai-weight-10 { background-color: #FFCCBC; }
.ai-weight-9 { background-color: #FFD8B2; }
.ai-weight-8 { background-color: #FFE3B2; }
.ai-weight-7 { background-color: #FFECB3; }
.ai-weight-6 { background-color: #FFF59D; }
.ai-weight-5 { background-color: #FFF9C4; }
.ai-weight-4 { background-color: #FFFDE7; }
.ai-weight-3 { background-color: #E8F5E9; }
.ai-weight-2 { background-color: #E3F2FD; }
.ai-weight-1 { background-color: #EDE7F6; }
.suggestions { margin-top: 20px; padding: 15px; background-color: #e8f5e9; border-radius: 5px; }
table { border-collapse: collapse; width: 100%; margin-bottom: 15px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
h1, h2, h3 { color: #333; }";

/// Standalone HTML document embedding the highlighted text, the stat boxes,
/// the per-term tables, and the suggestions.
pub fn html_report(
    text: &str,
    matches: &[Match],
    report: &AnalysisReport,
    suggestions: &Suggestions,
) -> String {
    let highlighted = render_highlighted(text, matches, HighlightStyle::Html);

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<title>AI Content Analysis</title>\n<style>\n{REPORT_CSS}\n</style>\n</head>\n<body>\n<div class=\"container\">\n<h1>AI Content Analysis</h1>\n"
    );

    out.push_str("<div class=\"stats-container\">");
    for (label, value) in [
        ("Word Count", report.total_words.to_string()),
        ("Sentences", report.total_sentences.to_string()),
        ("AI Markers", report.marker_count.to_string()),
        ("AI Word %", format!("{:.2}%", report.word_density_pct)),
        ("AI Score", format!("{:.2}/10", report.weighted_score)),
    ] {
        let _ = write!(
            out,
            "<div class=\"stat-box\"><h3>{label}</h3><p>{value}</p></div>"
        );
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        "<h2>Highlighted Text</h2><div class=\"text-container\">{highlighted}</div>"
    );

    if !report.word_counts.is_empty() {
        term_table(&mut out, "AI Words Detected", "Word", &report.word_counts, matches);
    }
    if !report.phrase_counts.is_empty() {
        term_table(
            &mut out,
            "AI Phrases Detected",
            "Phrase",
            &report.phrase_counts,
            matches,
        );
    }

    if !suggestions.is_empty() {
        out.push_str("<h2>Suggestions</h2><div class=\"suggestions\">");
        suggestion_list(&mut out, "General", &suggestions.general);
        replacement_list(&mut out, "Word Replacements", &suggestions.word_replacements);
        replacement_list(
            &mut out,
            "Phrase Replacements",
            &suggestions.phrase_replacements,
        );
        suggestion_list(&mut out, "Structure", &suggestions.structure);
        out.push_str("</div>");
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}
