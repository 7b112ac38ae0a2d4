use crate::matcher::Match;

/// Output wrapping for highlighted matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightStyle {
    /// `[AI:<match>]`
    Plain,
    /// `**<match>**`
    Markdown,
    /// An inline span carrying the term, category, and weight so a renderer
    /// can key styling off them.
    Html,
}

fn wrap(style: HighlightStyle, m: &Match, surface: &str) -> String {
    match style {
        HighlightStyle::Plain => format!("[AI:{surface}]"),
        HighlightStyle::Markdown => format!("**{surface}**"),
        HighlightStyle::Html => format!(
            r#"<span class="ai-marker ai-weight-{weight}" title="{term} ({category}, weight: {weight})">{surface}</span>"#,
            weight = m.weight,
            term = m.term_text,
            category = m.category,
        ),
    }
}

/// Produce a copy of `text` with every match wrapped per `style`.
///
/// Matches are spliced in descending (start, end) order so replacements
/// never shift the offsets of matches earlier in the text. With an empty
/// match list the input comes back unchanged. Matches that no longer denote
/// a valid span (stale offsets, spans left dangling by an overlapping
/// replacement) are skipped rather than corrupting the output.
pub fn render_highlighted(text: &str, matches: &[Match], style: HighlightStyle) -> String {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut out = text.to_string();
    for m in ordered {
        if m.start >= m.end || m.end > text.len() {
            continue;
        }
        if !text.is_char_boundary(m.start) || !text.is_char_boundary(m.end) {
            continue;
        }
        if m.end > out.len() || !out.is_char_boundary(m.start) || !out.is_char_boundary(m.end) {
            continue;
        }
        let surface = &text[m.start..m.end];
        out.replace_range(m.start..m.end, &wrap(style, m, surface));
    }
    out
}
