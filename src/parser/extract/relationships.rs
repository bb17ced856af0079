use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{CompiledCatalog, CompiledTemplate};

/// Characters that close a relationship target ("Son of X, ...").
const STOPS: &[char] = &['.', ',', ';', '(', ')'];

/// Relative clause after a target: "Son of X who founded ..."
static CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(?:who|whom|whose|which|where)\b").unwrap());

struct Hit {
    /// Removed from the working text
    span: Range<usize>,
    /// Pushed to `connections`: `span.start..fragment_end`
    fragment_end: usize,
}

/// Pull relationship fragments out of `text`, template by template.
///
/// Every hit of a template is recorded and its span cut from the working text
/// before the next template runs. Returns the fragments in discovery order and
/// what is left of the text.
pub fn extract(text: &str, catalog: &CompiledCatalog) -> (Vec<String>, String) {
    let mut working = text.to_string();
    let mut connections = Vec::new();

    for template in catalog.templates() {
        let hits = find_hits(&working, template, catalog);
        if hits.is_empty() {
            continue;
        }
        for hit in &hits {
            connections.push(working[hit.span.start..hit.fragment_end].to_string());
        }
        // Back to front so earlier offsets stay valid.
        for hit in hits.into_iter().rev() {
            working.replace_range(hit.span, " ");
        }
    }

    (connections, working)
}

fn find_hits(text: &str, template: &CompiledTemplate, catalog: &CompiledCatalog) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut pos = 0;

    while let Some(m) = template.re.find_at(text, pos) {
        // Owned by the fragment the parenthetical follows
        if in_parenthetical(text, m.start()) {
            pos = m.end();
            continue;
        }
        match clause(text, m.end(), catalog) {
            Some((fragment_end, span_end)) => {
                hits.push(Hit {
                    span: m.start()..span_end,
                    fragment_end,
                });
                pos = span_end;
            }
            // Phrase with nothing after it
            None => pos = m.end(),
        }
    }

    hits
}

/// True when `at` sits between a `(` and its closing `)`.
fn in_parenthetical(text: &str, at: usize) -> bool {
    let depth = text[..at].chars().fold(0usize, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth.saturating_sub(1),
        _ => depth,
    });
    depth > 0 && text[at..].contains(')')
}

/// Find where the target starting at `from` ends.
///
/// The target stops at punctuation, a relative clause or the next phrase.
/// Returns `(fragment_end, span_end)`, or `None` when the target is empty.
/// The span also swallows a dangling "and" left before the next phrase.
fn clause(text: &str, from: usize, catalog: &CompiledCatalog) -> Option<(usize, usize)> {
    let stop = text[from..]
        .find(STOPS)
        .map(|i| from + i)
        .unwrap_or(text.len());
    let next = catalog.relationship_start(text, from).unwrap_or(text.len());
    let relative = CLAUSE_RE
        .find(&text[from..])
        .map(|m| from + m.start())
        .unwrap_or(text.len());
    let target_end = stop.min(next).min(relative);

    let target = text[from..target_end].trim_end();
    let target = target
        .strip_suffix(" and")
        .or_else(|| target.strip_suffix(" &"))
        .unwrap_or(target)
        .trim_end();
    if target.trim().is_empty() {
        return None;
    }
    let fragment_end = from + target.len();

    if target_end == stop && text[stop..].starts_with('(') {
        if let Some(close) = text[stop..].find(')') {
            let end = stop + close + 1;
            return Some((end, end));
        }
    }

    Some((fragment_end, target_end))
}
