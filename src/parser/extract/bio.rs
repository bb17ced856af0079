use std::sync::LazyLock;

use regex::{Captures, Regex};

static EMPTY_PARENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s*\)").unwrap());
static PUNCT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[.,;](?:\s*[.,;])*\s*").unwrap());
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const SEPARATORS: &[char] = &['.', ',', ';', ':'];

/// Tidy what is left of a description once profession and relationships are gone.
pub fn normalize(text: &str) -> String {
    let s = EMPTY_PARENS_RE.replace_all(text, " ");
    let s = s.replace(['(', ')'], "");
    let s = PUNCT_RUN_RE.replace_all(&s, |caps: &Captures| collapse_run(&s, caps));
    let s = SPACES_RE.replace_all(&s, " ");

    s.trim_start_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .trim_end_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .to_string()
}

/// Reduce a run like " ,  . " to its strongest mark plus one space.
/// Marks inside numbers ("1.5", "10,000") are left alone.
fn collapse_run(source: &str, caps: &Captures) -> String {
    let m = caps.get(0).map(|m| (m.start(), m.end(), m.as_str()));
    let Some((start, end, run)) = m else {
        return String::new();
    };

    let digit_before = source[..start].chars().next_back().is_some_and(|c| c.is_ascii_digit());
    let digit_after = source[end..].chars().next().is_some_and(|c| c.is_ascii_digit());
    if digit_before && digit_after && run.len() == 1 {
        return run.to_string();
    }

    let mark = if run.contains('.') {
        '.'
    } else if run.contains(';') {
        ';'
    } else {
        ','
    };
    format!("{mark} ")
}
