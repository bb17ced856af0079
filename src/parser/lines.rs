const HEADER_MARKER: &str = "###";
const MEMBER_MARKER: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `### Name`, holding the name with every `#` removed
    Header(String),
    /// Line starting with `**`, kept whole for the extractor
    Member(&'a str),
    Other(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based position in the raw input
    pub number: usize,
    pub kind: LineKind<'a>,
}

impl SourceLine<'_> {
    pub fn is_header(&self) -> bool {
        matches!(self.kind, LineKind::Header(_))
    }

    pub fn text(&self) -> &str {
        match &self.kind {
            LineKind::Header(name) => name.as_str(),
            LineKind::Member(t) | LineKind::Other(t) => *t,
        }
    }
}

/// Trim every line, drop blank ones and tag the rest.
pub fn classify_lines(raw: &str) -> impl Iterator<Item = SourceLine<'_>> {
    raw.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        Some(SourceLine {
            number: i + 1,
            kind: classify(line),
        })
    })
}

pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with(HEADER_MARKER) {
        LineKind::Header(line.replace('#', "").trim().to_string())
    } else if line.starts_with(MEMBER_MARKER) {
        LineKind::Member(line)
    } else {
        LineKind::Other(line)
    }
}
