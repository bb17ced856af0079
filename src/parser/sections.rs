use std::iter::Peekable;

use super::lines::{classify_lines, LineKind, SourceLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// Lines before the first header; never becomes a family
    Preamble,
    Family(String),
}

#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub kind: SectionKind,
    /// Everything after the header up to the next one
    pub lines: Vec<SourceLine<'a>>,
}

/// Lazily cluster classified lines into sections, one per header.
pub struct Sections<I: Iterator> {
    lines: Peekable<I>,
}

impl<'a, I> Iterator for Sections<I>
where
    I: Iterator<Item = SourceLine<'a>>,
{
    type Item = Section<'a>;

    fn next(&mut self) -> Option<Section<'a>> {
        let (kind, mut lines) = match self.lines.next()? {
            SourceLine {
                kind: LineKind::Header(name),
                ..
            } => (SectionKind::Family(name), Vec::new()),
            other => (SectionKind::Preamble, vec![other]),
        };
        while let Some(line) = self.lines.next_if(|l| !l.is_header()) {
            lines.push(line);
        }
        Some(Section { kind, lines })
    }
}

pub fn sections(raw: &str) -> Sections<impl Iterator<Item = SourceLine<'_>>> {
    Sections {
        lines: classify_lines(raw).peekable(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(raw: &str) -> Vec<SectionKind> {
        sections(raw).map(|s| s.kind).collect()
    }

    #[test]
    fn no_headers_only_preamble() {
        assert_eq!(kinds("just prose\n**A:** b"), vec![SectionKind::Preamble]);
        assert!(kinds("").is_empty());
        assert!(kinds("\n \n").is_empty());
    }

    #[test]
    fn consecutive_headers() {
        assert_eq!(
            kinds("### One\n### Two"),
            vec![
                SectionKind::Family("One".into()),
                SectionKind::Family("Two".into())
            ]
        );
    }

    #[test]
    fn lines_grouped_under_nearest_header() {
        let raw = "intro\n### One\n**A:** x\nnote\n### Two\n**B:** y";
        let all: Vec<_> = sections(raw).collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].kind, SectionKind::Preamble);
        assert_eq!(all[1].lines.len(), 2);
        assert_eq!(all[1].lines[1].text(), "note");
        assert_eq!(all[2].lines.len(), 1);
        assert_eq!(all[2].lines[0].number, 6);
    }

    #[test]
    fn sections_are_lazy() {
        let raw = "### One\n### Two\n### Three";
        let mut it = sections(raw);
        assert_eq!(it.next().unwrap().kind, SectionKind::Family("One".into()));
        assert_eq!(it.count(), 2);
    }
}
