pub mod extract;
pub mod lines;
pub mod sections;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, ParseWarning};
use crate::model::Family;
use extract::Extractor;
use lines::LineKind;
use sections::SectionKind;

/// What to do with lines that are neither headers nor member lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Skip them silently
    #[default]
    Lenient,
    /// Skip them but report each one
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub families: Vec<Family>,
    pub warnings: Vec<ParseWarning>,
}

/// Two-pass pipeline: raw text → sections → families.
#[derive(Debug, Clone)]
pub struct Parser {
    extractor: Extractor,
    mode: Mode,
}

impl Parser {
    pub fn new(catalog: &Catalog, mode: Mode) -> Result<Self, CatalogError> {
        Ok(Parser {
            extractor: Extractor::new(catalog.compile()?),
            mode,
        })
    }

    pub fn parse(&self, raw: &str) -> Parsed {
        let mut parsed = Parsed::default();

        for section in sections::sections(raw) {
            match section.kind {
                SectionKind::Preamble => {
                    debug!(lines = section.lines.len(), "skipping lines before first header");
                    if self.mode == Mode::Strict {
                        for line in &section.lines {
                            let text = line.text().to_string();
                            let warning = match line.kind {
                                LineKind::Member(_) => ParseWarning::OrphanMember {
                                    line: line.number,
                                    text,
                                },
                                _ => ParseWarning::UnrecognizedLine {
                                    line: line.number,
                                    text,
                                },
                            };
                            parsed.warnings.push(warning);
                        }
                    }
                }
                SectionKind::Family(name) => {
                    let mut family = Family::new(name);
                    for line in &section.lines {
                        match line.kind {
                            LineKind::Member(text) => match self.extractor.extract(line.number, text) {
                                Ok(member) => family.members.push(member),
                                Err(warning) => parsed.warnings.push(warning),
                            },
                            LineKind::Other(text) if self.mode == Mode::Strict => {
                                parsed.warnings.push(ParseWarning::UnrecognizedLine {
                                    line: line.number,
                                    text: text.to_string(),
                                });
                            }
                            _ => {}
                        }
                    }
                    debug!(family = %family.name, members = family.members.len(), "family closed");
                    parsed.families.push(family);
                }
            }
        }

        parsed
    }
}

// ── Tests ──
