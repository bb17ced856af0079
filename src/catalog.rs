//! Profession labels and relationship phrases used by the member extractor.
//!
//! Both lists are ordered. Relationship templates run one after another and each
//! removes its matches before the next one sees the text, so a longer phrase
//! that contains a shorter one ("Co-Founder of" / "Founder of") must come first.
//! Relationship phrases match with the case they are written in; profession
//! entries match in any case.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// (phrase, tag)
const RELATIONSHIPS: &[(&str, &str)] = &[
    ("Married to", "spouse"),
    ("Ex-wife of", "former_spouse"),
    ("Ex-husband of", "former_spouse"),
    ("Wife of", "spouse"),
    ("Husband of", "spouse"),
    ("Partner of", "partner"),
    ("Son-in-law of", "in_law"),
    ("Daughter-in-law of", "in_law"),
    ("Brother-in-law of", "in_law"),
    ("Sister-in-law of", "in_law"),
    ("Father-in-law of", "in_law"),
    ("Mother-in-law of", "in_law"),
    ("Grandson of", "grandchild"),
    ("Granddaughter of", "grandchild"),
    ("Grandfather of", "grandparent"),
    ("Grandmother of", "grandparent"),
    ("Stepson of", "stepchild"),
    ("Stepdaughter of", "stepchild"),
    ("Son of", "child"),
    ("Daughter of", "child"),
    ("Father of", "parent"),
    ("Mother of", "parent"),
    ("Half-brother of", "half_sibling"),
    ("Half-sister of", "half_sibling"),
    ("Brother of", "sibling"),
    ("Sister of", "sibling"),
    ("Niece of", "nibling"),
    ("Nephew of", "nibling"),
    ("Aunt of", "aunt_uncle"),
    ("Uncle of", "aunt_uncle"),
    ("Cousin of", "cousin"),
    ("Member of", "member"),
    ("Co-founder of", "founder"),
    ("Founder of", "founder"),
];

const PROFESSIONS: &[&str] = &[
    "Action choreographer",
    "Playback singer",
    "Music director",
    "Music composer",
    "Casting director",
    "Art director",
    "Film director",
    "Film producer",
    "Film editor",
    "Interior designer",
    "Fashion designer",
    "Costume designer",
    "Television host",
    "Director",
    "Producer",
    "Actor",
    "Actress",
    "Singer",
    "Screenwriter",
    "Writer",
    "Politician",
    "Dancer",
    "Choreographer",
    "Businessman",
    "Businesswoman",
    "Lyricist",
    "Poet",
    "Cinematographer",
    "Entrepreneur",
    "Model",
    "Hotelier",
    "Composer",
    "Editor",
    "Designer",
    "Author",
    "Journalist",
    "Philanthropist",
    "Cricketer",
    "Painter",
    "Homemaker",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipTemplate {
    pub phrase: String,
    pub tag: String,
}

/// The vocabulary the extractor works from. Loadable from JSON so a document
/// with its own conventions can be parsed without code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub professions: Vec<String>,
    pub relationships: Vec<RelationshipTemplate>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            professions: PROFESSIONS.iter().map(|p| p.to_string()).collect(),
            relationships: RELATIONSHIPS
                .iter()
                .map(|(phrase, tag)| RelationshipTemplate {
                    phrase: phrase.to_string(),
                    tag: tag.to_string(),
                })
                .collect(),
        }
    }
}

impl Catalog {
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn compile(&self) -> Result<CompiledCatalog, CatalogError> {
        CompiledCatalog::new(self)
    }
}

#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    pub tag: String,
    pub(crate) re: Regex,
}

/// Regexes built once from a [`Catalog`].
#[derive(Debug, Clone)]
pub struct CompiledCatalog {
    profession_prefix: Option<Regex>,
    templates: Vec<CompiledTemplate>,
    any_relationship: Option<Regex>,
}

impl CompiledCatalog {
    pub fn new(catalog: &Catalog) -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(catalog.professions.len());
        for (index, p) in catalog.professions.iter().enumerate() {
            if p.trim().is_empty() {
                return Err(CatalogError::EmptyProfession { index });
            }
            entries.push(phrase_pattern(p));
        }

        let mut phrases = Vec::with_capacity(catalog.relationships.len());
        let mut templates = Vec::with_capacity(catalog.relationships.len());
        for (index, t) in catalog.relationships.iter().enumerate() {
            if t.phrase.trim().is_empty() {
                return Err(CatalogError::EmptyPhrase { index });
            }
            let pattern = phrase_pattern(&t.phrase);
            templates.push(CompiledTemplate {
                tag: t.tag.clone(),
                re: Regex::new(&format!(r"\b{}\s+", pattern))?,
            });
            phrases.push(pattern);
        }

        // Entries chained by commas, slashes, ampersands, "and" or plain spaces:
        // "Actor, director and producer"
        let profession_prefix = if entries.is_empty() {
            None
        } else {
            let alt = entries.join("|");
            Some(Regex::new(&format!(
                r"(?i)^(?:{alt})\b(?:(?:\s*[,/&]\s*|\s+)(?:and\s+)?(?:{alt})\b)*"
            ))?)
        };

        let any_relationship = if phrases.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"\b(?:{})\s+", phrases.join("|")))?)
        };

        Ok(CompiledCatalog {
            profession_prefix,
            templates,
            any_relationship,
        })
    }

    /// End offset of the run of profession entries at the very start of `text`.
    pub fn profession_prefix_end(&self, text: &str) -> Option<usize> {
        self.profession_prefix
            .as_ref()
            .and_then(|re| re.find(text))
            .map(|m| m.end())
    }

    /// Offset of the first relationship phrase starting at or after `from`.
    pub fn relationship_start(&self, text: &str, from: usize) -> Option<usize> {
        self.any_relationship
            .as_ref()
            .and_then(|re| re.find_at(text, from))
            .map(|m| m.start())
    }

    pub fn templates(&self) -> &[CompiledTemplate] {
        &self.templates
    }
}

/// Escape a phrase and let its inner spaces match any run of whitespace.
fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}
