use std::path::PathBuf;

use thiserror::Error;

/// Non-fatal diagnostics collected while parsing a document.
///
/// `line` is the 1-based line number in the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// Starts with `**` but is not `**Name:** description`
    #[error("line {line}: could not parse member line: {text}")]
    MalformedMember { line: usize, text: String },

    /// Neither a header nor a member line (strict mode only)
    #[error("line {line}: unrecognized line skipped: {text}")]
    UnrecognizedLine { line: usize, text: String },

    /// Member line before the first family header (strict mode only)
    #[error("line {line}: member line outside any family: {text}")]
    OrphanMember { line: usize, text: String },
}

impl ParseWarning {
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::MalformedMember { line, .. }
            | ParseWarning::UnrecognizedLine { line, .. }
            | ParseWarning::OrphanMember { line, .. } => *line,
        }
    }
}

/// Errors building a [`crate::catalog::Catalog`] into matchers.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("relationship template {index} has an empty phrase")]
    EmptyPhrase { index: usize },

    #[error("profession entry {index} is empty")]
    EmptyProfession { index: usize },

    #[error("catalog pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}
