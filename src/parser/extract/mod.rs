pub mod bio;
pub mod profession;
pub mod relationships;

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::catalog::CompiledCatalog;
use crate::error::ParseWarning;
use crate::model::Member;

static MEMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*(.*?):\*\*\s*(.*)$").unwrap());

/// Turns one `**Name:** description` line into a [`Member`].
#[derive(Debug, Clone)]
pub struct Extractor {
    catalog: CompiledCatalog,
}

impl Extractor {
    pub fn new(catalog: CompiledCatalog) -> Self {
        Extractor { catalog }
    }

    /// `number` is only used to label the warning.
    pub fn extract(&self, number: usize, line: &str) -> Result<Member, ParseWarning> {
        let malformed = || ParseWarning::MalformedMember {
            line: number,
            text: line.to_string(),
        };

        let caps = MEMBER_RE.captures(line).ok_or_else(malformed)?;
        let name = caps[1].trim();
        if name.is_empty() {
            return Err(malformed());
        }
        let description = caps[2].trim();

        let (profession, rest) = profession::split(description, &self.catalog);
        let (connections, residual) = relationships::extract(rest, &self.catalog);
        let bio = bio::normalize(&residual);

        trace!(line = number, name, %profession, connections = connections.len(), "member extracted");

        Ok(Member {
            name: name.to_string(),
            profession,
            bio,
            connections,
        })
    }
}

// ── Tests ──
