//! Lookups over parsed families: name and profession indexes, member search,
//! and headline counts.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{Family, Member};

pub fn family_names(families: &[Family]) -> Vec<&str> {
    families
        .iter()
        .map(|f| f.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty professions, sorted.
pub fn professions(families: &[Family]) -> Vec<&str> {
    families
        .iter()
        .flat_map(|f| &f.members)
        .map(|m| m.profession.trim())
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemberRef<'a> {
    pub family: &'a str,
    #[serde(flatten)]
    pub member: &'a Member,
}

/// Member search. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Case-insensitive substring of name, profession or family name
    pub term: Option<String>,
    pub families: Vec<String>,
    pub professions: Vec<String>,
}

impl Filter {
    pub fn apply<'a>(&self, families: &'a [Family]) -> Vec<MemberRef<'a>> {
        let term = self
            .term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        families
            .iter()
            .filter(|f| self.families.is_empty() || self.families.contains(&f.name))
            .flat_map(|f| {
                f.members.iter().map(move |m| MemberRef {
                    family: &f.name,
                    member: m,
                })
            })
            .filter(|r| {
                self.professions.is_empty() || self.professions.contains(&r.member.profession)
            })
            .filter(|r| match &term {
                Some(t) => {
                    r.member.name.to_lowercase().contains(t)
                        || r.member.profession.to_lowercase().contains(t)
                        || r.family.to_lowercase().contains(t)
                }
                None => true,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub families: usize,
    pub members: usize,
    pub connections: usize,
    pub professions: usize,
    pub empty_families: usize,
}

impl Summary {
    pub fn of(families: &[Family]) -> Self {
        Summary {
            families: families.len(),
            members: families.iter().map(|f| f.members.len()).sum(),
            connections: families
                .iter()
                .flat_map(|f| &f.members)
                .map(|m| m.connections.len())
                .sum(),
            professions: professions(families).len(),
            empty_families: families.iter().filter(|f| f.members.is_empty()).count(),
        }
    }
}

// ── Tests ──
