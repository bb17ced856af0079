use serde::{Deserialize, Serialize};

/// One `### Name` section and the members listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    #[serde(rename = "family_name")]
    pub name: String,
    pub members: Vec<Member>,
}

impl Family {
    pub fn new(name: impl Into<String>) -> Self {
        Family {
            name: name.into(),
            members: Vec::new(),
        }
    }
}

/// A single `**Name:** description` line broken into fields.
///
/// `connections` keeps the literal relationship fragments ("Son of Raj Kapoor"),
/// they are never resolved to other members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub profession: String,
    pub bio: String,
    pub connections: Vec<String>,
}
