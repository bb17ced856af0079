//! Turn a loosely formatted family directory into nested records.
//!
//! ```text
//! ### Kapoor family
//! **Raj Kapoor:** Actor, director and producer. Married to Krishna Kapoor.
//! ```
//!
//! becomes one [`Family`] holding one [`Member`] with its profession, bio and
//! relationship fragments split apart.

pub mod catalog;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod query;
pub mod settings;

use std::sync::LazyLock;

pub use catalog::{Catalog, RelationshipTemplate};
pub use error::{CatalogError, ParseWarning};
pub use model::{Family, Member};
pub use parser::{Mode, Parsed, Parser};

static DEFAULT_PARSER: LazyLock<Parser> =
    LazyLock::new(|| Parser::new(&Catalog::default(), Mode::Lenient).unwrap());

/// Parse with the built-in catalog in lenient mode.
pub fn parse(raw: &str) -> Parsed {
    DEFAULT_PARSER.parse(raw)
}
