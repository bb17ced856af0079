use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::output::Style;
use crate::parser::Mode;

/// Looked up in the working directory as `family_parser.toml`, `.json`, `.yaml`...
pub const CONFIG_FILE: &str = "family_parser";
pub const ENV_PREFIX: &str = "FAMILY_PARSER";

/// Runtime settings. Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: Mode,
    /// JSON file replacing the built-in catalog
    pub catalog: Option<PathBuf>,
    pub compact: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn style(&self) -> Style {
        if self.compact {
            Style::Compact
        } else {
            Style::Pretty
        }
    }

    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::default()),
        }
    }
}
