//! Options for member resolution, readable from TOML.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Name of the static method synthesized on the main class.
    pub entry_method: String,

    /// Also report classes whose base chain runs into a cycle they are not
    /// part of. Cycles through the class itself are always reported.
    pub report_ancestor_cycles: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            entry_method: default_entry_method(),
            report_ancestor_cycles: true,
        }
    }
}

pub fn default_entry_method() -> String {
    "main".to_string()
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read resolver config `{}`", path.display())]
    #[diagnostic(code(mjc_resolve::config_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resolver config: {0}")]
    #[diagnostic(code(mjc_resolve::config_parse))]
    Parse(#[from] toml::de::Error),
}

impl ResolveConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
