//! Resolver configuration
//!
//! Names the reserved option that lists option files, the prefix used to
//! look options up in the property layer, and the separator used to split
//! multi-valued options. Every field has a default, so an empty TOML
//! document is a valid configuration.
//!
//! ```toml
//! option_file_key = "option_file"
//! property_prefix = "Q"
//! value_separator = ","
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Default name of the reserved option listing option files
pub const OPTION_FILE_KEY: &str = "option_file";

/// Default prefix of property-layer keys
pub const PROPERTY_PREFIX: &str = "Q";

/// Default separator between the parts of a multi-valued option
pub const VALUE_SEPARATOR: char = ',';

/// Separator between paths in the reserved option-file option
pub const FILE_LIST_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    option_file_key: String,
    property_prefix: String,
    value_separator: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            option_file_key: OPTION_FILE_KEY.to_string(),
            property_prefix: PROPERTY_PREFIX.to_string(),
            value_separator: VALUE_SEPARATOR.to_string(),
        }
    }
}

/// Settings that shape how options are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Option whose value lists the option files to load
    pub option_file_key: String,

    /// Prepended to an option name to form its property-layer key
    pub property_prefix: String,

    /// Splits a value into parts for multi-value lookups
    pub value_separator: char,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            option_file_key: OPTION_FILE_KEY.to_string(),
            property_prefix: PROPERTY_PREFIX.to_string(),
            value_separator: VALUE_SEPARATOR,
        }
    }
}

impl ResolverConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let invalid = |message: String| Error::InvalidConfig {
            path: PathBuf::from(path),
            message,
        };

        let raw: RawConfig = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

        let mut chars = raw.value_separator.chars();
        let value_separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(invalid(format!(
                    "value_separator must be a single character, got {:?}",
                    raw.value_separator
                )));
            }
        };

        if raw.option_file_key.is_empty() {
            return Err(invalid("option_file_key must not be empty".to_string()));
        }

        Ok(Self {
            option_file_key: raw.option_file_key,
            property_prefix: raw.property_prefix,
            value_separator,
        })
    }

    /// Property-layer key for an option name.
    pub fn property_key(&self, name: &str) -> String {
        format!("{}{}", self.property_prefix, name)
    }
}
