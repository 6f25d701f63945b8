//! Error types for qualify-options

use std::path::PathBuf;

/// Result type for qualify-options operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading option sources or querying options
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The option file is not well-formed XML
    #[error("Failed to parse option file {path}: {message}")]
    OptionFileParse { path: PathBuf, message: String },

    /// An `<option>` element without a `name` attribute
    #[error("Option element without a 'name' attribute in {path}")]
    MissingOptionName { path: PathBuf },

    /// A required option is not set by any source
    #[error("Option '{name}' is not set")]
    OptionNotFound { name: String },

    #[error("Invalid resolver configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::OptionNotFound { name: name.into() }
    }
}
