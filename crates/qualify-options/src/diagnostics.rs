//! Warnings and errors collected while resolving options
//!
//! Nothing recorded here aborts resolution. Whether accumulated errors should
//! stop the surrounding program is up to the caller.

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What went wrong while loading an option source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A referenced option file does not exist
    MissingOptionFile,
    /// An option file could not be read or is not a valid option document
    OptionFileParseFailure,
    /// A lower-precedence source tried to set an option that is already set
    OptionOverrideConflict,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::MissingOptionFile | DiagnosticKind::OptionFileParseFailure => {
                Severity::Error
            }
            DiagnosticKind::OptionOverrideConflict => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Option file the diagnostic refers to
    pub path: Option<PathBuf>,
    /// Option name the diagnostic refers to
    pub option: Option<String>,
}

impl Diagnostic {
    pub fn missing_option_file(absolute_path: &Path) -> Self {
        Self {
            kind: DiagnosticKind::MissingOptionFile,
            message: format!(
                "Option file '{}' does not exist",
                absolute_path.display()
            ),
            path: Some(absolute_path.to_path_buf()),
            option: None,
        }
    }

    pub fn option_file_parse_failure(path: &Path, error: &crate::Error) -> Self {
        Self {
            kind: DiagnosticKind::OptionFileParseFailure,
            message: error.to_string(),
            path: Some(path.to_path_buf()),
            option: None,
        }
    }

    pub fn override_conflict(name: &str, existing: &str, path: Option<&Path>) -> Self {
        Self {
            kind: DiagnosticKind::OptionOverrideConflict,
            message: format!("Option '{}' already set to: {}", name, existing),
            path: path.map(Path::to_path_buf),
            option: Some(name.to_string()),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message)
    }
}

/// Ordered, append-only list of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it through `tracing`.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => {
                tracing::warn!(kind = ?diagnostic.kind, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(kind = ?diagnostic.kind, "{}", diagnostic.message)
            }
        }
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| !d.is_error())
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
