//! Shared test utilities for the qualify-options workspace.
//!
//! Dev-dependency only. Provides [`OptionFiles`], a temporary directory that
//! writes XML option files and builds the matching `option_file=` token.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of option files.
///
/// # Example
///
/// ```rust
/// use qualify_test_utils::OptionFiles;
///
/// let files = OptionFiles::new();
/// let defaults = files.write("defaults.xml", &[("browser", "firefox")]);
/// let missing = files.missing("absent.xml");
/// let token = OptionFiles::option_file_arg(&[&missing, &defaults]);
/// assert!(token.starts_with("option_file="));
/// ```
pub struct OptionFiles {
    temp_dir: TempDir,
}

impl Default for OptionFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionFiles {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an option file holding `options` in order and return its path.
    pub fn write(&self, file_name: &str, options: &[(&str, &str)]) -> PathBuf {
        self.write_raw(file_name, &option_document(options))
    }

    /// Write arbitrary content, e.g. malformed XML.
    pub fn write_raw(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.root().join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Path inside the directory that is guaranteed not to exist.
    pub fn missing(&self, file_name: &str) -> PathBuf {
        let path = self.root().join(file_name);
        assert!(
            !path.exists(),
            "OptionFiles::missing: {} already exists",
            path.display()
        );
        path
    }

    /// `option_file=<p1>,<p2>,...` for the given paths.
    pub fn option_file_arg<P: AsRef<Path>>(paths: &[P]) -> String {
        let list: Vec<String> = paths
            .iter()
            .map(|p| p.as_ref().display().to_string())
            .collect();
        format!("option_file={}", list.join(","))
    }
}

/// XML text of an option file holding `options`.
///
/// Values are escaped so that any string round-trips through the parser.
pub fn option_document(options: &[(&str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<options>\n");
    for (name, value) in options {
        xml.push_str(&format!(
            "    <option name=\"{}\">{}</option>\n",
            escape(name),
            escape(value)
        ));
    }
    xml.push_str("</options>\n");
    xml
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
