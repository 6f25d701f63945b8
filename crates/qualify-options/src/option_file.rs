//! XML option files
//!
//! An option file is a document whose root element holds zero or more
//! `option` children:
//!
//! ```xml
//! <options>
//!     <option name="browser">firefox</option>
//!     <option name="timeout">30</option>
//! </options>
//! ```
//!
//! Other children of the root are ignored. Nested option files are not
//! supported.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};

use crate::config::FILE_LIST_SEPARATOR;
use crate::{Error, Result};

const OPTION_TAG: &str = "option";
const NAME_ATTRIBUTE: &str = "name";

/// A single `<option>` element read from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub name: String,
    pub value: String,
}

impl OptionEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Paths listed in the value of the option-file option, in order.
///
/// Empty segments are skipped. Paths are taken verbatim; a path cannot
/// itself contain the separator.
pub fn split_file_list(value: &str) -> Vec<PathBuf> {
    value
        .split(FILE_LIST_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Read and parse the option file at `path`.
pub fn load_option_file(path: &Path) -> Result<Vec<OptionEntry>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_option_document(&content, path)
}

/// Parse option entries out of XML text, in document order.
///
/// `path` is only used for error reporting. A document with any `<option>`
/// lacking a `name` attribute is rejected as a whole.
pub fn parse_option_document(xml: &str, path: &Path) -> Result<Vec<OptionEntry>> {
    let doc = Document::parse(xml).map_err(|e| Error::OptionFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    doc.root_element()
        .children()
        .filter(|node| node.is_element() && node.has_tag_name(OPTION_TAG))
        .map(|node| -> Result<OptionEntry> {
            let name = node
                .attribute(NAME_ATTRIBUTE)
                .ok_or_else(|| Error::MissingOptionName {
                    path: path.to_path_buf(),
                })?;
            Ok(OptionEntry::new(name, element_text(node)))
        })
        .collect()
}

/// Concatenated direct text children of an element, untrimmed.
fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
