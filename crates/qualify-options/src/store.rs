//! Name-to-value option storage

use std::collections::BTreeMap;

/// Result of [`OptionStore::set_if_absent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The option was not set before and now holds the new value
    Inserted,
    /// The option was already set; the stored value is kept
    Rejected { existing: String },
}

impl SetOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, SetOutcome::Inserted)
    }
}

/// Options known to a resolver, at most one value per name
///
/// Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionStore {
    options: BTreeMap<String, String>,
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` only if `name` has no value yet.
    pub fn set_if_absent(&mut self, name: &str, value: &str) -> SetOutcome {
        match self.options.get(name) {
            Some(existing) => SetOutcome::Rejected {
                existing: existing.clone(),
            },
            None => {
                self.options.insert(name.to_string(), value.to_string());
                SetOutcome::Inserted
            }
        }
    }

    /// Store `value`, replacing any previous value. Returns the replaced value.
    pub fn set_overriding(&mut self, name: &str, value: &str) -> Option<String> {
        self.options.insert(name.to_string(), value.to_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
