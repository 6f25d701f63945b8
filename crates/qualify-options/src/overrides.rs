//! Property layer that outranks every resolved option
//!
//! Any source of key/value properties can act as the override layer. The
//! resolver looks an option up under `<prefix><name>` on every query, so a
//! source whose contents change between calls is observed immediately.

use std::collections::{BTreeMap, HashMap};
use std::env;

/// A read-only source of override properties
pub trait OverrideSource: Send + Sync {
    /// Value of the property `key`, if set.
    fn property(&self, key: &str) -> Option<String>;

    /// Whether the property `key` is set.
    fn has_property(&self, key: &str) -> bool {
        self.property(key).is_some()
    }
}

/// An override layer with no properties
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn property(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Properties read from the process environment
///
/// Variables that are not valid Unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentOverrides;

impl OverrideSource for EnvironmentOverrides {
    fn property(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var(key).ok()
    }

    fn has_property(&self, key: &str) -> bool {
        if key.is_empty() || key.contains(['=', '\0']) {
            return false;
        }
        env::var_os(key).is_some()
    }
}

impl OverrideSource for HashMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn has_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl OverrideSource for BTreeMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn has_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

/// Two sources stacked: `upper` is consulted before `lower`
#[derive(Debug, Clone, Default)]
pub struct Layered<A, B> {
    pub upper: A,
    pub lower: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(upper: A, lower: B) -> Self {
        Self { upper, lower }
    }
}

impl<A: OverrideSource, B: OverrideSource> OverrideSource for Layered<A, B> {
    fn property(&self, key: &str) -> Option<String> {
        self.upper
            .property(key)
            .or_else(|| self.lower.property(key))
    }

    fn has_property(&self, key: &str) -> bool {
        self.upper.has_property(key) || self.lower.has_property(key)
    }
}

impl<T: OverrideSource + ?Sized> OverrideSource for Box<T> {
    fn property(&self, key: &str) -> Option<String> {
        (**self).property(key)
    }

    fn has_property(&self, key: &str) -> bool {
        (**self).has_property(key)
    }
}
