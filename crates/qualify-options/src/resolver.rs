//! Option resolution across command line, option files and properties
//!
//! Sources, from highest to lowest precedence:
//!
//! 1. **Property layer** - `<prefix><name>` in the injected [`OverrideSource`],
//!    consulted on every lookup
//! 2. **Command line** - `name=value` tokens; a later token replaces an
//!    earlier one with the same name
//! 3. **Option files** - XML files listed in the reserved option; they only
//!    fill in names that are still unset
//!
//! Resolution never fails. Missing or unreadable option files and rejected
//! file values are reported as [`Diagnostics`] next to the resolver.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::command_line;
use crate::config::ResolverConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::option_file::{load_option_file, split_file_list};
use crate::overrides::{NoOverrides, OverrideSource};
use crate::store::{OptionStore, SetOutcome};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    ParsingCommandLine,
    LoadingOptionFiles,
    Ready,
}

/// Configures and runs option resolution
pub struct ResolverBuilder {
    config: ResolverConfig,
    overrides: Box<dyn OverrideSource>,
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverBuilder {
    /// Builder with the default configuration and an empty property layer.
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            overrides: Box::new(NoOverrides),
        }
    }

    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `source` as the property layer.
    pub fn overrides(mut self, source: impl OverrideSource + 'static) -> Self {
        self.overrides = Box::new(source);
        self
    }

    /// Resolve options from a raw command line.
    ///
    /// Command-line assignments are applied first, then every option file
    /// named by the reserved option is loaded in list order.
    pub fn resolve<I, S>(self, args: I) -> Resolution
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = tracing::info_span!("resolve_options").entered();

        let mut resolver = OptionResolver {
            config: self.config,
            store: OptionStore::new(),
            overrides: self.overrides,
        };
        let mut diagnostics = Diagnostics::new();
        let mut phase = Phase::Uninitialized;

        advance(&mut phase, Phase::ParsingCommandLine);
        let args: Vec<S> = args.into_iter().collect();
        for (name, value) in command_line::assignments(args.iter().map(|arg| arg.as_ref())) {
            if let Some(previous) = resolver.store.set_overriding(name, value) {
                tracing::debug!(option = name, %previous, "Command-line value replaced");
            }
        }

        advance(&mut phase, Phase::LoadingOptionFiles);
        if let Some(file_list) = resolver.value(&resolver.config.option_file_key) {
            for path in split_file_list(&file_list) {
                resolver.load_file(&path, &mut diagnostics);
            }
        }

        advance(&mut phase, Phase::Ready);
        for (name, value) in resolver.store.iter() {
            tracing::info!("OPTION [{}] : {}", name, value);
        }

        Resolution {
            resolver,
            diagnostics,
        }
    }

    /// Resolve `args` and report whether `name` is known, discarding the
    /// resolver.
    pub fn has_option<I, S>(self, args: I, name: &str) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolve(args).resolver.has_option(name)
    }
}

fn advance(phase: &mut Phase, next: Phase) {
    tracing::debug!(from = ?*phase, to = ?next, "Option resolution phase");
    *phase = next;
}

/// A resolver together with the diagnostics recorded while building it
pub struct Resolution {
    pub resolver: OptionResolver,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    pub fn into_parts(self) -> (OptionResolver, Diagnostics) {
        (self.resolver, self.diagnostics)
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("resolver", &self.resolver)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

/// Unified lookup over every option source
pub struct OptionResolver {
    config: ResolverConfig,
    store: OptionStore,
    overrides: Box<dyn OverrideSource>,
}

impl fmt::Debug for OptionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionResolver")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl OptionResolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Resolve with the default configuration and no property layer.
    pub fn from_args<I, S>(args: I) -> Resolution
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ResolverBuilder::new().resolve(args)
    }

    /// One-shot existence check on a command line, with the default
    /// configuration and no property layer.
    pub fn command_line_has_option<I, S>(args: I, name: &str) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ResolverBuilder::new().has_option(args, name)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether `name` is set by any source.
    pub fn has_option(&self, name: &str) -> bool {
        self.store.contains(name)
            || self
                .overrides
                .has_property(&self.config.property_key(name))
    }

    /// Resolved value of `name`: the property layer first, then the stored
    /// value. `None` when no source sets it.
    pub fn value(&self, name: &str) -> Option<String> {
        self.overrides
            .property(&self.config.property_key(name))
            .or_else(|| self.store.get(name).map(str::to_string))
    }

    /// Like [`value`](Self::value), failing when the option is not set.
    pub fn require_value(&self, name: &str) -> Result<String> {
        self.value(name).ok_or_else(|| Error::not_found(name))
    }

    /// Resolved value of `name` split on the configured separator.
    ///
    /// A value containing the separator yields its non-empty, trimmed parts
    /// in order; any other value yields itself as the single element. An
    /// unset option yields an empty vector.
    pub fn values(&self, name: &str) -> Vec<String> {
        self.value(name)
            .map(|value| split_values(&value, self.config.value_separator))
            .unwrap_or_default()
    }

    /// Like [`values`](Self::values), failing when the option is not set.
    pub fn require_values(&self, name: &str) -> Result<Vec<String>> {
        let value = self.require_value(name)?;
        Ok(split_values(&value, self.config.value_separator))
    }

    /// Options held by the resolver, excluding the property layer.
    pub fn options(&self) -> &OptionStore {
        &self.store
    }

    /// Set `name` unless it already holds a value.
    pub fn set_if_absent(&mut self, name: &str, value: &str) -> SetOutcome {
        self.store.set_if_absent(name, value)
    }

    /// Set `name`, replacing any stored value. Returns the replaced value.
    ///
    /// The property layer still outranks the new value.
    pub fn set_overriding(&mut self, name: &str, value: &str) -> Option<String> {
        self.store.set_overriding(name, value)
    }

    fn load_file(&mut self, path: &Path, diagnostics: &mut Diagnostics) {
        if !path.exists() {
            let absolute = std::path::absolute(path).unwrap_or_else(|_| PathBuf::from(path));
            diagnostics.push(Diagnostic::missing_option_file(&absolute));
            return;
        }

        let entries = match load_option_file(path) {
            Ok(entries) => entries,
            Err(e) => {
                diagnostics.push(Diagnostic::option_file_parse_failure(path, &e));
                return;
            }
        };

        tracing::debug!(?path, count = entries.len(), "Loading option file");
        for entry in entries {
            if let SetOutcome::Rejected { existing } =
                self.store.set_if_absent(&entry.name, &entry.value)
            {
                diagnostics.push(Diagnostic::override_conflict(
                    &entry.name,
                    &existing,
                    Some(path),
                ));
            }
        }
    }
}

/// Split a multi-valued option.
pub fn split_values(value: &str, separator: char) -> Vec<String> {
    if !value.contains(separator) {
        return vec![value.to_string()];
    }
    value
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
