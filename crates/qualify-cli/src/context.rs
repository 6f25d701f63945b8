//! Option sources shared by every command
//!
//! Turns the global flags into a configured resolver run: the resolver
//! configuration file, `-D` property definitions, and optionally the process
//! environment as a lower property layer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use colored::Colorize;
use qualify_options::{
    Diagnostics, EnvironmentOverrides, Layered, NoOverrides, OptionResolver, OverrideSource,
    Resolution, ResolverConfig, Severity,
};

use crate::error::Result;

/// Everything needed to resolve options besides the raw tokens
#[derive(Debug, Clone, Default)]
pub struct OptionContext {
    pub config: Option<PathBuf>,
    pub defines: Vec<(String, String)>,
    pub use_env: bool,
}

impl OptionContext {
    fn resolver_config(&self) -> Result<ResolverConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!(?path, "Loading resolver config");
                Ok(ResolverConfig::load(path)?)
            }
            None => Ok(ResolverConfig::default()),
        }
    }

    fn overrides(&self) -> Box<dyn OverrideSource> {
        let defines: BTreeMap<String, String> = self.defines.iter().cloned().collect();
        if self.use_env {
            Box::new(Layered::new(defines, EnvironmentOverrides))
        } else {
            Box::new(Layered::new(defines, NoOverrides))
        }
    }

    /// Resolve `args` and print any diagnostics to stderr.
    pub fn resolve(&self, args: &[String]) -> Result<Resolution> {
        let resolution = OptionResolver::builder()
            .config(self.resolver_config()?)
            .overrides(self.overrides())
            .resolve(args);
        report_diagnostics(&resolution.diagnostics);
        Ok(resolution)
    }
}

/// Print diagnostics as `warning: ...` / `error: ...` lines on stderr.
pub fn report_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        let label = match diagnostic.severity() {
            Severity::Warning => "warning:".yellow().bold(),
            Severity::Error => "error:".red().bold(),
        };
        eprintln!("{} {}", label, diagnostic.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(defines: &[(&str, &str)]) -> OptionContext {
        OptionContext {
            config: None,
            defines: defines
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            use_env: false,
        }
    }

    #[test]
    fn defines_act_as_properties() {
        let resolution = context(&[("Qa", "defined")])
            .resolve(&["a=token".to_string()])
            .unwrap();
        assert_eq!(resolution.resolver.value("a").as_deref(), Some("defined"));
    }

    #[test]
    fn later_define_of_same_key_wins() {
        let resolution = context(&[("Qa", "1"), ("Qa", "2")]).resolve(&[]).unwrap();
        assert_eq!(resolution.resolver.value("a").as_deref(), Some("2"));
    }

    #[test]
    fn config_file_changes_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("resolver.toml");
        std::fs::write(&config, "property_prefix = \"P\"\n").unwrap();

        let mut ctx = context(&[("Pa", "defined"), ("Qb", "ignored")]);
        ctx.config = Some(config);
        let resolver = ctx.resolve(&[]).unwrap().resolver;

        assert_eq!(resolver.value("a").as_deref(), Some("defined"));
        assert!(!resolver.has_option("b"));
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("resolver.toml");
        std::fs::write(&config, "value_separator = \"::\"\n").unwrap();

        let mut ctx = context(&[]);
        ctx.config = Some(config);
        assert!(ctx.resolve(&[]).is_err());
    }

    #[test]
    fn missing_config_file_is_a_library_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(&[]);
        ctx.config = Some(dir.path().join("absent.toml"));

        let err = ctx.resolve(&[]).unwrap_err();
        assert!(
            matches!(
                err,
                crate::error::CliError::Options(qualify_options::Error::Io { .. })
            ),
            "got {err:?}"
        );
    }
}
