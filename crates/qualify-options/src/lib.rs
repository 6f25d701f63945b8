//! Option resolution for the Qualify test runner
//!
//! Gathers named option values from three sources and answers lookups over
//! all of them:
//!
//! - **Property layer**: an injected [`OverrideSource`] queried as
//!   `<prefix><name>`; it outranks everything else
//! - **Command line**: `name=value` tokens, later tokens winning
//! - **Option files**: XML files named by the `option_file` option; they never
//!   replace a value that is already set
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use qualify_options::OptionResolver;
//!
//! let mut properties = HashMap::new();
//! properties.insert("Qbrowser".to_string(), "chrome".to_string());
//!
//! let resolution = OptionResolver::builder()
//!     .overrides(properties)
//!     .resolve(["browser=firefox", "suites=smoke, nightly"]);
//! let options = resolution.resolver;
//!
//! assert_eq!(options.value("browser").as_deref(), Some("chrome"));
//! assert_eq!(options.values("suites"), vec!["smoke", "nightly"]);
//! assert!(resolution.diagnostics.is_empty());
//! ```

pub mod command_line;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod option_file;
pub mod overrides;
pub mod resolver;
pub mod store;

pub use config::ResolverConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use error::{Error, Result};
pub use option_file::OptionEntry;
pub use overrides::{EnvironmentOverrides, Layered, NoOverrides, OverrideSource};
pub use resolver::{OptionResolver, Resolution, ResolverBuilder};
pub use store::{OptionStore, SetOutcome};
