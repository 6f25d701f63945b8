//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Qualify options - Inspect how test-run options resolve
///
/// Options come from `name=value` tokens, from the XML option files listed in
/// `option_file=<path>[,<path>...]`, and from properties (`-D` definitions and
/// environment variables named `<prefix><name>`), which win over both.
#[derive(Parser, Debug)]
#[command(name = "qualify-options")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Resolver configuration file (TOML)
    #[arg(short, long, global = true, env = "QUALIFY_OPTIONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Define a property, key including the prefix (e.g. -D Qbrowser=chrome)
    #[arg(
        short = 'D',
        long = "define",
        value_name = "KEY=VALUE",
        global = true,
        value_parser = parse_define
    )]
    pub defines: Vec<(String, String)>,

    /// Do not read properties from environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every option set by the command line or option files
    ///
    /// Examples:
    ///   qualify-options list browser=firefox
    ///   qualify-options list option_file=defaults.xml,local.xml
    List {
        /// Raw option tokens (name=value)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the resolved value of an option
    Get {
        /// Option name
        name: String,

        /// Split the value on the separator and print one part per line
        #[arg(long)]
        all: bool,

        /// Raw option tokens (name=value)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print whether an option is set by any source
    Has {
        /// Option name
        name: String,

        /// Raw option tokens (name=value)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn parse_define(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
