//! Qualify options CLI
//!
//! Resolves test-run options the way the test runner does and prints the
//! result, so option files and property overrides can be checked by hand.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::OptionContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let context = OptionContext {
        config: cli.config,
        defines: cli.defines,
        use_env: !cli.no_env,
    };

    match cli.command {
        Some(cmd) => execute_command(&context, cmd),
        None => {
            // No command provided - show help hint
            println!("{} Qualify option resolver", "qualify-options".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "qualify-options --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(context: &OptionContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { args } => commands::run_list(context, &args),
        Commands::Get { name, all, args } => commands::run_get(context, &name, all, &args),
        Commands::Has { name, args } => commands::run_has(context, &name, &args),
    }
}
