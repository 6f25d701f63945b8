//! Existence check for one option

use crate::context::OptionContext;
use crate::error::Result;

/// Print `true` or `false`.
pub fn run_has(context: &OptionContext, name: &str, args: &[String]) -> Result<()> {
    let resolution = context.resolve(args)?;
    println!("{}", resolution.resolver.has_option(name));
    Ok(())
}
