//! List resolved options

use colored::Colorize;

use crate::context::OptionContext;
use crate::error::Result;

/// Print every stored option as `name = value`, in name order.
///
/// Properties are not listed; they are only consulted for named lookups.
pub fn run_list(context: &OptionContext, args: &[String]) -> Result<()> {
    let resolution = context.resolve(args)?;
    let options = resolution.resolver.options();

    if options.is_empty() {
        println!("{}", "(no options)".dimmed());
        return Ok(());
    }

    for (name, value) in options.iter() {
        println!("{} = {}", name.green(), value);
    }
    Ok(())
}
