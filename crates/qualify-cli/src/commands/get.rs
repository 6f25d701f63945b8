//! Print the resolved value of one option

use crate::context::OptionContext;
use crate::error::{CliError, Result};

/// Print the value of `name`, or each of its parts with `all`.
pub fn run_get(context: &OptionContext, name: &str, all: bool, args: &[String]) -> Result<()> {
    let resolution = context.resolve(args)?;
    let resolver = resolution.resolver;

    if !resolver.has_option(name) {
        return Err(CliError::user(format!(
            "Option '{}' is not set. Pass {}=<value> or define {}.",
            name,
            name,
            resolver.config().property_key(name)
        )));
    }

    if all {
        for part in resolver.require_values(name)? {
            println!("{}", part);
        }
    } else {
        println!("{}", resolver.require_value(name)?);
    }
    Ok(())
}
