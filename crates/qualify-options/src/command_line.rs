//! Parsing of `name=value` command-line assignments

/// Split a raw token into an option name and value.
///
/// The first `=` separates the name from the value; any further `=` belong to
/// the value. Tokens without `=`, or with nothing before it, are not
/// assignments. An empty name could never be looked up, so `=value` is
/// dropped rather than stored under `""`.
pub fn parse_assignment(token: &str) -> Option<(&str, &str)> {
    let (name, value) = token.split_once('=')?;
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}

/// Recognised assignments among `tokens`, in command-line order.
pub fn assignments<'a, I>(tokens: I) -> impl Iterator<Item = (&'a str, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().filter_map(|token| {
        let parsed = parse_assignment(token);
        if parsed.is_none() {
            tracing::debug!(token, "Ignoring command-line token without assignment");
        }
        parsed
    })
}
