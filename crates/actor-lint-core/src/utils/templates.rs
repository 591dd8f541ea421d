//! Positional message templates.

/// Fills `{0}`, `{1}`, ... placeholders in `template` with `args`.
///
/// Placeholders without a matching argument are left as written.
///
/// # Example
///
/// ```
/// use actor_lint_core::utils::render;
///
/// let msg = render("Record '{0}' is missing {1}", &["Doodad", "[DataContract]"]);
/// assert_eq!(msg, "Record 'Doodad' is missing [DataContract]");
/// ```
#[must_use]
pub fn render(template: &str, args: &[&str]) -> String {
    let capacity = template.len() + args.iter().map(|a| a.len()).sum::<usize>();
    let mut output = String::with_capacity(capacity);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                output.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_placeholders_in_any_order() {
        assert_eq!(render("{1} then {0}", &["a", "b"]), "b then a");
    }

    #[test]
    fn leaves_unmatched_placeholders() {
        assert_eq!(render("'{0}' and '{3}'", &["x"]), "'x' and '{3}'");
        assert_eq!(render("{not a slot}", &["x"]), "{not a slot}");
    }

    #[test]
    fn argument_braces_are_not_reinterpreted() {
        assert_eq!(render("{0}!", &["{1}"]), "{1}!");
    }
}
