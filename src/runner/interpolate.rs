//! Variable interpolation for `run` templates
//!
//! Templates reference bound flags and arguments with the `${name}` syntax.

use crate::runner::Context;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]*)\}").expect("variable pattern is a valid regex"))
}

/// Names referenced by `${name}` in a template, in order of appearance
pub fn variables(template: &str) -> Vec<&str> {
    variable_pattern()
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Replace every `${name}` found in `vars`. Unknown names are left as they are.
///
/// Substituted values are not interpolated again.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> String {
    variable_pattern()
        .replace_all(template, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Template variables for every flag and argument declared on the running command.
///
/// Unset boolean flags read `false`, other unbound values are empty, and a
/// collecting argument is joined with single spaces.
pub fn context_vars(ctx: &Context<'_>) -> HashMap<String, String> {
    let command = ctx.command();
    let mut vars = HashMap::new();

    for flag in command.flags() {
        let value = match ctx.flag(flag.name()) {
            Ok(value) => value.to_string(),
            Err(_) if flag.is_boolean() => "false".to_string(),
            Err(_) => String::new(),
        };
        vars.insert(flag.name().to_string(), value);
    }

    for argument in command.arguments() {
        let value = ctx
            .argument(argument.name())
            .map(|value| value.to_string())
            .unwrap_or_default();
        vars.insert(argument.name().to_string(), value);
    }

    vars
}
