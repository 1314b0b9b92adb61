//! Binding tokens to a command's flags and arguments

use crate::command::CommandRef;
use crate::error::{ParseError, ParseResult};
use crate::parser::Bindings;

/// How a single token is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'t> {
    /// `--name` or `-x`, with the prefix stripped
    Flag(&'t str),
    Positional,
}

fn classify(token: &str) -> Token<'_> {
    if let Some(name) = token.strip_prefix("--") {
        return Token::Flag(name);
    }

    match token.strip_prefix('-') {
        Some(name) if name.chars().count() == 1 => Token::Flag(name),
        // "-", "-12" and "-abc" are values
        _ => Token::Positional,
    }
}

/// Bind `tokens` to the flags and arguments declared on `command`.
///
/// Flags are recognised anywhere, including between the values of a
/// collecting argument. Positional tokens fill arguments in declaration
/// order. A repeated flag keeps its last value.
pub fn parse<S>(command: CommandRef<'_>, tokens: &[S]) -> ParseResult<Bindings>
where
    S: AsRef<str>,
{
    let arguments = command.arguments();
    let mut bindings = Bindings::new();
    let mut next_argument = 0;
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = tokens[cursor].as_ref();

        match classify(token) {
            Token::Flag(name) => {
                let flag = command
                    .lookup_flag(name)
                    .ok_or_else(|| ParseError::UnknownFlag(token.to_string()))?;

                if bindings.flag(flag.name()).is_some() {
                    log::debug!("flag '{}' given again, last value wins", flag.name());
                }

                if flag.is_boolean() {
                    bindings.set_flag(flag.name(), "true");
                    cursor += 1;
                } else {
                    let value = tokens
                        .get(cursor + 1)
                        .ok_or_else(|| ParseError::MissingFlagValue(token.to_string()))?;
                    bindings.set_flag(flag.name(), value.as_ref());
                    cursor += 2;
                }
            }
            Token::Positional => {
                match arguments.get(next_argument) {
                    Some(argument) if argument.is_multiple() => {
                        bindings.push_argument(argument.name(), token.to_string());
                    }
                    Some(argument) => {
                        bindings.set_argument(argument.name(), token.to_string());
                        next_argument += 1;
                    }
                    None => return Err(ParseError::UnexpectedArgument(token.to_string())),
                }
                cursor += 1;
            }
        }
    }

    if let Some(last) = arguments.last().filter(|argument| argument.is_multiple()) {
        bindings.ensure_multiple(last.name());
    }

    log::debug!(
        "bound {} token(s) for command '{}'",
        tokens.len(),
        command.name()
    );
    Ok(bindings)
}
