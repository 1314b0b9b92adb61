//! Command path resolution

use crate::command::CommandRef;

/// Walk down from `start` while the next token names a child command.
///
/// Returns the deepest command reached and the tokens that were not used as
/// command names. Never fails: when nothing matches, `start` is the target.
pub fn resolve<'a, 't, S>(start: CommandRef<'a>, tokens: &'t [S]) -> (CommandRef<'a>, &'t [S])
where
    S: AsRef<str>,
{
    let mut current = start;
    let mut consumed = 0;

    while let Some(token) = tokens.get(consumed) {
        match current.child(token.as_ref()) {
            Some(child) => {
                log::debug!("descending into command '{}'", child.name());
                current = child;
                consumed += 1;
            }
            None => break,
        }
    }

    (current, &tokens[consumed..])
}
