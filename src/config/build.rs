//! Turning declarations into a command tree

use crate::command::{Argument, Command, CommandTree, Flag};
use crate::config::types::CommandConfig;
use crate::config::validate_config;
use crate::error::Result;
use crate::help;
use crate::runner::{context_vars, interpolate};
use std::io::Write;

/// Validate `config` and build the command tree it declares
pub fn build_tree(config: &CommandConfig) -> Result<CommandTree> {
    validate_config(config)?;
    let tree = CommandTree::new(build_command(config))?;
    log::debug!("built command tree with {} command(s)", tree.len());
    Ok(tree)
}

/// Build one command and its children. Commands with a `run` line print it
/// when dispatched; the others have no handler.
pub fn build_command(config: &CommandConfig) -> Command {
    let mut command = Command::new(config.name.clone()).description(config.description.clone());

    for flag in &config.flags {
        let mut declared = Flag::new(flag.name.clone()).description(flag.description.clone());
        for alias in &flag.aliases {
            declared = declared.alias(alias.clone());
        }
        if flag.boolean {
            declared = declared.boolean();
        }
        command = command.flag(declared);
    }

    for argument in &config.arguments {
        let mut declared =
            Argument::new(argument.name.clone()).description(argument.description.clone());
        if argument.multiple {
            declared = declared.multiple();
        }
        command = command.argument(declared);
    }

    for child in &config.commands {
        command = command.subcommand(build_command(child));
    }

    if config.help {
        command = command.subcommand(help::command());
    }

    if let Some(template) = config.run.clone() {
        command = command.handler(move |ctx| {
            let line = interpolate(&template, &context_vars(ctx));
            writeln!(ctx.stdout(), "{}", line)?;
            Ok(())
        });
    }

    command
}
