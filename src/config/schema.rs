//! Declaration file validation
//!
//! Structural rules (unique names, collecting argument last) are enforced by
//! the command tree itself; this module checks what only the file format adds.

use crate::config::types::CommandConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::runner::variables;

/// Validate a command declaration and all of its children
pub fn validate_config(config: &CommandConfig) -> ConfigResult<()> {
    validate_command(config)?;

    for child in &config.commands {
        validate_config(child)?;
    }

    Ok(())
}

/// Validate a single command
pub fn validate_command(config: &CommandConfig) -> ConfigResult<()> {
    // Flags and arguments share one template namespace
    if let Some(argument) = config
        .arguments
        .iter()
        .find(|a| config.flags.iter().any(|f| f.name == a.name))
    {
        return Err(ConfigError::Invalid(format!(
            "command '{}' declares '{}' as both a flag and an argument",
            config.name, argument.name
        )));
    }

    if let Some(template) = &config.run {
        for name in variables(template) {
            let declared = config.flags.iter().any(|f| f.name == name)
                || config.arguments.iter().any(|a| a.name == name);
            if !declared {
                return Err(ConfigError::UndefinedVariable {
                    command: config.name.clone(),
                    name: name.to_string(),
                });
            }
        }
    }

    if config.help && config.commands.iter().any(|c| c.name == crate::help::HELP_COMMAND) {
        return Err(ConfigError::Invalid(format!(
            "command '{}' sets help: true and also declares a 'help' command",
            config.name
        )));
    }

    Ok(())
}
