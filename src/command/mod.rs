//! Command declarations
//!
//! A command tree is declared with [`Command`] builders, nested with
//! [`Command::subcommand`], and frozen into a [`CommandTree`] which validates
//! every node and indexes its flags.

pub mod argument;
pub mod flag;
pub mod tree;

pub use argument::*;
pub use flag::*;
pub use tree::*;

use crate::runner::Context;
use std::fmt;

/// Function invoked when a command is dispatched
pub type Handler = Box<dyn Fn(&mut Context<'_>) -> anyhow::Result<()>>;

/// A node of the command tree, before it is added to a [`CommandTree`]
pub struct Command {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) flags: Vec<Flag>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) subcommands: Vec<Command>,
    pub(crate) handler: Option<Handler>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            description: String::new(),
            flags: Vec::new(),
            arguments: Vec::new(),
            subcommands: Vec::new(),
            handler: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Declare the next positional argument
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Nest a child command. The parent link is set when the tree is built.
    pub fn subcommand(mut self, command: Command) -> Self {
        self.subcommands.push(command);
        self
    }

    /// Set the function run when this command is the resolved target
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Context<'_>) -> anyhow::Result<()> + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("flags", &self.flags)
            .field("arguments", &self.arguments)
            .field("subcommands", &self.subcommands)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
