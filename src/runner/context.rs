//! Execution context handed to command handlers
//!
//! The context is a read-only view over the values bound for one invocation,
//! plus the app's I/O streams.

use crate::command::{CommandRef, Flag};
use crate::error::LookupError;
use crate::parser::{ArgumentValue, Bindings};
use crate::runner::Streams;
use std::io::{Read, Write};

/// Per-invocation state passed to a handler
pub struct Context<'a> {
    command: CommandRef<'a>,
    bindings: Bindings,
    streams: &'a mut Streams,
}

impl<'a> Context<'a> {
    pub fn new(command: CommandRef<'a>, bindings: Bindings, streams: &'a mut Streams) -> Self {
        Context {
            command,
            bindings,
            streams,
        }
    }

    /// The command being run
    pub fn command(&self) -> CommandRef<'a> {
        self.command
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Value of a flag. Aliases are accepted and map to the flag's name.
    pub fn flag(&self, name: &str) -> Result<&str, LookupError> {
        let canonical = self
            .command
            .lookup_flag(name)
            .map(Flag::name)
            .unwrap_or(name);
        self.bindings
            .flag(canonical)
            .ok_or_else(|| LookupError::flag(name))
    }

    /// Whether a flag was given. For boolean flags, absent means `false`.
    pub fn is_set(&self, name: &str) -> bool {
        self.flag(name).is_ok()
    }

    /// Value of a positional argument
    pub fn argument(&self, name: &str) -> Result<&ArgumentValue, LookupError> {
        self.bindings
            .argument(name)
            .ok_or_else(|| LookupError::argument(name))
    }

    pub fn stdin(&mut self) -> &mut dyn Read {
        &mut *self.streams.stdin
    }

    pub fn stdout(&mut self) -> &mut dyn Write {
        &mut *self.streams.stdout
    }

    pub fn stderr(&mut self) -> &mut dyn Write {
        &mut *self.streams.stderr
    }
}
