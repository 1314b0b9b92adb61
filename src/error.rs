//! Error types for Kubo

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Kubo operations
pub type Result<T> = std::result::Result<T, KuboError>;

/// Main error type for Kubo
#[derive(Error, Debug)]
pub enum KuboError {
    /// The tokens could not be bound to the resolved command
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The resolved command is a pure grouping node
    #[error("command '{0}' has nothing to run")]
    NoHandler(String),

    /// Error returned by a command handler, passed through as is
    #[error(transparent)]
    Handler(anyhow::Error),

    /// Invalid command declaration
    #[error("Declaration error: {0}")]
    Declaration(#[from] DeclarationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl KuboError {
    /// The error returned by the handler, if this is one.
    pub fn handler_error(&self) -> Option<&anyhow::Error> {
        match self {
            KuboError::Handler(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors raised while binding tokens to flags and arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("flag '{0}' requires a value")]
    MissingFlagValue(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// What kind of binding a lookup asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Flag,
    Argument,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Flag => f.write_str("flag"),
            BindingKind::Argument => f.write_str("argument"),
        }
    }
}

/// Errors raised by context lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: BindingKind, name: String },
}

impl LookupError {
    pub fn flag(name: &str) -> Self {
        LookupError::NotFound {
            kind: BindingKind::Flag,
            name: name.to_string(),
        }
    }

    pub fn argument(name: &str) -> Self {
        LookupError::NotFound {
            kind: BindingKind::Argument,
            name: name.to_string(),
        }
    }
}

/// Contract violations in a command declaration, caught when a command joins a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),

    #[error("command '{parent}' already has a child named '{name}'")]
    DuplicateCommand { parent: String, name: String },

    #[error("flag name or alias '{name}' is declared twice on command '{command}'")]
    DuplicateFlag { command: String, name: String },

    #[error("argument '{name}' is declared twice on command '{command}'")]
    DuplicateArgument { command: String, name: String },

    #[error("no command with id {0} in this tree")]
    UnknownCommand(usize),

    #[error("argument '{name}' on command '{command}' collects multiple values but is not the last argument")]
    MultipleNotLast { command: String, name: String },
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Command '{command}' uses undefined variable '{name}' in run")]
    UndefinedVariable { command: String, name: String },

    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised by the value conversion helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("invalid {target} value '{value}': {reason}")]
    Invalid {
        value: String,
        target: &'static str,
        reason: String,
    },

    #[error("expected a single value, got {0}")]
    NotSingle(usize),
}

/// Specialized result type for parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Specialized result type for declarations
pub type DeclarationResult<T> = std::result::Result<T, DeclarationError>;

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for value conversions
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
