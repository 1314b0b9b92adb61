//! Declaration file types
//!
//! This module defines the data structures that represent a kubo.yml file: one
//! root command with nested commands.

use serde::{Deserialize, Serialize};

/// A command declaration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CommandConfig {
    /// Command name; the root's name is used in help text only
    pub name: String,

    /// Description for help text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Named flags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<FlagConfig>,

    /// Positional arguments, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ArgumentConfig>,

    /// Child commands
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandConfig>,

    /// Line printed when the command runs, with `${name}` replaced by bound values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,

    /// Add a generated `help` child command
    #[serde(default)]
    pub help: bool,
}

/// A flag declaration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FlagConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Presence alone sets the flag
    #[serde(rename = "bool", default)]
    pub boolean: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A positional argument declaration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArgumentConfig {
    pub name: String,

    /// Collect all remaining positional values (last argument only)
    #[serde(default)]
    pub multiple: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_command() {
        let config: CommandConfig = serde_yaml::from_str("name: basic").unwrap();
        assert_eq!(config.name, "basic");
        assert!(config.flags.is_empty());
        assert!(config.arguments.is_empty());
        assert!(config.commands.is_empty());
        assert!(config.run.is_none());
        assert!(!config.help);
    }

    #[test]
    fn test_deserialize_flag_fields() {
        let yaml = r#"
name: two
aliases: [t]
bool: true
description: the second flag
"#;
        let flag: FlagConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(flag.name, "two");
        assert_eq!(flag.aliases, vec!["t".to_string()]);
        assert!(flag.boolean);
        assert_eq!(flag.description, "the second flag");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<ArgumentConfig, _> = serde_yaml::from_str("name: a\nrequired: true");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let config: CommandConfig = serde_yaml::from_str("name: basic").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("name: basic"));
        assert!(!yaml.contains("flags"));
        assert!(!yaml.contains("run"));
    }
}
