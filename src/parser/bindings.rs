//! Values bound by one parse

use std::collections::HashMap;
use std::fmt;

/// Value bound to a positional argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    /// Exactly one token
    Single(String),
    /// Every remaining positional token, in order
    Multiple(Vec<String>),
}

impl ArgumentValue {
    /// The value of a single-token argument
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::Single(value) => Some(value),
            ArgumentValue::Multiple(_) => None,
        }
    }

    /// All bound tokens; a single value is a one-element slice
    pub fn values(&self) -> &[String] {
        match self {
            ArgumentValue::Single(value) => std::slice::from_ref(value),
            ArgumentValue::Multiple(values) => values,
        }
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values().join(" "))
    }
}

/// Flag and argument values for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    flags: HashMap<String, String>,
    arguments: HashMap<String, ArgumentValue>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a flag, by canonical name
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentValue> {
        self.arguments.get(name)
    }

    pub fn flags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn arguments(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.arguments.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Bind a flag, replacing any earlier value
    pub fn set_flag(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.flags.insert(name.into(), value.into());
    }

    pub fn set_argument(&mut self, name: impl Into<String>, value: String) {
        self.arguments
            .insert(name.into(), ArgumentValue::Single(value));
    }

    /// Append to a collecting argument, creating it when missing
    pub fn push_argument(&mut self, name: &str, value: String) {
        match self
            .arguments
            .entry(name.to_string())
            .or_insert_with(|| ArgumentValue::Multiple(Vec::new()))
        {
            ArgumentValue::Multiple(values) => values.push(value),
            single @ ArgumentValue::Single(_) => {
                let mut values = single.values().to_vec();
                values.push(value);
                *single = ArgumentValue::Multiple(values);
            }
        }
    }

    /// Bind an empty list to a collecting argument that saw no tokens
    pub(crate) fn ensure_multiple(&mut self, name: &str) {
        self.arguments
            .entry(name.to_string())
            .or_insert_with(|| ArgumentValue::Multiple(Vec::new()));
    }
}
