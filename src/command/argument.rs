//! Positional argument declarations

/// A positional value, bound by declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    multiple: bool,
    description: String,
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Argument {
            name: name.into(),
            multiple: false,
            description: String::new(),
        }
    }

    /// Collect every remaining positional token. Only the last argument may do this.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn about(&self) -> &str {
        &self.description
    }

    /// Display form used in usage lines, e.g. `<file>` or `<rest>...`
    pub fn signature(&self) -> String {
        if self.multiple {
            format!("<{}>...", self.name)
        } else {
            format!("<{}>", self.name)
        }
    }
}
