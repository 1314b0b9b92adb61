//! Flag declarations

/// A named option on a command, bound by a `--name` or `-x` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: String,
    aliases: Vec<String>,
    boolean: bool,
    description: String,
}

impl Flag {
    /// Create a value-taking flag
    pub fn new(name: impl Into<String>) -> Self {
        Flag {
            name: name.into(),
            aliases: Vec::new(),
            boolean: false,
            description: String::new(),
        }
    }

    /// Add an alternate name. Single character aliases can be used as `-x`.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Make this a boolean flag: presence alone binds `"true"`.
    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }

    /// Set the description shown in help text
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_boolean(&self) -> bool {
        self.boolean
    }

    pub fn about(&self) -> &str {
        &self.description
    }

    /// Canonical name followed by every alias
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Display form used in help text, e.g. `-o, --one <value>`
    pub fn signature(&self) -> String {
        let mut shorts = Vec::new();
        let mut longs = Vec::new();
        for name in self.names() {
            if name.chars().count() == 1 {
                shorts.push(format!("-{}", name));
            } else {
                longs.push(format!("--{}", name));
            }
        }
        shorts.extend(longs);

        let mut out = shorts.join(", ");
        if !self.boolean {
            out.push_str(" <value>");
        }
        out
    }
}
