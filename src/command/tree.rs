//! Arena holding a frozen command tree
//!
//! Every node lives in one `Vec` and is addressed by a [`CommandId`]. Parents
//! own the ids of their children; children keep the id of their parent.

use crate::command::{Argument, Command, Flag, Handler};
use crate::error::{DeclarationError, DeclarationResult};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Stable handle of a command inside its [`CommandTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(usize);

impl CommandId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    command: Command,
    parent: Option<CommandId>,
    children: Vec<CommandId>,
    /// Every flag name and alias mapped to the flag's position in `command.flags`
    flag_lookup: HashMap<String, usize>,
}

/// A validated, immutable-in-practice tree of commands
#[derive(Debug)]
pub struct CommandTree {
    nodes: Vec<Node>,
}

impl CommandTree {
    /// Build a tree from a root command and all its nested subcommands
    pub fn new(root: Command) -> DeclarationResult<Self> {
        validate_command(&root)?;

        let mut tree = CommandTree { nodes: Vec::new() };
        tree.insert(None, root);
        Ok(tree)
    }

    pub fn root_id(&self) -> CommandId {
        CommandId(0)
    }

    pub fn root(&self) -> CommandRef<'_> {
        CommandRef {
            tree: self,
            id: self.root_id(),
        }
    }

    pub fn get(&self, id: CommandId) -> Option<CommandRef<'_>> {
        (id.0 < self.nodes.len()).then_some(CommandRef { tree: self, id })
    }

    /// Number of commands in the tree, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add `child` (and its nested subcommands) under `parent`
    pub fn add_child(&mut self, parent: CommandId, child: Command) -> DeclarationResult<CommandId> {
        let parent_ref = self
            .get(parent)
            .ok_or(DeclarationError::UnknownCommand(parent.0))?;

        if parent_ref.child(&child.name).is_some() {
            return Err(DeclarationError::DuplicateCommand {
                parent: parent_ref.name().to_string(),
                name: child.name.clone(),
            });
        }
        validate_command(&child)?;

        Ok(self.insert(Some(parent), child))
    }

    /// Look up a command by its path of names below the root
    pub fn find(&self, path: &[&str]) -> Option<CommandRef<'_>> {
        path.iter()
            .try_fold(self.root(), |current, name| current.child(name))
    }

    fn insert(&mut self, parent: Option<CommandId>, mut command: Command) -> CommandId {
        let subcommands = std::mem::take(&mut command.subcommands);
        let id = CommandId(self.nodes.len());

        let mut flag_lookup = HashMap::new();
        for (index, flag) in command.flags.iter().enumerate() {
            for name in flag.names() {
                flag_lookup.insert(name.to_string(), index);
            }
        }

        self.nodes.push(Node {
            command,
            parent,
            children: Vec::new(),
            flag_lookup,
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }

        for child in subcommands {
            self.insert(Some(id), child);
        }

        id
    }
}

/// Check a command and its nested subcommands before they join a tree
fn validate_command(command: &Command) -> DeclarationResult<()> {
    if command.name.is_empty() {
        return Err(DeclarationError::EmptyName("command"));
    }

    let mut flag_names = HashSet::new();
    for flag in &command.flags {
        for name in flag.names() {
            if name.is_empty() {
                return Err(DeclarationError::EmptyName("flag"));
            }
            if !flag_names.insert(name) {
                return Err(DeclarationError::DuplicateFlag {
                    command: command.name.clone(),
                    name: name.to_string(),
                });
            }
        }
    }

    let mut argument_names = HashSet::new();
    let last = command.arguments.len().saturating_sub(1);
    for (position, argument) in command.arguments.iter().enumerate() {
        if argument.name().is_empty() {
            return Err(DeclarationError::EmptyName("argument"));
        }
        if !argument_names.insert(argument.name()) {
            return Err(DeclarationError::DuplicateArgument {
                command: command.name.clone(),
                name: argument.name().to_string(),
            });
        }
        if argument.is_multiple() && position != last {
            return Err(DeclarationError::MultipleNotLast {
                command: command.name.clone(),
                name: argument.name().to_string(),
            });
        }
    }

    let mut child_names = HashSet::new();
    for child in &command.subcommands {
        if !child_names.insert(child.name.as_str()) {
            return Err(DeclarationError::DuplicateCommand {
                parent: command.name.clone(),
                name: child.name.clone(),
            });
        }
        validate_command(child)?;
    }

    Ok(())
}

/// Borrowed view of one command in a tree
#[derive(Clone, Copy)]
pub struct CommandRef<'a> {
    tree: &'a CommandTree,
    id: CommandId,
}

impl<'a> CommandRef<'a> {
    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.id.0]
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn tree(&self) -> &'a CommandTree {
        self.tree
    }

    pub fn name(&self) -> &'a str {
        &self.node().command.name
    }

    pub fn description(&self) -> &'a str {
        &self.node().command.description
    }

    pub fn flags(&self) -> &'a [Flag] {
        &self.node().command.flags
    }

    pub fn arguments(&self) -> &'a [Argument] {
        &self.node().command.arguments
    }

    pub fn parent(&self) -> Option<CommandRef<'a>> {
        self.node().parent.map(|id| CommandRef {
            tree: self.tree,
            id,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = CommandRef<'a>> + 'a {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| CommandRef { tree, id })
    }

    /// Child with exactly this name
    pub fn child(&self, name: &str) -> Option<CommandRef<'a>> {
        self.children().find(|child| child.name() == name)
    }

    /// Find the flag declared under `name`, which may be an alias
    pub fn lookup_flag(&self, name: &str) -> Option<&'a Flag> {
        let node = self.node();
        node.flag_lookup
            .get(name)
            .map(|&index| &node.command.flags[index])
    }

    pub fn has_handler(&self) -> bool {
        self.node().command.handler.is_some()
    }

    pub(crate) fn handler(&self) -> Option<&'a Handler> {
        self.node().command.handler.as_ref()
    }

    /// Names from the root down to this command
    pub fn path(&self) -> Vec<&'a str> {
        let mut path = vec![self.name()];
        let mut current = self.parent();
        while let Some(command) = current {
            path.push(command.name());
            current = command.parent();
        }
        path.reverse();
        path
    }
}

impl fmt::Debug for CommandRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRef")
            .field("id", &self.id)
            .field("path", &self.path())
            .finish()
    }
}

impl PartialEq for CommandRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for CommandRef<'_> {}
