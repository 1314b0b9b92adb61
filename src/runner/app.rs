//! App driver: resolve, parse, dispatch

use crate::command::{Command, CommandTree};
use crate::error::{KuboError, Result};
use crate::parser::{parse, resolve};
use crate::runner::{Context, Streams};

/// A command tree together with the streams its handlers write to
pub struct App {
    tree: CommandTree,
    streams: Streams,
}

impl App {
    /// Create an app from a root command, using the process's standard streams
    pub fn new(root: Command) -> Result<Self> {
        Self::with_streams(root, Streams::default())
    }

    /// Create an app with explicit streams
    pub fn with_streams(root: Command, streams: Streams) -> Result<Self> {
        let tree = CommandTree::new(root)?;
        Ok(Self::from_tree(tree, streams))
    }

    /// Create an app from an already built tree
    pub fn from_tree(tree: CommandTree, streams: Streams) -> Self {
        App { tree, streams }
    }

    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// Add a command under an existing one, e.g. a generated help command
    pub fn tree_mut(&mut self) -> &mut CommandTree {
        &mut self.tree
    }

    pub fn streams_mut(&mut self) -> &mut Streams {
        &mut self.streams
    }

    /// Run the app with the process's arguments, without the program name
    pub fn run_from_env(&mut self) -> Result<()> {
        self.run(std::env::args().skip(1))
    }

    /// Resolve the target command, bind the remaining tokens and run its handler.
    ///
    /// Parse errors are returned before any handler runs. A handler's own
    /// error is returned unchanged as [`KuboError::Handler`].
    pub fn run<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        let (target, remaining) = resolve(self.tree.root(), &tokens);
        log::debug!(
            "resolved '{}' with {} remaining token(s)",
            target.path().join(" "),
            remaining.len()
        );

        let bindings = parse(target, remaining)?;

        let handler = target
            .handler()
            .ok_or_else(|| KuboError::NoHandler(target.path().join(" ")))?;

        log::debug!("dispatching '{}'", target.name());
        let mut ctx = Context::new(target, bindings, &mut self.streams);
        let outcome = handler(&mut ctx);
        drop(ctx);

        // Flush even when the handler failed
        let flushed = self.streams.flush();
        outcome.map_err(KuboError::Handler)?;
        flushed?;
        Ok(())
    }
}
