//! Kubo - a small command tree parser and dispatcher
//!
//! Commands are declared as a tree with flags and positional arguments. An
//! [`App`](runner::App) resolves the command a token list invokes, binds the
//! remaining tokens and runs the command's handler with a
//! [`Context`](runner::Context).
//!
//! ```
//! use kubo::command::{Argument, Command, Flag};
//! use kubo::runner::{App, SharedBuffer, Streams};
//! use std::io::Write;
//!
//! let out = SharedBuffer::new();
//! let root = Command::new("greet")
//!     .flag(Flag::new("loud").alias("l").boolean())
//!     .argument(Argument::new("who"))
//!     .handler(|ctx| {
//!         let who = ctx.argument("who")?.to_string();
//!         let line = if ctx.is_set("loud") { who.to_uppercase() } else { who };
//!         writeln!(ctx.stdout(), "hello, {}", line)?;
//!         Ok(())
//!     });
//!
//! let mut app = App::with_streams(root, Streams::default().with_stdout(out.clone()))?;
//! app.run(["-l", "world"])?;
//! assert_eq!(out.contents(), "hello, WORLD\n");
//! # Ok::<(), kubo::KuboError>(())
//! ```

// Public modules
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod parser;
pub mod runner;
pub mod util;

// Re-export commonly used types
pub use command::{Argument, Command, CommandTree, Flag};
pub use error::{KuboError, Result};
pub use runner::{App, Context, Streams};

/// Current version of Kubo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
