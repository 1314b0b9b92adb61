//! Generated help command
//!
//! [`command`] builds an ordinary `help` command. Added as the child of any
//! command, it prints help for that parent.
//!
//! ```
//! use kubo::command::Command;
//!
//! let complex = Command::new("complex")
//!     .description("some complex command")
//!     .subcommand(kubo::help::command());
//! ```

use crate::command::{Command, CommandRef};
use colored::Colorize;
use std::io::Write;

/// Name the help command is registered under
pub const HELP_COMMAND: &str = "help";

/// A `help` command describing its parent (or itself when it is the root)
pub fn command() -> Command {
    Command::new(HELP_COMMAND)
        .description("show help for this command")
        .handler(|ctx| {
            let command = ctx.command();
            let target = command.parent().unwrap_or(command);
            let text = render(target);
            ctx.stdout().write_all(text.as_bytes())?;
            Ok(())
        })
}

/// Usage line, e.g. `app remote add [flags] <name> <urls>...`
pub fn usage(command: CommandRef<'_>) -> String {
    let mut parts = vec![command.path().join(" ")];
    if command.children().next().is_some() {
        parts.push("<command>".to_string());
    }
    if !command.flags().is_empty() {
        parts.push("[flags]".to_string());
    }
    parts.extend(command.arguments().iter().map(|a| a.signature()));
    parts.join(" ")
}

/// Help text for a command, built from its declarations
pub fn render(command: CommandRef<'_>) -> String {
    let mut out = String::new();

    if command.description().trim().is_empty() {
        out.push_str(command.name());
    } else {
        out.push_str(&format!("{} - {}", command.name(), command.description().trim()));
    }
    out.push('\n');

    out.push_str(&format!("\n{} {}\n", "Usage:".bold(), usage(command)));

    let commands: Vec<(String, &str)> = command
        .children()
        .map(|child| (child.name().to_string(), child.description()))
        .collect();
    push_section(&mut out, "Commands:", &commands);

    let flags: Vec<(String, &str)> = command
        .flags()
        .iter()
        .map(|flag| (flag.signature(), flag.about()))
        .collect();
    push_section(&mut out, "Flags:", &flags);

    let arguments: Vec<(String, &str)> = command
        .arguments()
        .iter()
        .map(|argument| (argument.signature(), argument.about()))
        .collect();
    push_section(&mut out, "Arguments:", &arguments);

    out
}

fn push_section(out: &mut String, title: &str, rows: &[(String, &str)]) {
    if rows.is_empty() {
        return;
    }

    out.push_str(&format!("\n{}\n", title.bold()));
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, about) in rows {
        if about.trim().is_empty() {
            out.push_str(&format!("  {}\n", left));
        } else {
            out.push_str(&format!("  {:width$}  {}\n", left, about.trim(), width = width));
        }
    }
}
