//! CLI interface of the `kubo` binary
//!
//! This module parses the binary's own options and hands the remaining tokens
//! to a command tree loaded from a declaration file.

pub mod app;

// Re-export main types
pub use app::*;
