//! Command declarations from YAML
//!
//! This module handles parsing of kubo.yml declaration files, validation of
//! their templates, and building a command tree from them.

pub mod build;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use build::*;
pub use parse::*;
pub use schema::*;
pub use types::*;
