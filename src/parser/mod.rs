//! Token resolution and binding
//!
//! [`resolve`] finds the command a token list invokes; [`parse`] binds the
//! remaining tokens to that command's flags and arguments.

pub mod bindings;
pub mod resolve;
pub mod tokens;

pub use bindings::*;
pub use resolve::*;
pub use tokens::*;
