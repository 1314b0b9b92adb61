//! Command dispatch
//!
//! This module owns the app driver, the per-invocation context handed to
//! handlers, and the I/O streams they share.

pub mod app;
pub mod context;
pub mod interpolate;
pub mod streams;

// Re-export main types
pub use app::*;
pub use context::*;
pub use interpolate::*;
pub use streams::*;
