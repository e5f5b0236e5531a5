//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands write
//! to a caller-supplied sink so their output can be captured in tests.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod layer;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
