//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! configuration and identity table once and hands them to the subcommand.

pub mod completions;
pub mod detect;
pub mod dispatcher;
pub mod lookup;
pub mod translate;
pub mod variants;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
