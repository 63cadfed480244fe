//! Command-line interface for rtpkit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, DetectArgs, LookupArgs, TranslateArgs, VariantsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
