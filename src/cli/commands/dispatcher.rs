//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::registry::VersionFilter;
use crate::table::IdentityTable;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher. `.rtpkit.yml` is looked up in `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Detect(args) => {
                let (table, filter) = self.load_table(cli)?;
                let cmd = super::detect::DetectCommand::new(&table, filter, args.clone());
                cmd.execute(ui)
            }
            Commands::Translate(args) => {
                let (table, _) = self.load_table(cli)?;
                let cmd = super::translate::TranslateCommand::new(&table, args.clone());
                cmd.execute(ui)
            }
            Commands::Lookup(args) => {
                let (table, filter) = self.load_table(cli)?;
                let cmd = super::lookup::LookupCommand::new(&table, filter, args.clone());
                cmd.execute(ui)
            }
            Commands::Variants(args) => {
                let (table, _) = self.load_table(cli)?;
                let cmd = super::variants::VariantsCommand::new(&table, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }

    /// Load configuration, apply command-line overrides and build the
    /// identity table it describes.
    fn load_table(&self, cli: &Cli) -> Result<(Cow<'static, IdentityTable>, VersionFilter)> {
        let config = load_config(&self.working_dir, cli.config.as_deref())?
            .with_overrides(cli.command.generation(), &cli.tables);
        debug!(?config, "Resolved configuration");

        Ok((config.identity_table()?, config.version_filter()))
    }
}
