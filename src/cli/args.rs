//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::registry::{Generation, RtpType};

/// rtpkit - Detect RPG Maker runtime packages and translate asset names.
#[derive(Debug, Parser)]
#[command(name = "rtpkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .rtpkit.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra RTP table merged into the built-in one (repeatable)
    #[arg(long = "table", value_name = "PATH", global = true)]
    pub tables: Vec<PathBuf>,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score which runtime packages a directory contains
    Detect(DetectArgs),

    /// Translate an asset name from one runtime package to another
    Translate(TranslateArgs),

    /// List the runtime packages that ship an asset name
    Lookup(LookupArgs),

    /// List known runtime packages
    Variants(VariantsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Generation requested on the command line, if the subcommand takes one.
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Commands::Detect(args) => args.generation,
            Commands::Lookup(args) => args.generation,
            _ => None,
        }
    }
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DetectArgs {
    /// Directory holding the runtime package (Music, CharSet, ... folders)
    pub path: PathBuf,

    /// Only evaluate packages of this generation (2000 or 2003)
    #[arg(short, long)]
    pub generation: Option<Generation>,

    /// Hide packages whose hit ratio is below this value (0.0 - 1.0)
    #[arg(long, value_name = "RATIO", value_parser = parse_ratio)]
    pub min_ratio: Option<f32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `translate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TranslateArgs {
    /// Asset category (Music, CharSet, ...)
    pub category: String,

    /// Asset name as shipped by the source package
    pub name: String,

    /// Package the name comes from
    #[arg(long, value_name = "RTP")]
    pub from: RtpType,

    /// Package to translate into
    #[arg(long, value_name = "RTP")]
    pub to: RtpType,
}

/// Arguments for the `lookup` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LookupArgs {
    /// Asset category (Music, CharSet, ...)
    pub category: String,

    /// Asset name of unknown origin
    pub name: String,

    /// Only consider packages of this generation (2000 or 2003)
    #[arg(short, long)]
    pub generation: Option<Generation>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `variants` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VariantsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

fn parse_ratio(s: &str) -> Result<f32, String> {
    let ratio: f32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("ratio must be between 0.0 and 1.0, got {}", ratio))
    }
}
