//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::Category;
use crate::configure::BuildEnvironment;

/// ffdeps - third-party dependency manager for FFmpeg builds.
#[derive(Debug, Parser)]
#[command(name = "ffdeps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the FFmpeg source tree (defaults to the current directory)
    #[arg(short, long, global = true, env = "FFDEPS_SOURCE_TREE")]
    pub source_tree: Option<PathBuf>,

    /// Path to config file (overrides <source tree>/ffdeps.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print commands instead of running them
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Show verbose output, including subprocess output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
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
    /// Fetch fresh copies of dependencies
    #[command(visible_alias = "download")]
    Fetch(SelectionArgs),

    /// Update existing dependency checkouts
    Update(SelectionArgs),

    /// Run dependency configure scripts
    Compile(CompileArgs),

    /// List catalog entries
    List(ListArgs),

    /// Show one catalog entry in detail
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Which dependencies a fetch or update covers.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelectionArgs {
    /// Dependency names (case-insensitive)
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub names: Vec<String>,

    /// Every catalog entry, in catalog order
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `compile` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CompileArgs {
    /// Dependency names (case-insensitive)
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Bare configure flag to pass (repeatable, without leading dashes)
    #[arg(long = "enable", value_name = "FLAG")]
    pub flags: Vec<String>,

    /// Keyword configure flag to pass (repeatable)
    #[arg(long = "with", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,

    /// Install prefix
    #[arg(long, env = "FFDEPS_PREFIX")]
    pub prefix: Option<String>,

    /// Build-machine triplet
    #[arg(long, env = "FFDEPS_BUILD")]
    pub build: Option<String>,

    /// Host triplet
    #[arg(long, env = "FFDEPS_HOST")]
    pub host: Option<String>,

    /// Sysroot path
    #[arg(long, env = "FFDEPS_SYSROOT")]
    pub sysroot: Option<String>,
}

impl CompileArgs {
    /// Toolchain inputs given on the command line or through the environment.
    pub fn build_environment(&self) -> BuildEnvironment {
        BuildEnvironment {
            prefix: self.prefix.clone(),
            build: self.build.clone(),
            host: self.host.clone(),
            sysroot: self.sysroot.clone(),
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only entries that can be fetched
    #[arg(long)]
    pub usable: bool,

    /// Only entries of this category (e.g. encoder, protocol)
    #[arg(long)]
    pub category: Option<Category>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Dependency name (case-insensitive)
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
