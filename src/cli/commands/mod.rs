//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Fetch, update and compile share
//! their setup (settings, build script check, catalog) through [`batch`].

pub mod batch;
pub mod compile;
pub mod completions;
pub mod dispatcher;
pub mod fetch;
pub mod list;
pub mod show;
pub mod update;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
