//! ffdeps - third-party dependency manager for FFmpeg builds.
//!
//! ffdeps keeps a declarative catalog of the optional libraries an FFmpeg
//! build can link against, fetches and updates their sources with the right
//! version-control tool, and synthesizes validated `configure` command lines
//! for the ones it knows how to build.
//!
//! # Modules
//!
//! - [`catalog`] - Dependency descriptors, tool command templates and the embedded catalog
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `ffdeps.yml` loading and settings resolution
//! - [`configure`] - Build profiles and configure command synthesis
//! - [`error`] - Error types and result aliases
//! - [`options`] - Configure option specs and per-library option registries
//! - [`orchestrator`] - Batch fetch, update and compile
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use ffdeps::catalog::Catalog;
//! use ffdeps::configure::{BuildEnvironment, CommandRequest, ConfigCommandBuilder};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let profile = catalog.profile("libx264").unwrap();
//! let request = CommandRequest::new().set("bit-depth", "10");
//! let command = ConfigCommandBuilder::new(profile)
//!     .build(&request, &BuildEnvironment::default())
//!     .unwrap();
//! assert_eq!(command, "./configure --bit-depth=10 --enable-shared --enable-pic");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod configure;
pub mod error;
pub mod options;
pub mod orchestrator;
pub mod shell;
pub mod ui;

pub use error::{FfdepsError, Result};
