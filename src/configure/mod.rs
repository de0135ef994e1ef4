//! Configure command synthesis for buildable libraries.
//!
//! A [`BuildProfile`] pairs a library's base configure command with the
//! [`OptionRegistry`](crate::options::OptionRegistry) of flags it accepts,
//! a mapping for toolchain inputs (prefix, triplets, sysroot) and fixed
//! trailing flags. [`ConfigCommandBuilder`] validates a [`CommandRequest`]
//! against it and renders the command line.
//!
//! # Example
//!
//! ```
//! use ffdeps::configure::{BuildEnvironment, BuildProfile, CommandRequest, ConfigCommandBuilder};
//! use ffdeps::options::{OptionDef, OptionRegistry};
//!
//! let options = OptionRegistry::from_defs([
//!     OptionDef::keyword("bit-depth").values(&["all", "8", "10"]),
//! ])
//! .unwrap();
//! let profile = BuildProfile::new("libx264", "./configure")
//!     .with_options(options)
//!     .with_trailing(&["--enable-shared"]);
//!
//! let request = CommandRequest::new().set("bit-depth", "8");
//! let cmd = ConfigCommandBuilder::new(&profile)
//!     .build(&request, &BuildEnvironment::default())
//!     .unwrap();
//! assert_eq!(cmd, "./configure --bit-depth=8 --enable-shared");
//! ```

pub mod builder;
pub mod profile;
pub mod request;

pub use builder::ConfigCommandBuilder;
pub use profile::{BuildProfile, EnvironmentFlags};
pub use request::{parse_assignment, BuildEnvironment, CommandRequest, EnvironmentInput};
