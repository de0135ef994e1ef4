//! Configure option declarations and validation.
//!
//! Each buildable library owns an [`OptionRegistry`] listing the flags its
//! build script understands. Caller-supplied flags are resolved through it
//! (aliases and leading dashes included) before any command is synthesized.
//!
//! # Example
//!
//! ```
//! use ffdeps::options::{OptionDef, OptionRegistry};
//!
//! let mut options = OptionRegistry::new();
//! options.add_option(OptionDef::flag("quiet").alias("q")).unwrap();
//! options.add_option(OptionDef::keyword("bit-depth").values(&["all", "8", "10"])).unwrap();
//!
//! assert_eq!(options.resolve("-q").unwrap().name, "quiet");
//! assert!(options.is_keyword_argument("bit-depth"));
//! ```

pub mod registry;
pub mod spec;

pub use registry::OptionRegistry;
pub use spec::{normalize_token, OptionDef, OptionSpec};
