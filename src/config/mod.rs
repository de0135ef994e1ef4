//! Project configuration for ffdeps.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Merging with command-line inputs in [`settings`]
//!
//! # Example
//!
//! ```
//! use ffdeps::config::{load_config, Settings};
//! use ffdeps::configure::BuildEnvironment;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("ffdeps.yml"), "repository_root: third_party").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let settings = Settings::resolve(temp.path(), config, BuildEnvironment::default());
//! assert_eq!(settings.repository_root, temp.path().join("third_party"));
//! ```

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{find_source_tree, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::FfdepsConfig;
pub use settings::Settings;
