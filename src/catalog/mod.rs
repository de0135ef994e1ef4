//! Dependency catalog.
//!
//! The catalog is the single declarative source of truth for every optional
//! library the toolchain can be built against:
//! - [`library`] describes one dependency
//! - [`tool`] maps each tool kind to its fetch/update commands
//! - [`registry`] holds descriptors by canonical name
//! - [`builtin`] loads the embedded catalog (or an on-disk override)
//!
//! # Example
//!
//! ```
//! use ffdeps::catalog::Catalog;
//!
//! let catalog = Catalog::embedded().unwrap();
//! let bs2b = catalog.registry().lookup("libbs2b").unwrap();
//! assert_eq!(
//!     bs2b.fetch_command().to_string(),
//!     "svn co -r 175 https://svn.code.sf.net/p/bs2b/code/trunk libbs2b"
//! );
//! ```

pub mod builtin;
pub mod library;
pub mod registry;
pub mod tool;

pub use library::{
    describe_gaps, Category, DefaultPolicy, LibraryDescriptor, LocalPath, SourceLocation,
    UsabilityGap,
};
pub use registry::{canonical_name, DescriptorRegistry};
pub use tool::{Invocation, ToolKind};

use crate::configure::BuildProfile;
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Loaded catalog: descriptors plus the build profiles of compilable libraries.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: u32,
    registry: DescriptorRegistry,
    profiles: HashMap<String, BuildProfile>,
}

impl Catalog {
    pub fn new(
        version: u32,
        registry: DescriptorRegistry,
        profiles: HashMap<String, BuildProfile>,
    ) -> Self {
        Self {
            version,
            registry,
            profiles,
        }
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        builtin::load_embedded()
    }

    /// A catalog directory on disk, same layout as the embedded one.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        builtin::load_from_dir(dir)
    }

    /// Load from `dir` if given, otherwise the embedded catalog.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn registry(&self) -> &DescriptorRegistry {
        &self.registry
    }

    /// Build profile for a library, matched case-insensitively.
    pub fn profile(&self, name: &str) -> Option<&BuildProfile> {
        self.profiles.get(&canonical_name(name))
    }

    /// Add or replace a build profile.
    pub fn insert_profile(&mut self, profile: BuildProfile) {
        self.profiles.insert(profile.library.clone(), profile);
    }
}
