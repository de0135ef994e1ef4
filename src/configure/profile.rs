//! Build profiles: how one library's configure script is invoked.

use super::request::EnvironmentInput;
use crate::catalog::registry::canonical_name;
use crate::error::{FfdepsError, Result};
use crate::options::{OptionDef, OptionRegistry};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Flag names that receive each environment input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentFlags {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub build: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub sysroot: Option<String>,
}

impl EnvironmentFlags {
    /// Flag receiving `input`, if this library takes it.
    pub fn flag_for(&self, input: EnvironmentInput) -> Option<&str> {
        match input {
            EnvironmentInput::Prefix => self.prefix.as_deref(),
            EnvironmentInput::Build => self.build.as_deref(),
            EnvironmentInput::Host => self.host.as_deref(),
            EnvironmentInput::Sysroot => self.sysroot.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFile {
    library: String,
    command: String,
    #[serde(default)]
    build_dir: Option<PathBuf>,
    #[serde(default)]
    trailing: Vec<String>,
    #[serde(default)]
    environment: EnvironmentFlags,
    #[serde(default)]
    options: Vec<OptionDef>,
}

/// How to configure one library.
#[derive(Debug, Clone)]
pub struct BuildProfile {
    /// Canonical library name this profile belongs to.
    pub library: String,
    /// Base command, e.g. `./configure`.
    pub command: String,
    /// Directory to run in, relative to the library's checkout.
    pub build_dir: PathBuf,
    /// Fixed flags appended after every caller-supplied flag.
    pub trailing: Vec<String>,
    /// Environment inputs this library accepts, and under which flag.
    pub environment: EnvironmentFlags,
    options: OptionRegistry,
}

impl BuildProfile {
    /// Create a profile with an empty option registry.
    pub fn new(library: &str, command: &str) -> Self {
        Self {
            library: canonical_name(library),
            command: command.to_string(),
            build_dir: PathBuf::from("."),
            trailing: Vec::new(),
            environment: EnvironmentFlags::default(),
            options: OptionRegistry::new(),
        }
    }

    /// Parse a profile from YAML text; `path` is only used in errors.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        let file: ProfileFile =
            serde_yaml::from_str(content).map_err(|e| FfdepsError::CatalogError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let options = OptionRegistry::from_defs(file.options).map_err(|e| {
            FfdepsError::CatalogError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            library: canonical_name(&file.library),
            command: file.command,
            build_dir: file.build_dir.unwrap_or_else(|| PathBuf::from(".")),
            trailing: file.trailing,
            environment: file.environment,
            options,
        })
    }

    pub fn with_options(mut self, options: OptionRegistry) -> Self {
        self.options = options;
        self
    }

    pub fn with_trailing(mut self, trailing: &[&str]) -> Self {
        self.trailing = trailing.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentFlags) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
        self.build_dir = build_dir.into();
        self
    }

    /// Options recognized by this library's build script.
    pub fn options(&self) -> &OptionRegistry {
        &self.options
    }
}
