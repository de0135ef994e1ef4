//! Error types for ffdeps operations.
//!
//! This module defines [`FfdepsError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-library problems inside a batch (unknown name, unusable descriptor,
//!   failed subprocess) are reported as typed outcomes, not as `Err`
//! - Option errors stop the configure command for one library only
//! - Use `anyhow::Error` (via `FfdepsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ffdeps operations.
#[derive(Debug, Error)]
pub enum FfdepsError {
    /// Dependency name is not in the catalog.
    #[error("Unknown dependency: {name}")]
    UnknownDependency { name: String },

    /// Descriptor lacks what is needed to fetch or build it.
    #[error("Dependency '{name}' is not usable: {reason}")]
    UnusableDescriptor { name: String, reason: String },

    /// Two catalog entries share a name.
    #[error("Duplicate dependency in catalog: {name}")]
    DuplicateDependency { name: String },

    /// Option name or alias registered twice.
    #[error("Duplicate option or alias: {name}")]
    DuplicateOption { name: String },

    /// Option token does not resolve to any registered option.
    #[error("Unknown option: {token}")]
    UnknownOption { token: String },

    /// Option exists but was used as the wrong kind of argument.
    #[error("Option '{token}' cannot be used as a {expected} argument")]
    InvalidArgumentUsage { token: String, expected: String },

    /// Keyword option value is outside its declared set.
    #[error("Invalid value '{value}' for option '{option}' (allowed: {allowed})")]
    InvalidOptionValue {
        option: String,
        value: String,
        allowed: String,
    },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Command launch was refused because the batch was cancelled.
    #[error("Cancelled before running: {command}")]
    Cancelled { command: String },

    /// Top-level build script missing from the source tree.
    #[error("Build script not found: {path}")]
    BuildScriptMissing { path: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Catalog data is malformed or inconsistent.
    #[error("Invalid catalog at {path}: {message}")]
    CatalogError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FfdepsError {
    /// Whether this error comes from validating a configure option.
    pub fn is_option_error(&self) -> bool {
        matches!(
            self,
            FfdepsError::UnknownOption { .. }
                | FfdepsError::InvalidArgumentUsage { .. }
                | FfdepsError::InvalidOptionValue { .. }
        )
    }
}

/// Result type alias for ffdeps operations.
pub type Result<T> = std::result::Result<T, FfdepsError>;
