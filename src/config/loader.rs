//! Configuration file discovery and loading.

use crate::config::schema::FfdepsConfig;
use crate::error::{FfdepsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the source tree.
pub const CONFIG_FILE_NAME: &str = "ffdeps.yml";

/// Find the source tree by walking up from `start`.
///
/// Returns the nearest directory holding an `ffdeps.yml`, or None.
pub fn find_source_tree(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<FfdepsConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FfdepsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FfdepsError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into FfdepsConfig.
///
/// A document with no content (blank or only comments) yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<FfdepsConfig> {
    let parse_error = |e: serde_yaml::Error| FfdepsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(FfdepsConfig::default());
    }
    serde_yaml::from_value(value).map_err(parse_error)
}

/// Load config for a source tree, with an optional explicit path.
///
/// An explicit path must exist. Without one, `<source_tree>/ffdeps.yml`
/// is read when present and defaults are used otherwise.
pub fn load_config(source_tree: &Path, config_override: Option<&Path>) -> Result<FfdepsConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    let implicit = source_tree.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        load_config_file(&implicit)
    } else {
        tracing::debug!(path = %implicit.display(), "no config file, using defaults");
        Ok(FfdepsConfig::default())
    }
}
