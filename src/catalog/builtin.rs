//! Catalog data embedded at compile time, or read from disk.
//!
//! Layout (same for both sources):
//!
//! ```text
//! catalog/
//!   libraries.yml        # version + ordered descriptor table
//!   builds/<lib>.yml     # one build profile per buildable library
//! ```

use super::library::{Category, DefaultPolicy, LibraryDescriptor, LocalPath, SourceLocation};
use super::registry::DescriptorRegistry;
use super::tool::ToolKind;
use super::Catalog;
use crate::configure::BuildProfile;
use crate::error::{FfdepsError, Result};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/catalog");

const LIBRARIES_FILE: &str = "libraries.yml";
const BUILDS_DIR: &str = "builds";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    version: u32,
    libraries: Vec<CatalogEntry>,
}

/// One `libraries:` record. Omitted fields take the descriptor defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    category: Category,
    #[serde(default)]
    switch: String,
    #[serde(default)]
    default: DefaultPolicy,
    #[serde(default)]
    tool: ToolKind,
    #[serde(default)]
    revision: Option<u64>,
    #[serde(default)]
    source: SourceLocation,
    #[serde(default)]
    path: LocalPath,
}

impl CatalogEntry {
    fn into_parts(self) -> (String, LibraryDescriptor) {
        let descriptor = LibraryDescriptor {
            category: self.category,
            switch: self.switch,
            default_policy: self.default,
            tool_kind: self.tool,
            pinned_revision: self.revision,
            source_location: self.source,
            local_path: self.path,
        };
        (self.name, descriptor)
    }
}

/// Load the catalog compiled into the binary.
pub fn load_embedded() -> Result<Catalog> {
    let libraries_path = PathBuf::from("catalog").join(LIBRARIES_FILE);
    let libraries = CATALOG_DIR
        .get_file(LIBRARIES_FILE)
        .ok_or_else(|| FfdepsError::CatalogError {
            path: libraries_path.clone(),
            message: "file missing from embedded catalog".to_string(),
        })?
        .contents_utf8()
        .ok_or_else(|| FfdepsError::CatalogError {
            path: libraries_path.clone(),
            message: "Invalid UTF-8".to_string(),
        })?;

    let mut profiles = Vec::new();
    if let Some(builds) = CATALOG_DIR.get_dir(BUILDS_DIR) {
        for file in builds.files() {
            if !is_yaml(file.path()) {
                continue;
            }
            let path = PathBuf::from("catalog").join(file.path());
            let content = file
                .contents_utf8()
                .ok_or_else(|| FfdepsError::CatalogError {
                    path: path.clone(),
                    message: "Invalid UTF-8".to_string(),
                })?;
            profiles.push((content.to_string(), path));
        }
    }

    assemble(libraries, &libraries_path, profiles)
}

/// Load a catalog directory with the embedded layout from disk.
pub fn load_from_dir(dir: &Path) -> Result<Catalog> {
    let libraries_path = dir.join(LIBRARIES_FILE);
    let libraries = fs::read_to_string(&libraries_path).map_err(|e| FfdepsError::CatalogError {
        path: libraries_path.clone(),
        message: e.to_string(),
    })?;

    let mut profiles = Vec::new();
    let builds = dir.join(BUILDS_DIR);
    if builds.is_dir() {
        let mut paths: Vec<PathBuf> = fs::read_dir(&builds)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| is_yaml(p))
            .collect();
        paths.sort();
        for path in paths {
            let content = fs::read_to_string(&path)?;
            profiles.push((content, path));
        }
    }

    assemble(&libraries, &libraries_path, profiles)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yml" || ext == "yaml")
}

fn assemble(
    libraries: &str,
    libraries_path: &Path,
    profiles: Vec<(String, PathBuf)>,
) -> Result<Catalog> {
    let file: CatalogFile =
        serde_yaml::from_str(libraries).map_err(|e| FfdepsError::CatalogError {
            path: libraries_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut registry = DescriptorRegistry::new();
    for entry in file.libraries {
        let (name, descriptor) = entry.into_parts();
        registry
            .insert(&name, descriptor)
            .map_err(|e| FfdepsError::CatalogError {
                path: libraries_path.to_path_buf(),
                message: e.to_string(),
            })?;
    }

    let mut by_library = HashMap::new();
    for (content, path) in profiles {
        let profile = BuildProfile::from_yaml(&content, &path)?;
        if !registry.contains(&profile.library) {
            return Err(FfdepsError::CatalogError {
                path,
                message: format!("build profile for unknown library '{}'", profile.library),
            });
        }
        if by_library.contains_key(&profile.library) {
            return Err(FfdepsError::CatalogError {
                path,
                message: format!("second build profile for '{}'", profile.library),
            });
        }
        by_library.insert(profile.library.clone(), profile);
    }

    tracing::debug!(
        version = file.version,
        libraries = registry.len(),
        profiles = by_library.len(),
        "loaded catalog"
    );

    Ok(Catalog::new(file.version, registry, by_library))
}
