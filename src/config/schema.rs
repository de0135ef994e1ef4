//! Schema for `ffdeps.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::configure::BuildEnvironment;

/// Project configuration, read from `ffdeps.yml` in the source tree.
///
/// Every field has a default, so an empty file is a valid config.
///
/// ```yaml
/// repository_root: deps
/// build_script: configure
/// build:
///   prefix: /usr/local
///   host: x86_64-w64-mingw32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FfdepsConfig {
    /// Where dependency checkouts live, relative to the source tree.
    #[serde(default = "default_repository_root")]
    pub repository_root: PathBuf,

    /// Top-level build script that must exist before any work starts.
    #[serde(default = "default_build_script")]
    pub build_script: PathBuf,

    /// On-disk catalog directory replacing the embedded catalog.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Toolchain inputs forwarded to configure scripts.
    #[serde(default)]
    pub build: BuildEnvironment,
}

fn default_repository_root() -> PathBuf {
    PathBuf::from("deps")
}

fn default_build_script() -> PathBuf {
    PathBuf::from("configure")
}

impl Default for FfdepsConfig {
    fn default() -> Self {
        Self {
            repository_root: default_repository_root(),
            build_script: default_build_script(),
            catalog: None,
            build: BuildEnvironment::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FfdepsConfig::default();
        assert_eq!(config.repository_root, PathBuf::from("deps"));
        assert_eq!(config.build_script, PathBuf::from("configure"));
        assert!(config.catalog.is_none());
        assert_eq!(config.build, BuildEnvironment::default());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: FfdepsConfig = serde_yaml::from_str("repository_root: third_party").unwrap();
        assert_eq!(config.repository_root, PathBuf::from("third_party"));
        assert_eq!(config.build_script, PathBuf::from("configure"));
    }

    #[test]
    fn parses_build_section() {
        let yaml = r#"
build:
  prefix: /opt/ffmpeg
  host: x86_64-w64-mingw32
"#;
        let config: FfdepsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.build.prefix.as_deref(), Some("/opt/ffmpeg"));
        assert_eq!(config.build.host.as_deref(), Some("x86_64-w64-mingw32"));
        assert!(config.build.sysroot.is_none());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_yaml::from_str::<FfdepsConfig>("repo_root: deps").is_err());
        assert!(serde_yaml::from_str::<FfdepsConfig>("build:\n  target: arm").is_err());
    }
}
