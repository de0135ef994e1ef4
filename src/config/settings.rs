//! Effective settings for one invocation.
//!
//! Command-line flags (and their environment variables, which clap folds
//! into the same values) win over `ffdeps.yml`, which wins over defaults.

use crate::config::schema::FfdepsConfig;
use crate::configure::BuildEnvironment;
use crate::error::{FfdepsError, Result};
use std::path::{Path, PathBuf};

/// Resolved paths and toolchain inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_tree: PathBuf,
    /// Absolute checkout root.
    pub repository_root: PathBuf,
    /// Absolute path of the top-level build script.
    pub build_script: PathBuf,
    /// Catalog directory override, if any.
    pub catalog_dir: Option<PathBuf>,
    pub build: BuildEnvironment,
}

impl Settings {
    /// Combine a loaded config with command-line build inputs.
    ///
    /// Relative paths in the config are taken relative to `source_tree`.
    pub fn resolve(source_tree: &Path, config: FfdepsConfig, cli_build: BuildEnvironment) -> Self {
        let source_tree = absolute(source_tree);
        Self {
            repository_root: source_tree.join(&config.repository_root),
            build_script: source_tree.join(&config.build_script),
            catalog_dir: config.catalog.map(|dir| source_tree.join(dir)),
            build: cli_build.or(&config.build),
            source_tree,
        }
    }

    /// Fail unless the top-level build script exists.
    pub fn ensure_build_script(&self) -> Result<()> {
        if self.build_script.is_file() {
            Ok(())
        } else {
            Err(FfdepsError::BuildScriptMissing {
                path: self.build_script.clone(),
            })
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn paths_are_relative_to_source_tree() {
        let temp = TempDir::new().unwrap();
        let config = FfdepsConfig {
            catalog: Some(PathBuf::from("my-catalog")),
            ..Default::default()
        };

        let settings = Settings::resolve(temp.path(), config, BuildEnvironment::default());
        assert_eq!(settings.repository_root, temp.path().join("deps"));
        assert_eq!(settings.build_script, temp.path().join("configure"));
        assert_eq!(settings.catalog_dir, Some(temp.path().join("my-catalog")));
    }

    #[test]
    fn absolute_config_paths_are_kept() {
        let temp = TempDir::new().unwrap();
        let elsewhere = temp.path().join("elsewhere");
        let config = FfdepsConfig {
            repository_root: elsewhere.clone(),
            ..Default::default()
        };

        let settings = Settings::resolve(Path::new("/src/ffmpeg"), config, BuildEnvironment::default());
        assert_eq!(settings.repository_root, elsewhere);
    }

    #[test]
    fn cli_build_inputs_override_config() {
        let config = FfdepsConfig {
            build: BuildEnvironment {
                prefix: Some("/usr/local".to_string()),
                host: Some("x86_64-w64-mingw32".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = BuildEnvironment {
            prefix: Some("/opt/ffmpeg".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(Path::new("/src"), config, cli);
        assert_eq!(settings.build.prefix.as_deref(), Some("/opt/ffmpeg"));
        assert_eq!(settings.build.host.as_deref(), Some("x86_64-w64-mingw32"));
        assert!(settings.build.sysroot.is_none());
    }

    #[test]
    fn relative_source_tree_becomes_absolute() {
        let settings = Settings::resolve(
            Path::new("ffmpeg"),
            FfdepsConfig::default(),
            BuildEnvironment::default(),
        );
        assert!(settings.source_tree.is_absolute());
        assert!(settings.repository_root.ends_with("ffmpeg/deps"));
    }

    #[test]
    fn ensure_build_script() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::resolve(
            temp.path(),
            FfdepsConfig::default(),
            BuildEnvironment::default(),
        );

        let err = settings.ensure_build_script().unwrap_err();
        assert!(matches!(err, FfdepsError::BuildScriptMissing { .. }));

        fs::write(temp.path().join("configure"), "#!/bin/sh\n").unwrap();
        settings.ensure_build_script().unwrap();
    }
}
