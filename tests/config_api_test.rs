//! Integration tests for config module public API.

use ffdeps::config::{load_config, FfdepsConfig, Settings, CONFIG_FILE_NAME};
use ffdeps::configure::BuildEnvironment;
use ffdeps::FfdepsError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = FfdepsConfig::default();
    assert_eq!(config.repository_root, PathBuf::from("deps"));
    assert_eq!(CONFIG_FILE_NAME, "ffdeps.yml");
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"
repository_root: third_party
build_script: configure
catalog: my-catalog
build:
  prefix: /usr/local
  build: x86_64-pc-linux-gnu
  host: x86_64-w64-mingw32
  sysroot: /opt/mingw
"#,
    )
    .unwrap();

    let config = load_config(temp.path(), None).unwrap();
    let cli = BuildEnvironment {
        sysroot: Some("/opt/other-sysroot".to_string()),
        ..Default::default()
    };
    let settings = Settings::resolve(temp.path(), config, cli);

    assert_eq!(settings.repository_root, temp.path().join("third_party"));
    assert_eq!(settings.catalog_dir, Some(temp.path().join("my-catalog")));
    assert_eq!(settings.build.prefix.as_deref(), Some("/usr/local"));
    assert_eq!(settings.build.build.as_deref(), Some("x86_64-pc-linux-gnu"));
    assert_eq!(settings.build.sysroot.as_deref(), Some("/opt/other-sysroot"));

    assert!(matches!(
        settings.ensure_build_script(),
        Err(FfdepsError::BuildScriptMissing { .. })
    ));
    fs::write(temp.path().join("configure"), "").unwrap();
    assert!(settings.ensure_build_script().is_ok());
}

#[test]
fn custom_build_script_name() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "build_script: build/configure.sh").unwrap();
    fs::create_dir_all(temp.path().join("build")).unwrap();
    fs::write(temp.path().join("build").join("configure.sh"), "").unwrap();

    let config = load_config(temp.path(), None).unwrap();
    let settings = Settings::resolve(temp.path(), config, BuildEnvironment::default());
    assert!(settings.ensure_build_script().is_ok());
}
