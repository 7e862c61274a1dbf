//! Integration tests for Settings config loading.
//!
//! These tests run with temp directories for the local layer only; a global
//! config on the machine running them would be layered underneath.

use std::fs;

use tempfile::TempDir;

use linktree::application::ApplicationError;
use linktree::config::{local_config_path, OutputFormat, Settings};

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "format = \"preorder\"\ncheck = true\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.format, OutputFormat::Preorder);
    assert!(settings.check);
}

#[test]
fn given_no_local_config_when_load_then_succeeds() {
    let dir = TempDir::new().unwrap();
    assert!(Settings::load(Some(dir.path())).is_ok());
}

#[test]
fn given_malformed_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "format = [").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains(".linktree.toml"));
}

#[test]
fn given_unknown_format_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "format = \"sideways\"\n").unwrap();

    assert!(matches!(
        Settings::load(Some(dir.path())),
        Err(ApplicationError::Config { .. })
    ));
}
