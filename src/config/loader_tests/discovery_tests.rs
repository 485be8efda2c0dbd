//! Tests for config file discovery from various locations (current dir, user config, fallback).

use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::StreakCardError;

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();

    assert!(config.user.is_none());
    assert!(config.output.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.streak-card.toml", "user = \"octocat\"\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.user.as_deref(), Some("octocat"));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/testuser/.config/streak-card")))
        .with_file(
            "/home/testuser/.config/streak-card/config.toml",
            "output = \"card.svg\"\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.output, Some(PathBuf::from("card.svg")));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.streak-card.toml", "user = \"local\"\n")
        .with_file("/home/user/.config/streak-card/config.toml", "user = \"global\"\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.user.as_deref(), Some("local"));
}

#[test]
fn no_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(config.endpoint.is_none());
}

#[test]
fn load_from_missing_path_is_file_access_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();

    assert!(matches!(err, StreakCardError::FileAccess { .. }));
    assert!(err.is_config_error());
}

#[test]
fn invalid_toml_is_config_file_error() {
    let fs = MockFileSystem::new().with_file("/project/.streak-card.toml", "user = [unclosed\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, StreakCardError::ConfigFile { .. }));
    assert!(err.to_string().contains(".streak-card.toml"));
}

#[test]
fn unknown_key_is_config_file_error() {
    let fs = MockFileSystem::new().with_file("/project/.streak-card.toml", "token = \"x\"\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, StreakCardError::ConfigFile { .. }));
}
