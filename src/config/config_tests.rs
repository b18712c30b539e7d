use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_points_at_config_dir() {
    let path = config_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/subtoggle"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_missing_optional_file_is_silent() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.toml"), false);

    assert!(result.warning.is_none());
    assert_eq!(result.config.tooltip.hide_after_ms, 4000);
}

#[test]
fn test_missing_required_file_warns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let result = load_config(Some(path.as_path()));

    let warning = result.warning.expect("missing explicit config should warn");
    assert!(warning.contains("Failed to read"));
    assert!(warning.contains("absent.toml"));
}

#[test]
fn test_valid_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[session]\ncookie_name = \"sid\"\n").unwrap();

    let result = load_config(Some(path.as_path()));

    assert!(result.warning.is_none());
    assert_eq!(result.config.session.cookie_name, "sid");
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[tooltip\nhide_after_ms = ").unwrap();

    let result = load_config(Some(path.as_path()));

    assert!(result.warning.unwrap().contains("Using defaults"));
    assert_eq!(result.config.tooltip.hide_after_ms, 4000);
}
