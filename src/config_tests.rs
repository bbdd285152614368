//! Tests for config loading

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use super::*;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_missing_file_uses_defaults_silently() {
    let dir = TempDir::new().unwrap();

    let result = load_config_from(&dir.path().join("absent.toml"));

    assert!(result.warning.is_none());
    assert!(result.config.map.center_image);
    assert!(!result.config.map.owner_draw);
}

#[test]
fn test_valid_file_is_loaded() {
    let (_dir, path) = write_config(
        r#"
[map]
center_image = false
owner_draw = true
"#,
    );

    let result = load_config_from(&path);

    assert!(result.warning.is_none());
    assert!(!result.config.map.center_image);
    assert!(result.config.map.owner_draw);
    assert!(result.config.tooltip.auto_show);
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let (_dir, path) = write_config("[map\ncenter_image = false");

    let result = load_config_from(&path);

    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Ignoring "), "got: {}", warning);
    assert!(warning.contains("config.toml"), "got: {}", warning);
    assert!(!warning.contains('\n'), "status line warning spans lines: {:?}", warning);
    assert!(result.config.map.center_image);
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();

    let result = load_config_from(dir.path());

    assert!(result.warning.unwrap().starts_with("Could not read "));
}

#[test]
fn test_config_path_consistency() {
    let path1 = get_config_path();
    let path2 = get_config_path();

    assert_eq!(path1, path2, "Config path should be consistent");

    let path_str = path1.to_string_lossy();
    assert!(
        path_str.ends_with("imagemap/config.toml") || path_str.ends_with("imagemap\\config.toml"),
        "Config path should end with imagemap/config.toml, got: {}",
        path_str
    );
}

// Malformed TOML never panics and always yields the defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[map\ncenter_image = true",        // Missing closing bracket
            "[map]\ncenter_image = yes",        // Not a boolean literal
            "[map]\n center_image",             // Missing value
            "map]\ncenter_image = true",        // Missing opening bracket
            "[tooltip]\nauto_show = \"true",    // Unterminated string
        ])
    ) {
        let (_dir, path) = write_config(malformed);

        let result = load_config_from(&path);

        prop_assert!(result.warning.is_some());
        prop_assert!(result.config.map.center_image);
        prop_assert!(result.config.tooltip.auto_show);
    }
}
