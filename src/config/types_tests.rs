//! Tests for types

use proptest::prelude::*;

use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.map.center_image);
    assert!(!config.map.owner_draw);
    assert!(config.tooltip.auto_show);
}

#[test]
fn test_parse_tooltip_auto_show_false() {
    let toml = r#"
[tooltip]
auto_show = false
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(!config.tooltip.auto_show);
}

#[test]
fn test_empty_map_section_uses_default() {
    let toml = r#"
[map]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(config.map.center_image);
    assert!(!config.map.owner_draw);
}

#[test]
fn test_wrong_type_fails_parse() {
    let toml = r#"
[map]
owner_draw = "sometimes"
"#;
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err());
}

// Any combination of present and missing fields parses, with missing
// fields taking their defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_missing_fields_use_defaults(
        center in prop::option::of(any::<bool>()),
        owner_draw in prop::option::of(any::<bool>()),
        auto_show in prop::option::of(any::<bool>()),
    ) {
        let mut toml_content = String::from("[map]\n");
        if let Some(v) = center {
            toml_content.push_str(&format!("center_image = {}\n", v));
        }
        if let Some(v) = owner_draw {
            toml_content.push_str(&format!("owner_draw = {}\n", v));
        }
        toml_content.push_str("[tooltip]\n");
        if let Some(v) = auto_show {
            toml_content.push_str(&format!("auto_show = {}\n", v));
        }

        let config: Config = toml::from_str(&toml_content).unwrap();

        prop_assert_eq!(config.map.center_image, center.unwrap_or(true));
        prop_assert_eq!(config.map.owner_draw, owner_draw.unwrap_or(false));
        prop_assert_eq!(config.tooltip.auto_show, auto_show.unwrap_or(true));
    }
}
