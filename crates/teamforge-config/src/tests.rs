//! Tests for TeamForge configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [matching]
        auto_match_on_register = false

        [store]
        path = "data/roster.json"
        pretty = false

        [console]
        banner = false
        filter = "teamforge=debug"
    "#;

    let config = TeamForgeConfig::from_toml_str(toml).unwrap();
    assert!(!config.matching.auto_match_on_register);
    assert!(config.matching.auto_match_on_requirement);
    let store = config.store.as_ref().unwrap();
    assert_eq!(store.path, PathBuf::from("data/roster.json"));
    assert!(!store.pretty);
    assert!(!config.console.banner);
    assert_eq!(config.log_filter(), "teamforge=debug");
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        matching:
          auto_match_on_requirement: false
        store:
          path: roster.json
    "#;

    let config = TeamForgeConfig::from_yaml_str(yaml).unwrap();
    assert!(config.matching.auto_match_on_register);
    assert!(!config.matching.auto_match_on_requirement);
    assert!(config.store.unwrap().pretty);
}

#[test]
fn test_empty_document_is_default() {
    let config = TeamForgeConfig::from_toml_str("").unwrap();
    assert_eq!(config, TeamForgeConfig::default());
    assert!(config.matching.auto_match_on_register);
    assert!(config.console.banner);
    assert_eq!(config.store_path(), None);
    assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
}

#[test]
fn test_empty_store_path_is_invalid() {
    let err = TeamForgeConfig::from_toml_str("[store]\npath = \"\"").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_matching_field_type_fails() {
    let err = TeamForgeConfig::from_toml_str("[matching]\nauto_match_on_register = \"yes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TeamForgeConfig::load("/definitely/not/here/teamforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = TeamForgeConfig::new()
        .with_store_path("out.json")
        .without_auto_match()
        .with_log_filter("teamforge=trace");

    assert_eq!(config.store_path(), Some(Path::new("out.json")));
    assert!(config.store.as_ref().unwrap().pretty);
    assert!(!config.matching.auto_match_on_register);
    assert!(!config.matching.auto_match_on_requirement);
    assert_eq!(config.log_filter(), "teamforge=trace");
}
