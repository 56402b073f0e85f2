use super::*;

use std::{collections::HashMap, io::Write};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn defaults_are_advisory_five() {
    let settings = Settings::default();
    assert_eq!(settings.trait_limit, 5);
    assert!(!settings.enforce_trait_cap);
    assert_eq!(settings.trait_policy(), TraitPolicy::Advisory { limit: 5 });
}

#[test]
fn reads_explicit_config_file() {
    let file = config_file("trait_limit = 3\nenforce_trait_cap = true\nlog_filter = \"debug\"\n");
    let settings = load_settings_with(Some(file.path()), env_from(&[])).expect("settings");
    assert_eq!(settings.trait_limit, 3);
    assert!(settings.enforce_trait_cap);
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.trait_policy(), TraitPolicy::Enforced { limit: 3 });
}

#[test]
fn environment_overrides_file() {
    let file = config_file("trait_limit = 3\n");
    let settings = load_settings_with(
        Some(file.path()),
        env_from(&[
            ("APP__TRAIT_LIMIT", "7"),
            ("APP__ENFORCE_TRAIT_CAP", "yes"),
            ("RUST_LOG", "warn"),
            ("APP__LOG_FILTER", "wizard_core=debug"),
        ]),
    )
    .expect("settings");
    assert_eq!(settings.trait_limit, 7);
    assert!(settings.enforce_trait_cap);
    assert_eq!(settings.log_filter, "wizard_core=debug");
}

#[test]
fn malformed_environment_values_are_ignored() {
    let file = config_file("trait_limit = 4\nenforce_trait_cap = true\n");
    let settings = load_settings_with(
        Some(file.path()),
        env_from(&[
            ("APP__TRAIT_LIMIT", "many"),
            ("APP__ENFORCE_TRAIT_CAP", "sometimes"),
        ]),
    )
    .expect("settings");
    assert_eq!(settings.trait_limit, 4);
    assert!(settings.enforce_trait_cap);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = load_settings_with(Some(&path), env_from(&[])).expect_err("missing file");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn invalid_explicit_file_is_an_error() {
    let file = config_file("trait_limit = \"five\"\n");
    let err = load_settings_with(Some(file.path()), env_from(&[])).expect_err("bad file");
    assert!(err.to_string().contains("failed to parse config file"));
}
