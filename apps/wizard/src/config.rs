use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::DEFAULT_TRAIT_LIMIT;
use wizard_core::TraitPolicy;

pub const DEFAULT_CONFIG_FILE: &str = "wizard.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub trait_limit: usize,
    pub enforce_trait_cap: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trait_limit: DEFAULT_TRAIT_LIMIT,
            enforce_trait_cap: false,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn trait_policy(&self) -> TraitPolicy {
        if self.enforce_trait_cap {
            TraitPolicy::Enforced {
                limit: self.trait_limit,
            }
        } else {
            TraitPolicy::Advisory {
                limit: self.trait_limit,
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    trait_limit: Option<usize>,
    enforce_trait_cap: Option<bool>,
    log_filter: Option<String>,
}

/// Defaults, then the config file, then `APP__*` environment overrides.
///
/// An explicitly requested file must exist and parse; the implicit
/// `wizard.toml` is optional.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(explicit_path, |key| std::env::var(key).ok())
}

pub fn load_settings_with(
    explicit_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file_cfg = match explicit_path {
        Some(path) => Some(read_file_settings(path)?),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(raw) => toml::from_str::<FileSettings>(&raw).ok(),
                Err(_) => None,
            }
        }
    };

    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.trait_limit {
            settings.trait_limit = v;
        }
        if let Some(v) = file_cfg.enforce_trait_cap {
            settings.enforce_trait_cap = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("APP__TRAIT_LIMIT") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.trait_limit = parsed;
        }
    }

    if let Some(v) = env("APP__ENFORCE_TRAIT_CAP") {
        if let Some(parsed) = parse_flag(&v) {
            settings.enforce_trait_cap = parsed;
        }
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
