use std::{fs, path::Path, time::Duration};

use actuator::DEFAULT_REQUEST_TIMEOUT;
use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "intersection.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub actuator_base_url: Option<String>,
    pub request_timeout_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            actuator_base_url: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT.as_millis() as u64,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(1))
    }
}

/// Defaults, then the toml file, then environment overrides.
///
/// An explicitly requested file must exist; the default `intersection.toml`
/// is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            parse_settings(&raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?
        }
        None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(raw) => parse_settings(&raw)
                .with_context(|| format!("invalid config file '{DEFAULT_CONFIG_FILE}'"))?,
            Err(_) => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn parse_settings(raw: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(raw)
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(v) = var("HARDWARE_IP") {
        settings.actuator_base_url = Some(v);
    }
    if let Some(v) = var("APP__ACTUATOR_BASE_URL") {
        settings.actuator_base_url = Some(v);
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.request_timeout_ms = parsed;
        }
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
