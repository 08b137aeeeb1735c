//! TOML-based application configuration.
//!
//! Stored at `~/.config/taskmind/config.toml`. Currently a single
//! `[advisor]` section controlling the optional classifier backend; a
//! missing file yields defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Default emotion-classification model identifier.
pub const DEFAULT_MODEL: &str = "cardiffnlp/twitter-roberta-base-emotion-multilabel-latest";

/// Advisory engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Whether to attempt loading a classifier backend at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Remote inference endpoint base URL. Absent means no backend is
    /// attempted and the advisor runs heuristic-only.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Model identifier requested from the endpoint.
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token for the endpoint (optional).
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: None,
            model: default_model(),
            api_token: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl Config {
    /// Path of the configuration file.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/taskmind"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be parsed, or if the
    /// default config cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value does not fit the
    /// field's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        let mut current = &mut json;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            let next = current
                .get_mut(part)
                .ok_or_else(|| invalid("unknown key".to_string()))?;
            if parts.peek().is_none() {
                *next = coerce(next, value).map_err(|m| invalid(m))?;
                break;
            }
            current = next;
        }

        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        self.save()
    }
}

/// Coerce a string input to the JSON type currently held by the field.
fn coerce(existing: &serde_json::Value, value: &str) -> Result<serde_json::Value, String> {
    use serde_json::Value;
    match existing {
        Value::Bool(_) => value
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|e| e.to_string()),
        Value::Number(_) => value
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .map_err(|e| e.to_string()),
        // Nullable string fields accept "null" to clear
        Value::Null | Value::String(_) => Ok(if value == "null" {
            Value::Null
        } else {
            Value::String(value.to_string())
        }),
        _ => Err("cannot set a structured value".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.advisor.enabled);
        assert!(config.advisor.endpoint.is_none());
        assert_eq!(config.advisor.model, DEFAULT_MODEL);
        assert!(config.advisor.api_token.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[advisor]\nenabled = false\n").unwrap();
        assert!(!config.advisor.enabled);
        assert_eq!(config.advisor.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.advisor.enabled);
    }

    #[test]
    fn test_get_by_path() {
        let config = Config::default();
        assert_eq!(config.get("advisor.enabled"), Some("true".to_string()));
        assert_eq!(config.get("advisor.model"), Some(DEFAULT_MODEL.to_string()));
        assert_eq!(config.get("advisor.bogus"), None);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = Config::default();
        config.advisor.endpoint = Some("https://api-inference.huggingface.co".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.advisor.endpoint, config.advisor.endpoint);
    }
}
