use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::catalog::Language;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_language() -> String {
    "en".to_string()
}
fn default_theme() -> String {
    "terminal-default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: default_theme(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aihe")
            .join("config.toml")
    }

    /// Validate the stored language code, resetting to the default if stale.
    /// Call after deserialization to handle keys written by old versions.
    pub fn normalize_language(&mut self) {
        // Early versions stored full language names instead of codes.
        match self.language.as_str() {
            "english" => self.language = "en".to_string(),
            "finnish" => self.language = "fi".to_string(),
            _ => {}
        }
        if Language::from_code(&self.language).is_err() {
            self.language = default_language();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.theme, "terminal-default");
    }

    #[test]
    fn test_config_serde_defaults_from_partial() {
        let config: Config = toml::from_str("language = \"fi\"").unwrap();
        assert_eq!(config.language, "fi");
        assert_eq!(config.theme, "terminal-default");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.language = "fi".to_string();
        config.theme = "catppuccin-mocha".to_string();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.language, deserialized.language);
        assert_eq!(config.theme, deserialized.theme);
    }

    #[test]
    fn test_normalize_language_valid_code_unchanged() {
        let mut config = Config::default();
        config.language = "fi".to_string();
        config.normalize_language();
        assert_eq!(config.language, "fi");
    }

    #[test]
    fn test_normalize_language_invalid_code_resets() {
        let mut config = Config::default();
        config.language = "sv".to_string();
        config.normalize_language();
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_normalize_language_legacy_names_map_to_codes() {
        let mut config = Config::default();
        config.language = "finnish".to_string();
        config.normalize_language();
        assert_eq!(config.language, "fi");

        config.language = "english".to_string();
        config.normalize_language();
        assert_eq!(config.language, "en");
    }
}
