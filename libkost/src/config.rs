//! Configuration management for Kostkita

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub session: SessionConfig,
    pub ai: Option<AiConfig>,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the saved session file (one serialized User)
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: bool,
    /// Model used for description generation
    pub model: String,
    /// Model used for Maps-grounded place lookup
    pub maps_model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format for listing commands
    pub format: String,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from the default location, falling back to the
    /// built-in defaults when no config file exists yet
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default_config())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            session: SessionConfig {
                path: "~/.local/share/kostkita/session.json".to_string(),
            },
            ai: Some(AiConfig {
                enabled: true,
                model: "gemini-3-flash-preview".to_string(),
                maps_model: "gemini-2.5-flash".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                timeout_seconds: 30,
            }),
            defaults: DefaultsConfig {
                format: "text".to_string(),
            },
        }
    }

    /// Expanded session file path
    pub fn session_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.session.path).to_string())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("KOSTKITA_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("kostkita").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("kostkita"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.defaults.format, "text");
        assert!(config.session.path.ends_with("session.json"));

        let ai = config.ai.expect("default config enables AI");
        assert!(ai.enabled);
        assert_eq!(ai.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml_str = r#"
            [session]
            path = "/tmp/kost-session.json"

            [defaults]
            format = "json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.path, "/tmp/kost-session.json");
        assert!(config.ai.is_none());
        assert_eq!(config.defaults.format, "json");
    }

    #[test]
    fn test_parse_config_with_ai_section() {
        let toml_str = r#"
            [session]
            path = "/tmp/s.json"

            [ai]
            enabled = true
            model = "gemini-3-flash-preview"
            maps_model = "gemini-2.5-flash"
            api_key_env = "MY_KEY"
            timeout_seconds = 10

            [defaults]
            format = "text"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        let ai = config.ai.unwrap();
        assert_eq!(ai.maps_model, "gemini-2.5-flash");
        assert_eq!(ai.timeout_seconds, 10);
    }

    #[test]
    fn test_session_path_expands_tilde() {
        let config = Config::default_config();
        let path = config.session_path();
        assert!(!path.to_string_lossy().contains('~'));
    }
}
