//! Error types for Kostkita

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KostError>;

#[derive(Error, Debug)]
pub enum KostError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("AI service error: {0}")]
    Ai(#[from] AiError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl KostError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KostError::InvalidInput(_) => 3,
            KostError::Ai(AiError::NotConfigured) => 2,
            KostError::Ai(_) => 1,
            KostError::Config(_) => 1,
            KostError::Session(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI service is not configured (set [ai] in config and the API key env var)")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned an error: {0}")]
    Api(String),
}
