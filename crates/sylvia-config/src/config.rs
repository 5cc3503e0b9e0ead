use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: String,
    pub server: ServerConfig,
    pub ai: AiConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            server: ServerConfig::default(),
            ai: AiConfig::default(),
            storage: StorageConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8087,
            host: "127.0.0.1".to_string(),
            cors: true,
        }
    }
}

/// AI Gateway settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    #[serde(flatten)]
    pub auth: AuthSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// Path to the identity (system instruction) file; a built-in
    /// fallback text is used when the file is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_file: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-flash-lite-latest".to_string(),
            auth: AuthSettings::ApiKey {
                env: "GEMINI_API_KEY".to_string(),
            },
            timeout_seconds: Some(60),
            identity_file: None,
        }
    }
}

/// Authentication settings for the AI Gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "auth", rename_all = "snake_case")]
pub enum AuthSettings {
    /// API key read from an environment variable
    ApiKey { env: String },
    /// No authentication
    None,
}

impl Default for AuthSettings {
    fn default() -> Self {
        AuthSettings::None
    }
}

impl AuthSettings {
    /// Resolve the API key from the environment, if configured
    pub fn get_api_key(&self) -> Option<String> {
        match self {
            AuthSettings::ApiKey { env } => std::env::var(env).ok(),
            AuthSettings::None => None,
        }
    }
}

/// Session persistence backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Memory,
    Json,
}

impl Default for StorageType {
    fn default() -> Self {
        StorageType::Json
    }
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    pub storage_type: StorageType,
    /// Data directory; `~` is expanded
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::default(),
            data_dir: "~/.sylvia/sessions".to_string(),
        }
    }
}

/// Session behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Most recent saved snapshots shown in the listing
    pub max_saved_shown: usize,
    /// Chat history window sent to the model
    pub history_window: usize,
    /// Prefill the first session with demo content
    pub demo_session: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_saved_shown: 10,
            history_window: 10,
            demo_session: true,
        }
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
