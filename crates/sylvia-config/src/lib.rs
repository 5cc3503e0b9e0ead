pub mod config;
pub mod manager;

pub use config::{
    AiConfig, AuthSettings, Config, ConfigError, ConfigResult, LogLevel, LoggingConfig,
    ServerConfig, SessionConfig, StorageConfig, StorageType,
};
pub use manager::ConfigManager;

use std::path::PathBuf;

/// Sylvia configuration directory (~/.sylvia)
pub fn sylvia_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sylvia"))
}

/// Default config file path (~/.sylvia/config.json)
pub fn default_config_path() -> Option<PathBuf> {
    sylvia_dir().map(|dir| dir.join("config.json"))
}

/// Default sessions directory (~/.sylvia/sessions)
pub fn default_sessions_dir() -> Option<PathBuf> {
    sylvia_dir().map(|dir| dir.join("sessions"))
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        Some(PathBuf::from(path))
    }
}

/// Create the Sylvia directory tree if missing
pub async fn init_sylvia_dirs() -> ConfigResult<()> {
    if let Some(base) = sylvia_dir() {
        tokio::fs::create_dir_all(&base).await?;
        tokio::fs::create_dir_all(base.join("sessions")).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/.sylvia/config.json");
        assert!(expanded.is_some());
        assert!(!expanded.unwrap().to_string_lossy().starts_with('~'));
    }
}
