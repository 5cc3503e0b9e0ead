use crate::config::{Config, ConfigError, ConfigResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Configuration manager: load-or-create, validate, save
#[derive(Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<Config>>,
}

impl ConfigManager {
    /// Load the config file, creating a default one when missing
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        let config = if path.exists() {
            info!("Loading config from {:?}", path);
            let content = tokio::fs::read_to_string(path).await?;
            let content = Self::expand_env_vars(&content)?;
            serde_json::from_str(&content)?
        } else {
            info!("Config file not found, creating default config at {:?}", path);
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let content = serde_json::to_string_pretty(&default_config)?;
            tokio::fs::write(path, &content).await?;
            default_config
        };

        Self::validate(&config)?;

        Ok(Self {
            path: path.to_path_buf(),
            config: Arc::new(RwLock::new(config)),
        })
    }

    /// Load from the default location (~/.sylvia/config.json)
    pub async fn load_default() -> ConfigResult<Self> {
        let config_path = crate::default_config_path().ok_or_else(|| {
            ConfigError::InvalidPath("Could not find home directory".to_string())
        })?;
        Self::load(&config_path).await
    }

    /// Build a manager around an in-memory config (for tests)
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Shared read handle to the config
    pub fn get(&self) -> Arc<RwLock<Config>> {
        Arc::clone(&self.config)
    }

    /// Persist the current config to its file
    pub async fn save(&self) -> ConfigResult<()> {
        let config = self.config.read().await;
        let content = serde_json::to_string_pretty(&*config)?;
        drop(config);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        info!("Config saved to {:?}", self.path);
        Ok(())
    }

    /// Re-read the config from disk
    pub async fn reload(&self) -> ConfigResult<()> {
        if !self.path.exists() {
            return Err(ConfigError::InvalidPath(format!(
                "Config file not found: {:?}",
                self.path
            )));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let content = Self::expand_env_vars(&content)?;
        let new_config: Config = serde_json::from_str(&content)?;
        Self::validate(&new_config)?;

        let mut config = self.config.write().await;
        *config = new_config;
        drop(config);

        info!("Config reloaded from {:?}", self.path);
        Ok(())
    }

    /// Mutate the config and save
    pub async fn update<F>(&self, f: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write().await;
        f(&mut config);
        drop(config);
        self.save().await
    }

    /// Sanity-check a config
    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port cannot be 0".to_string(),
            ));
        }

        if config.session.history_window == 0 {
            return Err(ConfigError::Validation(
                "session.history_window must be greater than 0".to_string(),
            ));
        }

        if config.session.max_saved_shown == 0 {
            return Err(ConfigError::Validation(
                "session.max_saved_shown must be greater than 0".to_string(),
            ));
        }

        if config.ai.enabled && config.ai.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "ai.base_url must be set when the gateway is enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Expand `${VAR}` or `${VAR:-default}` in raw config text
    fn expand_env_vars(content: &str) -> ConfigResult<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let full_match = cap.get(0).unwrap().as_str();
            let var_expr = cap.get(1).unwrap().as_str();

            let (var_name, default_value) = if let Some(pos) = var_expr.find(":-") {
                let (name, rest) = var_expr.split_at(pos);
                (name, Some(&rest[2..]))
            } else {
                (var_expr, None)
            };

            let replacement = match std::env::var(var_name) {
                Ok(val) => val,
                Err(_) => {
                    if let Some(default) = default_value {
                        default.to_string()
                    } else {
                        return Err(ConfigError::EnvVarNotFound(var_name.to_string()));
                    }
                }
            };

            result = result.replace(full_match, &replacement);
        }

        Ok(result)
    }

    /// Path of the backing config file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_creates_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let manager = ConfigManager::load(&config_path).await.unwrap();
        let config = manager.get().read().await.clone();

        assert_eq!(config.server.port, 8087);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.session.max_saved_shown, 10);
        assert!(config_path.exists());
    }

    #[tokio::test]
    async fn test_env_var_expansion() {
        std::env::set_var("SYLVIA_TEST_VAR", "test_value");

        let content = r#"{"key": "${SYLVIA_TEST_VAR}"}"#;
        let expanded = ConfigManager::expand_env_vars(content).unwrap();

        assert!(expanded.contains("test_value"));
    }

    #[tokio::test]
    async fn test_env_var_default_fallback() {
        let content = r#"{"key": "${SYLVIA_MISSING_VAR:-fallback}"}"#;
        let expanded = ConfigManager::expand_env_vars(content).unwrap();

        assert!(expanded.contains("fallback"));
    }

    #[tokio::test]
    async fn test_config_validation() {
        let mut config = Config::default();
        config.server.port = 0;

        assert!(ConfigManager::validate(&config).is_err());

        config.server.port = 8087;
        assert!(ConfigManager::validate(&config).is_ok());
    }
}
