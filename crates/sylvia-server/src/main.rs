use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use sylvia_config::{ConfigManager, StorageType};
use sylvia_llm::{EchoProvider, GatewayConfig, GeminiProvider, SuggestionProvider};
use sylvia_session::{
    JsonStorage, JsonStorageConfig, MemoryStorage, SessionStorage, SessionStore,
};
use sylvia_steps::StepRegistry;

mod handlers;
mod logging;
mod server;
mod state;

use logging::init_logging;
use server::run_server;
use state::AppState;

#[derive(Parser, Debug, Clone)]
#[command(name = "sylvia-server")]
#[command(about = "Sylvia SRL coaching HTTP server")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Server port (overrides config)
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Gateway API key (overrides config)
    #[arg(long, env = "GEMINI_API_KEY")]
    api_key: Option<String>,

    /// Log level (overrides config)
    #[arg(long, env = "SYLVIA_LOG")]
    log_level: Option<String>,

    /// Config file path
    #[arg(long, env = "SYLVIA_CONFIG", default_value = "~/.sylvia/config.json")]
    config: String,

    /// Keep all state in memory (no files written)
    #[arg(long, default_value = "false")]
    memory: bool,

    /// Skip the demo session prefill
    #[arg(long, default_value = "false")]
    no_demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = sylvia_config::expand_tilde(&cli.config)
        .unwrap_or_else(|| std::path::PathBuf::from(&cli.config));

    if let Err(e) = sylvia_config::init_sylvia_dirs().await {
        eprintln!("Warning: failed to init sylvia directories: {}", e);
    }

    let config_manager = ConfigManager::load(&config_path).await?;
    let mut config = config_manager.get().read().await.clone();

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let log_level = cli.log_level.unwrap_or_else(|| {
        if cli.debug {
            "debug".to_string()
        } else {
            format!("{:?}", config.logging.level).to_lowercase()
        }
    });
    init_logging(&log_level);

    tracing::info!("Starting Sylvia server on port {}", config.server.port);
    tracing::info!("AI gateway enabled: {}", config.ai.enabled);
    tracing::info!("Storage: {:?}", config.storage.storage_type);

    // Wire the AI Gateway: real provider when a key is available,
    // echo fallback otherwise so the rest of the app stays usable.
    let api_key = cli.api_key.or_else(|| config.ai.auth.get_api_key());
    let provider: Arc<dyn SuggestionProvider> = if config.ai.enabled && api_key.is_some() {
        let mut gateway_config = GatewayConfig::new(&config.ai.base_url, &config.ai.model)
            .with_history_window(config.session.history_window)
            .with_timeout(Duration::from_secs(config.ai.timeout_seconds.unwrap_or(60)));
        if let Some(key) = api_key {
            gateway_config = gateway_config.with_api_key(key);
        }
        if let Some(ref identity_file) = config.ai.identity_file {
            match tokio::fs::read_to_string(identity_file).await {
                Ok(identity) => gateway_config = gateway_config.with_identity(identity),
                Err(e) => tracing::warn!(
                    "Identity file {:?} not readable ({}), using built-in fallback",
                    identity_file,
                    e
                ),
            }
        }
        Arc::new(GeminiProvider::new(gateway_config)?)
    } else {
        tracing::warn!("AI gateway not configured, falling back to echo replies");
        Arc::new(EchoProvider::new())
    };

    // Persistence boundary
    let storage: Arc<dyn SessionStorage> = if cli.memory {
        Arc::new(MemoryStorage::new())
    } else {
        match config.storage.storage_type {
            StorageType::Memory => Arc::new(MemoryStorage::new()),
            StorageType::Json => {
                let data_dir = sylvia_config::expand_tilde(&config.storage.data_dir)
                    .unwrap_or_else(sylvia_session::default_storage_path);
                Arc::new(JsonStorage::new(JsonStorageConfig::new(data_dir)).await?)
            }
        }
    };

    // Build the store: restore persisted state when present, otherwise
    // start fresh with the learning path seeded from the registry.
    let registry = StepRegistry::with_default_steps();
    let mut store = SessionStore::new(registry.learning_path())
        .with_max_saved_shown(config.session.max_saved_shown);
    match storage.load().await {
        Ok(Some(persisted)) => {
            tracing::info!("Restored session {}", persisted.session.id);
            store.restore(persisted);
        }
        Ok(None) => {
            if config.session.demo_session && !cli.no_demo {
                store = SessionStore::new(registry.learning_path())
                    .with_max_saved_shown(config.session.max_saved_shown)
                    .with_demo_content();
            }
            tracing::info!("Started fresh session {}", store.session().id);
        }
        Err(e) => {
            tracing::error!("Failed to load persisted state ({}), starting fresh", e);
        }
    }

    let state = AppState::new(store, registry, provider, storage, config);

    run_server(state).await
}
