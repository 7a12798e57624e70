//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use pagehelper_core::PageHelperError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "PAGEHELPER_ENVIRONMENT";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables such as `PAGEHELPER__PAGINATION__MAX_PAGE_SIZE`
    pub fn new(config_dir: impl Into<String>) -> Result<Self, PageHelperError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, PageHelperError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place if the new one fails to
    /// load or validate.
    pub async fn reload(&self) -> Result<(), PageHelperError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, PageHelperError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!(error = %e, "No .env file loaded");
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        info!(environment = %environment, "Loading configuration");

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!(path = %path, "Loading config file");
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("PAGEHELPER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_page_helper_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_page_helper_error)?;
        app_config.app.environment = environment;

        if let Err(errors) = ConfigValidator::validate(&app_config) {
            let message = format_validation_errors(&errors);
            warn!(%message, "Rejected configuration");
            return Err(PageHelperError::Configuration(message));
        }

        Ok(app_config)
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_page_helper_error(err: ConfigError) -> PageHelperError {
    PageHelperError::Configuration(err.to_string())
}
