//! Application configuration structures.

use pagehelper_core::{LoggingConfig, PageHelperError, PageInfo, PageRequest};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Pagination defaults.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Renders the configuration as TOML, e.g. to dump the effective settings.
    pub fn to_toml(&self) -> Result<String, PageHelperError> {
        toml::to_string_pretty(self)
            .map_err(|e| PageHelperError::Configuration(format!("Failed to render config: {e}")))
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "pagehelper".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Pagination defaults applied when binding page queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a query omits one.
    pub default_page_size: usize,
    /// Largest page size a query may ask for; larger sizes are clamped.
    pub max_page_size: usize,
    /// Width of the navigation window on returned pages.
    pub navigate_pages: usize,
    /// Whether a count query runs when a query does not say.
    pub default_count: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageRequest::DEFAULT_SIZE,
            max_page_size: PageRequest::MAX_SIZE,
            navigate_pages: PageInfo::DEFAULT_NAVIGATE_PAGES,
            default_count: true,
        }
    }
}

impl PaginationConfig {
    /// Clamps a requested page size to `1..=max_page_size`.
    #[must_use]
    pub fn clamp_page_size(&self, size: usize) -> usize {
        size.clamp(1, self.max_page_size.max(1))
    }
}
