//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Import reconciliation defaults.
    #[serde(default)]
    pub import: ImportSettings,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default switches for bulk account imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImportSettings {
    /// Turn collisions with existing codes into updates instead of rejections.
    #[serde(default)]
    pub overwrite_existing: bool,
    /// Check declared parent codes against the containment rules.
    #[serde(default = "default_validate_hierarchy")]
    pub validate_hierarchy: bool,
}

fn default_validate_hierarchy() -> bool {
    true
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            overwrite_existing: false,
            validate_hierarchy: default_validate_hierarchy(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "puc=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `PUC_`-prefixed environment variables using `__` as the nesting
    /// separator (e.g. `PUC_IMPORT__OVERWRITE_EXISTING=true`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("PUC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
