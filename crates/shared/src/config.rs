//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report generation configuration.
    #[serde(default)]
    pub reports: ReportsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Period token used when a report request does not name one.
    #[serde(default = "default_period")]
    pub default_period: String,
    /// Revenue reconciliation rule (`ledger_snapshot` or `settlement_additive`).
    #[serde(default = "default_revenue_basis")]
    pub revenue_basis: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            default_period: default_period(),
            revenue_basis: default_revenue_basis(),
        }
    }
}

fn default_period() -> String {
    "6months".to_string()
}

fn default_revenue_basis() -> String {
    "ledger_snapshot".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "motorlot=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MOTORLOT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
