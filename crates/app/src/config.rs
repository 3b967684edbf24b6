//! Application configuration
//!
//! Every setting can come from a flag, an environment variable or a `.env` file.

use std::path::PathBuf;

use clap::Args;

/// Dasher application configuration.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Persistence settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Where carts, orders and the catalog live.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the persisted cart and orders
    #[arg(long, env = "DASHER_STORAGE_DIR", default_value = ".dasher", global = true)]
    pub storage_dir: PathBuf,

    /// YAML catalog of restaurants, categories and menu items
    #[arg(long, env = "DASHER_CATALOG", default_value = "catalog.yml", global = true)]
    pub catalog: PathBuf,
}

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}
