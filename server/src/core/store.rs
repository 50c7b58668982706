//! Load-once configuration store
//!
//! [`ConfigStore`] holds a single validated [`AppConfig`]. It is written exactly
//! once and read lock-free afterwards. The process-wide instance behind [`load`]
//! and [`get`] is what the binary uses; tests build their own stores.

use std::sync::OnceLock;

use super::cli::CliConfig;
use super::config::AppConfig;
use super::error::ConfigError;

static STORE: ConfigStore = ConfigStore::new();

#[derive(Debug)]
pub struct ConfigStore {
    cell: OnceLock<AppConfig>,
}

impl ConfigStore {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Load configuration from all sources and keep it.
    ///
    /// Fails with [`ConfigError::AlreadyInitialized`] if this store was loaded before.
    pub fn load(&self, cli: &CliConfig) -> Result<&AppConfig, ConfigError> {
        if self.cell.get().is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }
        self.install(AppConfig::load(cli)?)
    }

    /// Keep an already built configuration
    pub fn install(&self, config: AppConfig) -> Result<&AppConfig, ConfigError> {
        self.cell
            .set(config)
            .map_err(|_| ConfigError::AlreadyInitialized)?;
        tracing::debug!("Configuration installed");
        self.get()
    }

    /// The loaded configuration, or [`ConfigError::NotInitialized`]
    pub fn get(&self) -> Result<&AppConfig, ConfigError> {
        self.cell.get().ok_or(ConfigError::NotInitialized)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the process-wide configuration (call once at startup)
pub fn load(cli: &CliConfig) -> Result<&'static AppConfig, ConfigError> {
    STORE.load(cli)
}

/// The process-wide configuration loaded by [`load`]
pub fn get() -> Result<&'static AppConfig, ConfigError> {
    STORE.get()
}
