//! Core application infrastructure

pub(crate) mod banner;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod secret;
pub mod store;

pub use crate::app::CoreApp;
pub use cli::{CliConfig, Commands};
pub use config::{AppConfig, DbConnection, FileConfig, UserAuthData};
pub use error::ConfigError;
pub use secret::SecretString;
pub use store::ConfigStore;
