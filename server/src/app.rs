//! Core application

use anyhow::Result;

use crate::core::banner;
use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::core::store;
use crate::utils::crypto;

pub struct CoreApp {
    pub config: &'static AppConfig,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Keygen) => {
                println!("{}", crypto::generate_secret_key());
                Ok(())
            }
            Some(Commands::Check) | None => {
                let app = Self::init(&cli_config)?;
                banner::print_summary(app.config);
                Ok(())
            }
        }
    }

    /// Load the process-wide configuration; any error aborts startup
    pub fn init(cli: &CliConfig) -> Result<Self> {
        let config = store::load(cli)?;
        if config.debug_enabled {
            tracing::debug!("Debug messages enabled by configuration");
        }
        Ok(Self { config })
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
