use clap::{Parser, Subcommand};

use std::path::PathBuf;

use crate::utils::string::parse_string_array;

use super::constants::{
    ENV_API_PREFIX, ENV_AUTH_IDENTIFIER, ENV_AUTH_PASSWORD, ENV_AUTH_TABLE, ENV_CONFIG,
    ENV_DB_DATABASE, ENV_DB_HOST, ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_USERNAME, ENV_DEBUG,
    ENV_HTTP_PORT, ENV_NO_PROFILE, ENV_SECRET_KEY, ENV_SQL_SCRIPTS,
};
use super::secret::SecretString;

#[derive(Parser)]
#[command(name = "silence")]
#[command(version, about = "Silence configuration loader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Ignore the profile config file (~/.silence/silence.json)
    #[arg(long, global = true, env = ENV_NO_PROFILE)]
    pub no_profile: bool,

    /// Show debug messages while Silence is running
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,

    /// Port the API and web server are deployed on
    #[arg(long, short = 'p', global = true, env = ENV_HTTP_PORT)]
    pub http_port: Option<i64>,

    /// URL prefix for all API endpoints (must start with '/')
    #[arg(long, global = true, env = ENV_API_PREFIX)]
    pub api_prefix: Option<String>,

    // Database options
    /// Database host
    #[arg(long, global = true, env = ENV_DB_HOST)]
    pub db_host: Option<String>,

    /// Database port
    #[arg(long, global = true, env = ENV_DB_PORT)]
    pub db_port: Option<i64>,

    /// Database user
    #[arg(long, global = true, env = ENV_DB_USERNAME)]
    pub db_username: Option<String>,

    /// Database password
    #[arg(long, global = true, env = ENV_DB_PASSWORD, hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database (schema) name
    #[arg(long, global = true, env = ENV_DB_DATABASE)]
    pub db_database: Option<String>,

    /// SQL scripts in execution order, as a JSON array or comma-separated list.
    /// Blank entries (e.g. from a trailing comma) are skipped
    #[arg(long, global = true, env = ENV_SQL_SCRIPTS)]
    pub sql_scripts: Option<String>,

    /// Secret key used for signing
    #[arg(long, global = true, env = ENV_SECRET_KEY, hide_env_values = true)]
    pub secret_key: Option<String>,

    // User auth options (all three or none)
    /// Table used for login and register
    #[arg(long, global = true, env = ENV_AUTH_TABLE)]
    pub auth_table: Option<String>,

    /// Column holding the login identifier
    #[arg(long, global = true, env = ENV_AUTH_IDENTIFIER)]
    pub auth_identifier: Option<String>,

    /// Column holding the password hash
    #[arg(long, global = true, env = ENV_AUTH_PASSWORD)]
    pub auth_password: Option<String>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate the configuration, then print a summary (default command)
    Check,
    /// Print a freshly generated value for secret_key
    Keygen,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub no_profile: bool,
    pub debug: bool,
    pub http_port: Option<i64>,
    pub api_prefix: Option<String>,
    pub db_host: Option<String>,
    pub db_port: Option<i64>,
    pub db_username: Option<String>,
    pub db_password: Option<SecretString>,
    pub db_database: Option<String>,
    pub sql_scripts: Option<Vec<String>>,
    pub secret_key: Option<SecretString>,
    pub auth_table: Option<String>,
    pub auth_identifier: Option<String>,
    pub auth_password: Option<String>,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            config: cli.config,
            no_profile: cli.no_profile,
            debug: cli.debug,
            http_port: cli.http_port,
            api_prefix: cli.api_prefix,
            db_host: cli.db_host,
            db_port: cli.db_port,
            db_username: cli.db_username,
            db_password: cli.db_password.map(SecretString::from),
            db_database: cli.db_database,
            sql_scripts: cli.sql_scripts.as_deref().map(parse_string_array),
            secret_key: cli.secret_key.map(SecretString::from),
            auth_table: cli.auth_table,
            auth_identifier: cli.auth_identifier,
            auth_password: cli.auth_password,
        }
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let mut cli = Cli::parse();
    let command = cli.command.take();
    (cli.into(), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> (CliConfig, Option<Commands>) {
        let mut cli = Cli::try_parse_from(args).unwrap();
        let command = cli.command.take();
        (cli.into(), command)
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_overrides() {
        let (config, command) = parse_from(&[
            "silence",
            "check",
            "--http-port",
            "70000",
            "--api-prefix",
            "/api/v2",
            "--db-host",
            "db",
            "--sql-scripts",
            "createDB.sql,populateDB.sql",
            "--secret-key",
            "s3cr3t",
        ]);

        assert_eq!(command, Some(Commands::Check));
        assert_eq!(config.http_port, Some(70000));
        assert_eq!(config.api_prefix.as_deref(), Some("/api/v2"));
        assert_eq!(config.db_host.as_deref(), Some("db"));
        assert_eq!(
            config.sql_scripts,
            Some(vec![
                "createDB.sql".to_string(),
                "populateDB.sql".to_string()
            ])
        );
        assert_eq!(config.secret_key.unwrap().expose(), "s3cr3t");
    }

    #[test]
    fn test_cli_no_profile_and_blank_scripts() {
        let (config, _) = parse_from(&[
            "silence",
            "--no-profile",
            "--sql-scripts",
            "createDB.sql,,populateDB.sql,",
        ]);

        assert!(config.no_profile);
        assert_eq!(
            config.sql_scripts,
            Some(vec![
                "createDB.sql".to_string(),
                "populateDB.sql".to_string()
            ])
        );
    }

    #[test]
    fn test_cli_keygen_command() {
        let (_, command) = parse_from(&["silence", "keygen"]);
        assert_eq!(command, Some(Commands::Keygen));
    }

    #[test]
    fn test_cli_config_debug_redacts_secrets() {
        let config = CliConfig {
            db_password: Some(SecretString::from("pw-123")),
            secret_key: Some(SecretString::from("key-456")),
            ..CliConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("pw-123"));
        assert!(!debug.contains("key-456"));
    }
}
