use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::utils::file::{expand_path, profile_path};

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, PORT_RANGE, SECRET_KEY_MIN_RECOMMENDED_LEN,
};
use super::error::ConfigError;
use super::secret::SecretString;

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Database connection section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DbConnectionFileConfig {
    pub host: Option<String>,
    pub port: Option<i64>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub database: Option<String>,
}

/// Login/register table section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UserAuthFileConfig {
    pub table: Option<String>,
    pub identifier: Option<String>,
    pub password: Option<String>,
}

/// File-based configuration (JSON)
///
/// Keys follow the snake_case field names; the legacy upper-case names
/// (`DB_CONN`, `HTTP_PORT`, ...) are accepted as aliases.
#[derive(Default, Deserialize)]
pub struct FileConfig {
    #[serde(alias = "DEBUG_ENABLED")]
    pub debug_enabled: Option<bool>,
    #[serde(alias = "DB_CONN")]
    pub db_connection: Option<DbConnectionFileConfig>,
    #[serde(alias = "SQL_SCRIPTS")]
    pub sql_scripts: Option<Vec<String>>,
    #[serde(alias = "HTTP_PORT")]
    pub http_port: Option<i64>,
    #[serde(alias = "API_PREFIX")]
    pub api_prefix: Option<String>,
    #[serde(alias = "USER_AUTH_DATA")]
    pub user_auth_data: Option<UserAuthFileConfig>,
    #[serde(alias = "SECRET_KEY")]
    pub secret_key: Option<SecretString>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

// Unknown keys may hold misspelled secrets, so only their names are printed
impl fmt::Debug for FileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileConfig")
            .field("debug_enabled", &self.debug_enabled)
            .field("db_connection", &self.db_connection)
            .field("sql_scripts", &self.sql_scripts)
            .field("http_port", &self.http_port)
            .field("api_prefix", &self.api_prefix)
            .field("user_auth_data", &self.user_auth_data)
            .field("secret_key", &self.secret_key)
            .field("extra", &self.unknown_fields())
            .finish()
    }
}

impl FileConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Keys the file set that no field recognised (typos, removed settings)
    pub fn unknown_fields(&self) -> Vec<&str> {
        match &self.extra {
            serde_json::Value::Object(map) => map.keys().map(|k| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        let keys = self.unknown_fields();
        if !keys.is_empty() {
            tracing::warn!(
                fields = %keys.join(", "),
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    pub fn merge(&mut self, other: FileConfig) {
        if other.debug_enabled.is_some() {
            self.debug_enabled = other.debug_enabled;
        }

        if let Some(db) = other.db_connection {
            let current = self
                .db_connection
                .get_or_insert_with(DbConnectionFileConfig::default);
            if db.host.is_some() {
                current.host = db.host;
            }
            if db.port.is_some() {
                current.port = db.port;
            }
            if db.username.is_some() {
                current.username = db.username;
            }
            if db.password.is_some() {
                current.password = db.password;
            }
            if db.database.is_some() {
                current.database = db.database;
            }
        }

        // The script list is replaced as a whole; execution order belongs to one layer
        if other.sql_scripts.is_some() {
            self.sql_scripts = other.sql_scripts;
        }
        if other.http_port.is_some() {
            self.http_port = other.http_port;
        }
        if other.api_prefix.is_some() {
            self.api_prefix = other.api_prefix;
        }

        if let Some(auth) = other.user_auth_data {
            let current = self
                .user_auth_data
                .get_or_insert_with(UserAuthFileConfig::default);
            if auth.table.is_some() {
                current.table = auth.table;
            }
            if auth.identifier.is_some() {
                current.identifier = auth.identifier;
            }
            if auth.password.is_some() {
                current.password = auth.password;
            }
        }

        if other.secret_key.is_some() {
            self.secret_key = other.secret_key;
        }
    }
}

// =============================================================================
// Final Config Structs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConnection {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub database: String,
}

/// Table and columns used for both login and register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAuthData {
    pub table: String,
    pub identifier: String,
    pub password: String,
}

/// Final merged application configuration
///
/// Built once at startup and never mutated; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub debug_enabled: bool,
    pub db_connection: DbConnection,
    /// Script file names in execution order
    pub sql_scripts: Vec<String>,
    pub http_port: u16,
    pub api_prefix: String,
    pub user_auth_data: Option<UserAuthData>,
    pub secret_key: SecretString,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.silence/silence.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self, ConfigError> {
        let profile = if cli.no_profile {
            None
        } else {
            profile_path(APP_DOT_FOLDER, CONFIG_FILE_NAME)
        };
        Self::load_with_profile(cli, profile.as_deref())
    }

    /// Same as [`AppConfig::load`] with an explicit profile config path
    pub fn load_with_profile(
        cli: &CliConfig,
        profile: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(path) = profile
            && path.exists()
        {
            let profile_config = FileConfig::load_from_file(path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                return Err(ConfigError::NotFound { path: expanded });
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        Self::from_layers(file_config, cli)
    }

    /// Layer CLI/env values over merged file values, apply defaults and validate
    pub fn from_layers(file: FileConfig, cli: &CliConfig) -> Result<Self, ConfigError> {
        let file_db = file.db_connection.unwrap_or_default();

        let db_connection = DbConnection {
            host: require_text("db_connection.host", cli.db_host.clone().or(file_db.host))?,
            port: require_port("db_connection.port", cli.db_port.or(file_db.port))?,
            username: require_text(
                "db_connection.username",
                cli.db_username.clone().or(file_db.username),
            )?,
            // An empty password is allowed; an absent one is not
            password: cli
                .db_password
                .clone()
                .or(file_db.password)
                .ok_or(ConfigError::MissingField {
                    field: "db_connection.password",
                })?,
            database: require_text(
                "db_connection.database",
                cli.db_database.clone().or(file_db.database),
            )?,
        };

        let http_port = require_port("http_port", cli.http_port.or(file.http_port))?;

        let api_prefix = require_text("api_prefix", cli.api_prefix.clone().or(file.api_prefix))?;
        if !api_prefix.starts_with('/') {
            return Err(ConfigError::MalformedPrefix { value: api_prefix });
        }

        let secret_key = cli
            .secret_key
            .clone()
            .or(file.secret_key)
            .filter(|key| !key.expose().trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "secret_key",
            })?;

        let file_auth = file.user_auth_data.unwrap_or_default();
        let user_auth_data = build_user_auth(
            cli.auth_table.clone().or(file_auth.table),
            cli.auth_identifier.clone().or(file_auth.identifier),
            cli.auth_password.clone().or(file_auth.password),
        )?;

        let config = Self {
            // debug: CLI/env flag takes precedence, then file config, default false
            debug_enabled: cli.debug || file.debug_enabled.unwrap_or(false),
            db_connection,
            sql_scripts: cli
                .sql_scripts
                .clone()
                .or(file.sql_scripts)
                .unwrap_or_default(),
            http_port,
            api_prefix,
            user_auth_data,
            secret_key,
        };

        config.warn_suspicious();
        tracing::debug!(
            http_port = config.http_port,
            api_prefix = %config.api_prefix,
            db_host = %config.db_connection.host,
            db_port = config.db_connection.port,
            sql_scripts = config.sql_scripts.len(),
            auth = config.user_auth_data.is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Warn about settings that are valid but probably unintended
    fn warn_suspicious(&self) {
        if self.secret_key.len() < SECRET_KEY_MIN_RECOMMENDED_LEN {
            tracing::warn!(
                length = self.secret_key.len(),
                "secret_key is shorter than {} characters; run `silence keygen` for a stronger one",
                SECRET_KEY_MIN_RECOMMENDED_LEN
            );
        }

        let mut seen = std::collections::HashSet::new();
        for script in &self.sql_scripts {
            if !seen.insert(script.as_str()) {
                tracing::warn!(script = %script, "sql_scripts lists the same file more than once");
            }
        }

        if self.debug_enabled {
            tracing::warn!("debug_enabled is on; do not use this in production");
        }
    }
}

/// A required string setting: absent and blank are both missing
fn require_text(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingField { field })
}

fn require_port(field: &'static str, value: Option<i64>) -> Result<u16, ConfigError> {
    let value = value.ok_or(ConfigError::MissingField { field })?;
    if !PORT_RANGE.contains(&value) {
        return Err(ConfigError::OutOfRange { field, value });
    }
    u16::try_from(value).map_err(|_| ConfigError::OutOfRange { field, value })
}

/// The auth block is all-or-nothing: no non-blank fields means disabled, some is an error
fn build_user_auth(
    table: Option<String>,
    identifier: Option<String>,
    password: Option<String>,
) -> Result<Option<UserAuthData>, ConfigError> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    let missing: Vec<&'static str> = [
        ("table", present(&table)),
        ("identifier", present(&identifier)),
        ("password", present(&password)),
    ]
    .into_iter()
    .filter_map(|(name, is_set)| (!is_set).then_some(name))
    .collect();

    match (table, identifier, password) {
        (Some(table), Some(identifier), Some(password)) if missing.is_empty() => {
            Ok(Some(UserAuthData {
                table,
                identifier,
                password,
            }))
        }
        _ if missing.len() == 3 => Ok(None),
        _ => Err(ConfigError::PartialAuthBlock { missing }),
    }
}
