use std::ops::RangeInclusive;

// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "Silence";

/// Application name in lowercase (for paths, log targets and identifiers)
pub const APP_NAME_LOWER: &str = "silence";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".silence";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name, looked up in the profile folder and the working directory
pub const CONFIG_FILE_NAME: &str = "silence.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "SILENCE_CONFIG";

/// Environment variable to skip the profile config (~/.silence/silence.json)
pub const ENV_NO_PROFILE: &str = "SILENCE_NO_PROFILE";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "SILENCE_LOG";

// =============================================================================
// Environment Variables - Settings
// =============================================================================

pub const ENV_DEBUG: &str = "SILENCE_DEBUG";
pub const ENV_HTTP_PORT: &str = "SILENCE_HTTP_PORT";
pub const ENV_API_PREFIX: &str = "SILENCE_API_PREFIX";
pub const ENV_SQL_SCRIPTS: &str = "SILENCE_SQL_SCRIPTS";
pub const ENV_SECRET_KEY: &str = "SILENCE_SECRET_KEY";

// =============================================================================
// Environment Variables - Database Connection
// =============================================================================

pub const ENV_DB_HOST: &str = "SILENCE_DB_HOST";
pub const ENV_DB_PORT: &str = "SILENCE_DB_PORT";
pub const ENV_DB_USERNAME: &str = "SILENCE_DB_USERNAME";
pub const ENV_DB_PASSWORD: &str = "SILENCE_DB_PASSWORD";
pub const ENV_DB_DATABASE: &str = "SILENCE_DB_DATABASE";

// =============================================================================
// Environment Variables - User Authentication
// =============================================================================

pub const ENV_AUTH_TABLE: &str = "SILENCE_AUTH_TABLE";
pub const ENV_AUTH_IDENTIFIER: &str = "SILENCE_AUTH_IDENTIFIER";
pub const ENV_AUTH_PASSWORD: &str = "SILENCE_AUTH_PASSWORD";

// =============================================================================
// Limits
// =============================================================================

/// Valid TCP port numbers for `http_port` and `db_connection.port`
pub const PORT_RANGE: RangeInclusive<i64> = 1..=65535;

/// Number of random bytes in a generated secret key
pub const SECRET_KEY_BYTES: usize = 32;

/// Secret keys shorter than this are accepted with a warning
pub const SECRET_KEY_MIN_RECOMMENDED_LEN: usize = 32;
