//! Startup summary of the loaded configuration

use super::config::AppConfig;
use super::constants::APP_NAME;

/// Render the summary lines; secrets are never included
pub fn render_summary(config: &AppConfig) -> Vec<String> {
    // Label width: "SQL scripts:" is 12 chars, pad to 14 for alignment
    const W: usize = 14;

    let db = &config.db_connection;
    let mut lines = vec![
        format!(
            "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
            APP_NAME,
            env!("CARGO_PKG_VERSION")
        ),
        String::new(),
        format!(
            "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m :{}{}",
            "API:", config.http_port, config.api_prefix
        ),
        format!(
            "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}@{}:{}/{}",
            "Database:", db.username, db.host, db.port, db.database
        ),
    ];

    if config.sql_scripts.is_empty() {
        lines.push(format!("  \x1b[90m➜  {:<W$} none\x1b[0m", "SQL scripts:"));
    } else {
        lines.push(format!("  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m", "SQL scripts:"));
        for (i, script) in config.sql_scripts.iter().enumerate() {
            lines.push(format!("        {:>2}. {}", i + 1, script));
        }
    }

    match &config.user_auth_data {
        Some(auth) => lines.push(format!(
            "  \x1b[35m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {} (identifier: {}, password: {})",
            "User auth:", auth.table, auth.identifier, auth.password
        )),
        None => lines.push(format!("  \x1b[90m➜  {:<W$} disabled\x1b[0m", "User auth:")),
    }

    lines.push(format!(
        "  \x1b[90m➜  {:<W$} {}\x1b[0m",
        "Debug:",
        if config.debug_enabled { "on" } else { "off" }
    ));
    lines.push(format!("  \x1b[90m➜  {:<W$} set\x1b[0m", "Secret key:"));

    lines
}

/// Print the summary banner
pub fn print_summary(config: &AppConfig) {
    println!();
    for line in render_summary(config) {
        println!("{}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DbConnection, UserAuthData};
    use crate::core::secret::SecretString;

    fn config() -> AppConfig {
        AppConfig {
            debug_enabled: false,
            db_connection: DbConnection {
                host: "127.0.0.1".to_string(),
                port: 3306,
                username: "issi_user_tenisdb".to_string(),
                password: SecretString::from("db-pass-1234"),
                database: "tenisdb".to_string(),
            },
            sql_scripts: vec!["createDB.sql".to_string(), "populateDB.sql".to_string()],
            http_port: 8080,
            api_prefix: "/api/v1".to_string(),
            user_auth_data: None,
            secret_key: SecretString::from("signing-key-5678"),
        }
    }

    #[test]
    fn test_summary_contents() {
        let text = render_summary(&config()).join("\n");

        assert!(text.contains(":8080/api/v1"));
        assert!(text.contains("issi_user_tenisdb@127.0.0.1:3306/tenisdb"));
        assert!(text.contains(" 1. createDB.sql"));
        assert!(text.contains(" 2. populateDB.sql"));
        assert!(text.contains("disabled"));
    }

    #[test]
    fn test_summary_omits_secrets() {
        let text = render_summary(&config()).join("\n");
        assert!(!text.contains("db-pass-1234"));
        assert!(!text.contains("signing-key-5678"));
    }

    #[test]
    fn test_summary_auth_and_empty_scripts() {
        let mut config = config();
        config.sql_scripts.clear();
        config.user_auth_data = Some(UserAuthData {
            table: "Employees".to_string(),
            identifier: "email".to_string(),
            password: "password".to_string(),
        });

        let text = render_summary(&config).join("\n");
        assert!(text.contains("Employees (identifier: email, password: password)"));
        assert!(text.contains("none"));
    }
}
