//! File utility functions

use std::path::PathBuf;

/// Expand a user-supplied path to an absolute path.
///
/// `~` and `~/rest` resolve against the home directory; anything relative
/// resolves against the current working directory.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    let expanded = match path {
        "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => match (path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(path),
        },
    };

    if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    }
}

/// Profile-level config path (`~/<dot_folder>/<file_name>`)
pub fn profile_path(dot_folder: &str, file_name: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(dot_folder).join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_expand_path_absolute() {
        assert_eq!(expand_path("/etc/silence.json"), PathBuf::from("/etc/silence.json"));
    }

    #[test]
    fn test_expand_path_relative_is_absolute() {
        let result = expand_path("silence.json");
        assert!(result.is_absolute());
        assert!(result.ends_with("silence.json"));
    }

    #[test]
    fn test_expand_path_trims_whitespace() {
        let result = expand_path("  silence.json  ");
        assert!(result.ends_with("silence.json"));
    }

    #[test]
    fn test_expand_path_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~"), home);
            assert_eq!(expand_path("~/.silence"), home.join(".silence"));
        }
    }

    #[test]
    fn test_profile_path() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                profile_path(".silence", "silence.json"),
                Some(home.join(".silence").join("silence.json"))
            );
        }
    }
}
