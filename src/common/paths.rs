//! Platform configuration paths and suite resolution locations

use std::io;
use std::path::PathBuf;

/// Application name used for platform directories
const APP_NAME: &str = "uitest-cli";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/uitest-cli/`
/// - macOS: `~/Library/Application Support/uitest-cli/`
/// - Windows: `%APPDATA%\uitest-cli\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> io::Result<Option<PathBuf>> {
    if let Some(dir) = config_dir() {
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(Some(dir))
    } else {
        Ok(None)
    }
}

/// Directories searched for the default suite file, relative to the
/// current working directory, in order.
pub fn suite_search_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("."), PathBuf::from("tests")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_valid() {
        let dir = config_dir();
        assert!(dir.is_some());
    }

    #[test]
    fn test_suite_search_dirs_start_with_cwd() {
        let dirs = suite_search_dirs();
        assert_eq!(dirs[0], PathBuf::from("."));
    }
}
