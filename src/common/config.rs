//! Configuration file handling

use serde::Deserialize;
use std::path::PathBuf;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Browser automation tool settings
    #[serde(default)]
    pub tool: ToolConfig,

    /// Test suite settings
    #[serde(default)]
    pub suite: SuiteConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// Browser automation tool configuration
#[derive(Debug, Deserialize)]
pub struct ToolConfig {
    /// Tool binary name looked up on PATH
    #[serde(default = "default_tool_name")]
    pub name: String,

    /// Explicit path to the tool, bypassing the PATH lookup
    pub path: Option<PathBuf>,

    /// Minimum supported tool version
    #[serde(default = "default_min_version")]
    pub min_version: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: default_tool_name(),
            path: None,
            min_version: default_min_version(),
        }
    }
}

fn default_tool_name() -> String {
    "playwright".to_string()
}

fn default_min_version() -> String {
    "1.30.0".to_string()
}

/// Test suite configuration
#[derive(Debug, Deserialize, Default)]
pub struct SuiteConfig {
    /// Default suite file, used when no path is given on the command line
    pub path: Option<PathBuf>,
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Timeout for the browser driver install step
    #[serde(default = "default_install")]
    pub install_secs: u64,

    /// Default timeout for a single test case
    #[serde(default = "default_case")]
    pub case_secs: u64,

    /// Timeout for the tool version check
    #[serde(default = "default_version")]
    pub version_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            install_secs: default_install(),
            case_secs: default_case(),
            version_secs: default_version(),
        }
    }
}

fn default_install() -> u64 {
    600
}
fn default_case() -> u64 {
    300
}
fn default_version() -> u64 {
    10
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| super::Error::FileRead {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    })?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tool.name, "playwright");
        assert!(config.tool.path.is_none());
        assert_eq!(config.timeouts.install_secs, 600);
        assert_eq!(config.timeouts.case_secs, 300);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [tool]
            name = "pw"
            path = "/opt/pw/bin/pw"

            [timeouts]
            install_secs = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.tool.name, "pw");
        assert_eq!(config.tool.path, Some(PathBuf::from("/opt/pw/bin/pw")));
        assert_eq!(config.tool.min_version, "1.30.0");
        assert_eq!(config.timeouts.install_secs, 120);
        // Untouched sections keep their defaults
        assert_eq!(config.timeouts.case_secs, 300);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tool.name, "playwright");
    }
}
