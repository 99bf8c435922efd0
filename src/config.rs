//! Configuration system for the dashboard.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use crate::error::{DashboardError, Result};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Event poll interval in milliseconds.
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,

    /// Enable mouse support (divider dragging).
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Enable vim-style navigation keys (hjkl).
    #[serde(default = "default_vim_keys")]
    pub vim_keys: bool,
}

fn default_poll_ms() -> u64 {
    100
}
fn default_mouse() -> bool {
    true
}
fn default_vim_keys() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            poll_ms: default_poll_ms(),
            mouse: default_mouse(),
            vim_keys: default_vim_keys(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global settings.
    #[serde(default)]
    pub global: GlobalConfig,

    /// Theme override (inline).
    #[serde(default)]
    pub theme: Theme,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: default_version(),
            global: GlobalConfig::default(),
            theme: Theme::default(),
        }
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| DashboardError::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            DashboardError::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Returns the event poll interval as a Duration.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.global.poll_ms)
    }

    /// Default config file location under the user config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("engpulse").join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.global.poll_ms, 100);
        assert!(config.global.mouse);
        assert!(config.global.vim_keys);
        assert_eq!(config.theme.name, "default");
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();
        assert_eq!(config.version, 1);
        assert!(config.global.mouse);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
version: 1
global:
  poll_ms: 50
  mouse: false
  vim_keys: false
theme:
  name: midnight
  accent: "#ff00ff"
"##;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.global.poll_ms, 50);
        assert!(!config.global.mouse);
        assert!(!config.global.vim_keys);
        assert_eq!(config.theme.name, "midnight");
        assert_eq!(config.theme.accent, "#ff00ff");
        // Untouched fields keep their defaults.
        assert_eq!(config.theme.palette.len(), 6);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
global:
  poll_ms: not_a_number
"#;

        let err = Config::parse(yaml).unwrap_err();
        assert!(err.to_string().contains("4"), "missing line number: {}", err);
    }

    #[test]
    fn test_config_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/path");
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "version: 1\nglobal:\n  poll_ms: 250").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
    }
}
