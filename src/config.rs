//! User configuration loaded from a TOML file.
//!
//! The file lives at `$XDG_CONFIG_HOME/padcalc/config.toml` unless a path is
//! given on the command line. Every field has a default, so an empty or
//! missing file yields the stock calculator.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::editor::DEFAULT_HISTORY_LIMIT;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of undo steps kept for the expression buffer.
    pub history_limit: usize,
    pub window: WindowConfig,
    pub keypad: KeypadConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Accept `,` as the decimal separator.
    pub decimal_comma: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            window: WindowConfig::default(),
            keypad: KeypadConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Calc".to_string(),
            width: 240.0,
            height: 320.0,
        }
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            decimal_comma: true,
        }
    }
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("padcalc").join("config.toml"))
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and silently skipped if there is no file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            history_limit = 10

            [keypad]
            decimal_comma = false
            "#,
        )
        .unwrap();

        assert_eq!(config.history_limit, 10);
        assert!(!config.keypad.decimal_comma);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("history_limit = \"many\"").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\ntitle = \"Rechner\"\nwidth = 300.0").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.window.title, "Rechner");
        assert_eq!(config.window.width, 300.0);
        assert_eq!(config.window.height, 320.0);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
