//! Startup settings.
//!
//! Compiled defaults, optionally overridden by a `RustedFxFinder.toml` file in the
//! working directory:
//! ```toml
//! font_path = "assets/Tajawal-Regular.ttf"
//! loglevel = "info"        # debug | info | warn | error
//! log_to_file = false
//! chart_width = 640
//! chart_height = 480
//! ```
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::{Table, Value};

pub const CONFIG_FILE: &str = "RustedFxFinder.toml";
pub const DEFAULT_FONT_PATH: &str = "assets/Tajawal-Regular.ttf";

const KNOWN_KEYS: [&str; 5] = ["font_path", "loglevel", "log_to_file", "chart_width", "chart_height"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("configuration key '{key}' must be {expected}")]
    InvalidValue { key: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// regular-weight font with Arabic glyphs
    pub font_path: PathBuf,
    pub loglevel: Option<String>,
    pub log_to_file: bool,
    /// size of the chart bitmap in pixels
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            loglevel: None,
            log_to_file: false,
            chart_width: 640,
            chart_height: 480,
        }
    }
}

fn invalid(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn read_str<'a>(table: &'a Table, key: &str) -> Result<Option<&'a str>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(invalid(key, "a string")),
    }
}

fn read_pixels(table: &Table, key: &str) -> Result<Option<u32>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Integer(n)) => u32::try_from(*n)
            .ok()
            .filter(|n| (64..=4096).contains(n))
            .map(Some)
            .ok_or_else(|| invalid(key, "an integer between 64 and 4096")),
        Some(_) => Err(invalid(key, "an integer between 64 and 4096")),
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<AppConfig, ConfigError> {
        let table: Table = content.parse()?;
        for key in table.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            warn!("unknown configuration key '{}' ignored", key);
        }

        let mut config = AppConfig::default();
        if let Some(path) = read_str(&table, "font_path")? {
            config.font_path = PathBuf::from(path);
        }
        config.loglevel = read_str(&table, "loglevel")?.map(str::to_string);
        match table.get("log_to_file") {
            None => {}
            Some(Value::Boolean(flag)) => config.log_to_file = *flag,
            Some(_) => return Err(invalid("log_to_file", "true or false")),
        }
        if let Some(width) = read_pixels(&table, "chart_width")? {
            config.chart_width = width;
        }
        if let Some(height) = read_pixels(&table, "chart_height")? {
            config.chart_height = height;
        }
        Ok(config)
    }

    /// defaults when `path` does not exist, an error when it exists but is broken
    pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(path)?;
        let config = AppConfig::from_toml_str(&content)?;
        info!("configuration loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_all_keys() {
        let config = AppConfig::from_toml_str(
            r#"
            font_path = "fonts/Other.ttf"
            loglevel = "debug"
            log_to_file = true
            chart_width = 800
            chart_height = 600
            "#,
        )
        .unwrap();
        assert_eq!(config.font_path, PathBuf::from("fonts/Other.ttf"));
        assert_eq!(config.loglevel.as_deref(), Some("debug"));
        assert!(config.log_to_file);
        assert_eq!((config.chart_width, config.chart_height), (800, 600));
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(matches!(
            AppConfig::from_toml_str("chart_width = \"wide\""),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_toml_str("chart_height = 10"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_toml_str("log_to_file = 1"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml_str("font_path = "),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chart_width = 1024").unwrap();
        let config = AppConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.chart_width, 1024);
        assert_eq!(config.chart_height, 480);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
