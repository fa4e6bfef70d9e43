//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! reference_date: 2024-06-15   # "today" for date rules; defaults to the UTC date
//! log_format: json             # pretty (default) or json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load the config at `path`, or defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse a config from YAML text. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// The reference date for date rules: the command-line override, then
    /// the configured date, then today's UTC date.
    pub fn reference_date(&self, cli_override: Option<NaiveDate>) -> NaiveDate {
        cli_override
            .or(self.reference_date)
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_full_config() {
        let config =
            CliConfig::from_yaml("reference_date: 2024-06-15\nlog_format: json\n").unwrap();
        assert_eq!(config.reference_date, Some(ymd(2024, 6, 15)));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_yaml("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CliConfig::from_yaml("today: 2024-01-01\n").is_err());
    }

    #[test]
    fn test_reference_date_precedence() {
        let config = CliConfig {
            reference_date: Some(ymd(2020, 1, 1)),
            ..CliConfig::default()
        };
        assert_eq!(config.reference_date(Some(ymd(2021, 2, 2))), ymd(2021, 2, 2));
        assert_eq!(config.reference_date(None), ymd(2020, 1, 1));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "reference_date: 2019-12-31").unwrap();
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.reference_date, Some(ymd(2019, 12, 31)));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("cannot read config"));
    }
}
