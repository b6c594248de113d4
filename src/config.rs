//! Configuration loaded from `~/.config/tablescrape/config.toml`.
//!
//! Every key is optional. Example:
//!
//! ```toml
//! keep_raw_cells = false
//! format = "json"
//! timeout_secs = 20
//!
//! [columns]
//! "Grosses" = "currency"
//! "% Cap" = "percent"
//! "Week End" = "date"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::coerce::ColumnRules;
use crate::http_client::DEFAULT_USER_AGENT;
use crate::render::OutputFormat;

/// Effective settings for an extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keep cell markup instead of cell text.
    pub keep_raw_cells: bool,
    pub format: OutputFormat,
    /// Whole-request timeout for URL sources.
    pub timeout_secs: u64,
    pub max_redirects: usize,
    pub user_agent: String,
    /// Per-column typed coercion.
    pub columns: ColumnRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keep_raw_cells: false,
            format: OutputFormat::Markdown,
            timeout_secs: 30,
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            columns: ColumnRules::new(),
        }
    }
}

impl Config {
    /// Load the config file.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is used and a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (config_path(), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tablescrape")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::ColumnKind;

    #[test]
    fn parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r##"
keep_raw_cells = true
format = "json"
timeout_secs = 5
max_redirects = 2
user_agent = "stats-bot/0.1"

[columns]
"#Perf" = "integer"
"Grosses" = "currency"
"Week End" = "date:%Y-%m-%d"
"##,
        )
        .unwrap();
        assert!(config.keep_raw_cells);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "stats-bot/0.1");
        assert_eq!(config.columns["#Perf"], ColumnKind::Integer);
        assert_eq!(config.columns["Week End"], ColumnKind::Date("%Y-%m-%d".into()));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = Config::parse("[columns]\nGross = \"money\"").unwrap_err();
        assert!(format!("{err:#}").contains("money"));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = Config::default();
        config.columns.insert("% Cap".into(), ColumnKind::Percent);
        let text = config.to_toml().unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn loads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "format = \"json\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.timeout_secs, 30);
    }
}
