/// Scraper configuration loader - parses fws_gage.toml
///
/// Every key is optional. With no file at all the scraper talks to the
/// public FWS site with no request timeout and writes 4-space JSON.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::ingest::query::DEFAULT_BASE_URL;
use crate::logging::LogLevel;
use crate::model::GageError;

pub const DEFAULT_CONFIG_PATH: &str = "fws_gage.toml";
pub const DEFAULT_JSON_INDENT: usize = 4;

/// Root of fws_gage.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub http: HttpConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Gage detail endpoint; the gage id is appended directly.
    pub base_url: String,
    /// Absent means the request may block indefinitely.
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            json_indent: DEFAULT_JSON_INDENT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub log_file: Option<String>,
    pub console_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            log_file: None,
            console_timestamps: false,
        }
    }
}

impl LoggingConfig {
    /// Configured level, falling back to Info for unknown names.
    pub fn min_level(&self) -> LogLevel {
        LogLevel::from_name(&self.level).unwrap_or(LogLevel::Info)
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<ScraperConfig, GageError> {
    toml::from_str(contents).map_err(|e| GageError::Config(format!("Failed to parse config: {}", e)))
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// `GageError::Config` if the file cannot be read or is malformed.
pub fn load_config(path: &Path) -> Result<ScraperConfig, GageError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GageError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_config(&contents)
}

/// Like `load_config`, but a missing file yields the defaults.
pub fn load_config_or_default(path: &Path) -> Result<ScraperConfig, GageError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(ScraperConfig::default())
    }
}
