/// Structured logging for the gage scraper
///
/// Tags every entry with the component and, when known, the gage id.
/// Supports console output and an optional append-only log file.
/// Nothing is emitted until `init_logger` has been called.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use crate::model::GageError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Parses the level names accepted in the config file.
    pub fn from_name(name: &str) -> Option<LogLevel> {
        match name.to_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Query,
    Scraper,
    Parser,
    Storage,
    System,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Query => write!(f, "QUERY"),
            Component::Scraper => write!(f, "FETCH"),
            Component::Parser => write!(f, "PARSE"),
            Component::Storage => write!(f, "STORE"),
            Component::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Caller mistake or a documented gap (bad span, lookup_gage)
    Expected,
    /// Site or local environment misbehaving (markup change, HTTP 5xx, disk)
    Unexpected,
    /// Cannot tell from the error alone (network hiccups, 4xx)
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Classify a gage failure by error variant
pub fn classify_failure(err: &GageError) -> FailureType {
    match err {
        GageError::InvalidDuration(_) | GageError::Unsupported(_) => FailureType::Expected,
        GageError::ParseError(_) | GageError::Storage(_) | GageError::Config(_) => {
            FailureType::Unexpected
        }
        GageError::HttpStatus(code) if *code >= 500 => FailureType::Unexpected,
        GageError::HttpStatus(_) | GageError::Transport(_) => FailureType::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn format_entry(level: LogLevel, component: Component, gage_id: Option<u32>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let gage_part = gage_id.map(|g| format!(" [gage {}]", g)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, component, gage_part, message)
    }

    fn format_console(level: LogLevel, component: Component, gage_id: Option<u32>, message: &str) -> String {
        let gage_part = gage_id.map(|g| format!(" [gage {}]", g)).unwrap_or_default();
        let marker = match level {
            LogLevel::Error => "✗ ",
            LogLevel::Warning => "⚠ ",
            LogLevel::Info => "",
            LogLevel::Debug => "[DEBUG] ",
        };
        format!("   {}{}{}: {}", marker, component, gage_part, message)
    }

    fn log(&self, level: LogLevel, component: Component, gage_id: Option<u32>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = Self::format_entry(level, component, gage_id, message);

        // Console output; stdout stays clean for the JSON report
        if self.console_timestamps {
            eprintln!("{}", log_entry);
        } else {
            eprintln!("{}", Self::format_console(level, component, gage_id, message));
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn dispatch(level: LogLevel, component: Component, gage_id: Option<u32>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, component, gage_id, message);
        }
    }
}

pub fn info(component: Component, gage_id: Option<u32>, message: &str) {
    dispatch(LogLevel::Info, component, gage_id, message);
}

pub fn warn(component: Component, gage_id: Option<u32>, message: &str) {
    dispatch(LogLevel::Warning, component, gage_id, message);
}

pub fn error(component: Component, gage_id: Option<u32>, message: &str) {
    dispatch(LogLevel::Error, component, gage_id, message);
}

pub fn debug(component: Component, gage_id: Option<u32>, message: &str) {
    dispatch(LogLevel::Debug, component, gage_id, message);
}

// ---------------------------------------------------------------------------
// Structured Failure Logging
// ---------------------------------------------------------------------------

/// Log a failed gage operation at the level its classification calls for
pub fn log_gage_failure(gage_id: u32, operation: &str, err: &GageError) {
    let failure_type = classify_failure(err);
    let message = format!("{} failed [{}]: {}", operation, failure_type, err);

    match failure_type {
        FailureType::Expected => warn(Component::Scraper, Some(gage_id), &message),
        FailureType::Unexpected => error(Component::Scraper, Some(gage_id), &message),
        FailureType::Unknown => warn(Component::Scraper, Some(gage_id), &message),
    }
}
