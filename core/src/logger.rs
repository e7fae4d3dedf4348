//! Logging capability consumed by components
//!
//! Components talk to a [`Logger`] trait object. The default implementation,
//! [`ConsoleLogger`], forwards records to `tracing`; the host decides where
//! they end up by installing a subscriber.

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target used for every event emitted by [`ConsoleLogger`]
pub const LOG_TARGET: &str = "keel";

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Suppresses all output
    Silent,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Silent => write!(f, "silent"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" | "none" | "off" => Ok(LogLevel::Silent),
            _ => Err(CoreError::UnknownLogLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = CoreError;

    // `Self::Error` would be ambiguous with the `Error` variant
    fn try_from(value: String) -> Result<Self, CoreError> {
        value.parse()
    }
}

/// Logging capability a component writes its diagnostics to
pub trait Logger: Send + Sync {
    /// Label identifying this logger in output
    fn name(&self) -> &str;

    /// Record a message with optional structured metadata
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Value>);

    fn debug(&self, message: &str, metadata: Option<&Value>) {
        self.log(LogLevel::Debug, message, metadata);
    }

    fn info(&self, message: &str, metadata: Option<&Value>) {
        self.log(LogLevel::Info, message, metadata);
    }

    fn warn(&self, message: &str, metadata: Option<&Value>) {
        self.log(LogLevel::Warn, message, metadata);
    }

    fn error(&self, message: &str, metadata: Option<&Value>) {
        self.log(LogLevel::Error, message, metadata);
    }
}

macro_rules! emit {
    ($level:expr, $logger:expr, $message:expr, $metadata:expr) => {
        match $metadata {
            Some(metadata) => tracing::event!(
                target: LOG_TARGET,
                $level,
                logger = %$logger,
                metadata = %metadata,
                "{}",
                $message
            ),
            None => tracing::event!(target: LOG_TARGET, $level, logger = %$logger, "{}", $message),
        }
    };
}

/// Default logger writing through `tracing`
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    name: String,
    level: LogLevel,
}

impl ConsoleLogger {
    /// Create a console logger at the default level
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::default(),
        }
    }

    /// Set the minimum level this logger lets through
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a record at `level` would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Silent && self.level != LogLevel::Silent && level >= self.level
    }
}

impl Logger for ConsoleLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Value>) {
        if !self.enabled(level) {
            return;
        }
        match level {
            LogLevel::Debug => emit!(tracing::Level::DEBUG, self.name, message, metadata),
            LogLevel::Info => emit!(tracing::Level::INFO, self.name, message, metadata),
            LogLevel::Warn => emit!(tracing::Level::WARN, self.name, message, metadata),
            LogLevel::Error => emit!(tracing::Level::ERROR, self.name, message, metadata),
            LogLevel::Silent => {}
        }
    }
}

/// Logger that discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn name(&self) -> &str {
        "noop"
    }

    fn log(&self, _level: LogLevel, _message: &str, _metadata: Option<&Value>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingLogger {
        records: Mutex<Vec<(LogLevel, String)>>,
    }

    impl Logger for CapturingLogger {
        fn name(&self) -> &str {
            "capture"
        }

        fn log(&self, level: LogLevel, message: &str, _metadata: Option<&Value>) {
            self.records.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_provided_methods_forward_level() {
        let logger = CapturingLogger::default();
        logger.debug("d", None);
        logger.info("i", None);
        logger.warn("w", Some(&serde_json::json!({"k": 1})));
        logger.error("e", None);

        let records = logger.records.lock().unwrap();
        let levels: Vec<LogLevel> = records.iter().map(|(level, _)| *level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error]
        );
        assert_eq!(records[2].1, "w");
    }

    #[test]
    fn test_console_logger_filtering() {
        let logger = ConsoleLogger::new("LLM - test");
        assert_eq!(logger.name(), "LLM - test");
        assert_eq!(logger.level(), LogLevel::Info);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));

        let verbose = logger.clone().with_level(LogLevel::Debug);
        assert!(verbose.enabled(LogLevel::Debug));

        let silent = logger.with_level(LogLevel::Silent);
        assert!(!silent.enabled(LogLevel::Error));
    }

    #[test]
    fn test_console_logger_emits_tracing_events() {
        let logger = ConsoleLogger::new("AGENT - a").with_level(LogLevel::Debug);
        let ((), capture) = capture(|| {
            logger.debug("hello", Some(&serde_json::json!({"k": 1})));
            logger.info("info", None);
            logger.warn("careful", None);
            logger.error("boom", None);
        });

        let events = capture.events.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.target == LOG_TARGET));
        assert!(events.iter().all(|e| e.fields.get("logger") == Some("AGENT - a")));

        let levels: Vec<tracing::Level> = events.iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![
                tracing::Level::DEBUG,
                tracing::Level::INFO,
                tracing::Level::WARN,
                tracing::Level::ERROR,
            ]
        );

        assert_eq!(events[0].fields.get("message"), Some("hello"));
        assert_eq!(events[0].fields.get("metadata"), Some(r#"{"k":1}"#));
        assert_eq!(events[3].fields.get("message"), Some("boom"));
        assert_eq!(events[3].fields.get("metadata"), None);
    }

    #[test]
    fn test_console_logger_drops_filtered_levels() {
        let logger = ConsoleLogger::new("LLM");
        let silent = ConsoleLogger::new("LLM").with_level(LogLevel::Silent);
        let ((), capture) = capture(|| {
            logger.debug("below threshold", None);
            silent.error("silenced", None);
            logger.log(LogLevel::Silent, "never", None);
            logger.warn("kept", None);
        });

        let events = capture.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, tracing::Level::WARN);
        assert_eq!(events[0].fields.get("message"), Some("kept"));
    }

    #[test]
    fn test_log_level_deserializes_through_from_str() {
        let level: LogLevel = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
        let level: LogLevel = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(level, LogLevel::Silent);
        assert!(serde_json::from_str::<LogLevel>("\"loud\"").is_err());
        assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_log_level_parse_and_order() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("none".parse::<LogLevel>().unwrap(), LogLevel::Silent);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Silent);
    }

    #[test]
    fn test_noop_logger() {
        let logger = NoopLogger;
        logger.error("ignored", None);
        assert_eq!(logger.name(), "noop");
    }
}
