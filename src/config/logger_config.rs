//! Ready-to-use loggers from a handful of settings
//!
//! [`LoggerConfig`] gathers a logger name, a severity level, an optional log
//! file and a format template, then [`get_logger_in`](LoggerConfig::get_logger_in)
//! resolves the named logger in a registry, sets its level and attaches a
//! console handler and, when a file is configured, a file handler.
//!
//! Handlers accumulate: configuring the same name twice attaches a second
//! set of handlers and every record is written twice. Use
//! [`exclusive`](LoggerConfig::exclusive) to replace earlier handlers instead.
//!
//! # Example
//!
//! ```no_run
//! use logger_config::prelude::*;
//!
//! let template = LoggerConfig::format(true, true, true, true, &[("lineno", true)]);
//! let logger = LoggerConfig::new("app", LogLevel::Debug)
//!     .log_file("app.log")
//!     .log_path("logs")
//!     .formatter(template)
//!     .mode(FileMode::Append)
//!     .get_logger()?;
//!
//! logger.info("service started");
//! # Ok::<(), LoggerError>(())
//! ```

use super::format_spec::build_format;
use crate::core::{
    Formatter, Handler, LogLevel, LoggerError, LoggerHandle, LoggerRegistry, Result,
    TimestampFormat,
};
use crate::handlers::{ConsoleHandler, FileHandler, FileMode};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Template used when none is configured
pub const DEFAULT_FORMAT: &str = "%(name)s - %(levelname)s - %(message)s";

/// Directory joined with the log file when none is configured
pub const DEFAULT_LOG_PATH: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    name: String,
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    level: i32,
    #[serde(default)]
    log_file: Option<String>,
    #[serde(default = "default_log_path")]
    log_path: PathBuf,
    #[serde(default = "default_format")]
    formatter: String,
    #[serde(default)]
    mode: FileMode,
    #[serde(default = "default_console")]
    console: bool,
    #[serde(default)]
    create_dirs: bool,
    #[serde(default)]
    exclusive: bool,
    #[serde(default)]
    timestamp_format: TimestampFormat,
}

fn default_level() -> i32 {
    LogLevel::Info.code()
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_console() -> bool {
    true
}

/// Accept either an integer code or a level name such as `"debug"`
fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LevelRepr {
        Code(i32),
        Name(String),
    }

    match LevelRepr::deserialize(deserializer)? {
        LevelRepr::Code(code) => Ok(code),
        LevelRepr::Name(name) => name
            .parse::<LogLevel>()
            .map(LogLevel::code)
            .map_err(serde::de::Error::custom),
    }
}

impl LoggerConfig {
    /// Console-only configuration with the default template
    pub fn new(name: impl Into<String>, level: impl Into<i32>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
            log_file: None,
            log_path: default_log_path(),
            formatter: default_format(),
            mode: FileMode::default(),
            console: true,
            create_dirs: false,
            exclusive: false,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Build a format template from flags; see [`build_format`]
    pub fn format(
        name: bool,
        asctime: bool,
        levelname: bool,
        message: bool,
        extra_fields: &[(&str, bool)],
    ) -> String {
        build_format(name, asctime, levelname, message, extra_fields)
    }

    /// Parse a JSON configuration
    ///
    /// ```
    /// use logger_config::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_json_str(
    ///     r#"{"name": "worker", "level": "debug", "log_file": "worker.log", "mode": "w"}"#,
    /// ).unwrap();
    /// assert_eq!(config.level(), 10);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Log to `log_path/log_file` in addition to the console
    #[must_use = "builder methods return a new value"]
    pub fn log_file(mut self, log_file: impl Into<String>) -> Self {
        self.log_file = Some(log_file.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    /// Set the format template; an empty template means `%(message)s`
    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, template: impl Into<String>) -> Self {
        self.formatter = template.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the file mode from `"a"`/`"w"` (or `"append"`/`"overwrite"`)
    pub fn mode_str(self, mode: &str) -> Result<Self> {
        Ok(self.mode(mode.parse()?))
    }

    /// Attach a console handler (default `true`)
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Create `log_path` before opening the log file (default `false`)
    #[must_use = "builder methods return a new value"]
    pub fn create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Detach the logger's existing handlers before attaching new ones
    #[must_use = "builder methods return a new value"]
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn template(&self) -> &str {
        &self.formatter
    }

    pub fn file_mode(&self) -> FileMode {
        self.mode
    }

    /// Full path of the log file, if one is configured
    pub fn file_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_ref()
            .map(|log_file| self.log_path.join(log_file))
    }

    /// Configure the named logger in the process-wide registry
    pub fn get_logger(&self) -> Result<LoggerHandle> {
        self.get_logger_in(LoggerRegistry::global())
    }

    /// Configure the named logger in `registry` and return its handle
    ///
    /// Every sink is opened before anything is attached, so a failure leaves
    /// the logger's level and handlers as they were.
    pub fn get_logger_in(&self, registry: &LoggerRegistry) -> Result<LoggerHandle> {
        if self.name.is_empty() {
            return Err(LoggerError::config("LoggerConfig", "logger name must not be empty"));
        }

        let logger = registry.get_or_create(&self.name);
        let handlers = self.build_handlers()?;

        logger.set_level(self.level);
        if self.exclusive {
            logger.replace_handlers(handlers);
        } else {
            logger.add_handlers(handlers);
        }

        Ok(logger)
    }

    fn build_handlers(&self) -> Result<Vec<Box<dyn Handler>>> {
        let formatter =
            Formatter::new(&self.formatter)?.with_timestamp_format(self.timestamp_format.clone());
        let mut handlers: Vec<Box<dyn Handler>> = Vec::with_capacity(2);

        if self.console {
            handlers.push(Box::new(ConsoleHandler::new(formatter.clone())));
        }

        if let Some(path) = self.file_path() {
            if self.create_dirs {
                fs::create_dir_all(&self.log_path).map_err(|e| {
                    LoggerError::file_handler(self.log_path.display().to_string(), e)
                })?;
            }
            handlers.push(Box::new(FileHandler::open(path, self.mode, formatter)?));
        }

        Ok(handlers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new("app", LogLevel::Info);
        assert_eq!(config.level(), 20);
        assert_eq!(config.template(), DEFAULT_FORMAT);
        assert_eq!(config.file_mode(), FileMode::Append);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_file_path_join() {
        let config = LoggerConfig::new("app", 10).log_path("logs").log_file("app.log");
        assert_eq!(config.file_path(), Some(Path::new("logs").join("app.log")));

        let config = LoggerConfig::new("app", 10).log_file("app.log");
        assert_eq!(config.file_path(), Some(Path::new(".").join("app.log")));
    }

    #[test]
    fn test_mode_str() {
        let config = LoggerConfig::new("app", 10).mode_str("W").unwrap();
        assert_eq!(config.file_mode(), FileMode::Overwrite);
        assert!(LoggerConfig::new("app", 10).mode_str("r").is_err());
    }

    #[test]
    fn test_console_only_logger() {
        let registry = LoggerRegistry::new();
        let logger = LoggerConfig::new("console-only", LogLevel::Warn)
            .get_logger_in(&registry)
            .unwrap();

        assert_eq!(logger.level(), 30);
        assert_eq!(logger.handler_names(), vec!["console"]);
    }

    #[test]
    fn test_handlers_without_console() {
        let dir = TempDir::new().unwrap();
        let registry = LoggerRegistry::new();
        let logger = LoggerConfig::new("file-only", 10)
            .console(false)
            .log_path(dir.path())
            .log_file("file-only.log")
            .get_logger_in(&registry)
            .unwrap();

        assert_eq!(logger.handler_names(), vec!["file"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let registry = LoggerRegistry::new();
        let result = LoggerConfig::new("", 20).get_logger_in(&registry);
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_malformed_template_rejected() {
        let registry = LoggerRegistry::new();
        let result = LoggerConfig::new("app", 20)
            .formatter("%(name")
            .get_logger_in(&registry);
        assert!(matches!(result, Err(LoggerError::Formatter { .. })));
    }

    #[test]
    fn test_failed_open_leaves_logger_untouched() {
        let dir = TempDir::new().unwrap();
        let registry = LoggerRegistry::new();

        let result = LoggerConfig::new("app", 40)
            .log_path(dir.path().join("missing"))
            .log_file("app.log")
            .get_logger_in(&registry);

        let err = result.err().expect("missing directory should fail");
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));

        let logger = registry.get("app").expect("logger is registered before opening");
        assert_eq!(logger.handler_count(), 0);
        assert_eq!(logger.level(), LogLevel::Info.code());
    }

    #[test]
    fn test_create_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let registry = LoggerRegistry::new();

        LoggerConfig::new("app", 20)
            .console(false)
            .create_dirs(true)
            .log_path(&nested)
            .log_file("app.log")
            .get_logger_in(&registry)
            .unwrap();

        assert!(nested.join("app.log").exists());
    }

    #[test]
    fn test_json_config() {
        let config = LoggerConfig::from_json_str(
            r#"{
                "name": "worker",
                "level": 15,
                "log_file": "worker.log",
                "log_path": "/tmp/logs",
                "formatter": "%(message)s",
                "mode": "w",
                "console": false
            }"#,
        )
        .unwrap();

        assert_eq!(config.name(), "worker");
        assert_eq!(config.level(), 15);
        assert_eq!(config.file_mode(), FileMode::Overwrite);
        assert_eq!(
            config.file_path(),
            Some(Path::new("/tmp/logs").join("worker.log"))
        );
        assert_eq!(config.template(), "%(message)s");
    }

    #[test]
    fn test_json_config_defaults_and_level_names() {
        let config = LoggerConfig::from_json_str(r#"{"name": "svc", "level": "warning"}"#).unwrap();
        assert_eq!(config, LoggerConfig::new("svc", LogLevel::Warn));

        let config = LoggerConfig::from_json_str(r#"{"name": "svc"}"#).unwrap();
        assert_eq!(config.level(), 20);
    }

    #[test]
    fn test_json_config_errors() {
        assert!(matches!(
            LoggerConfig::from_json_str(r#"{"name": "svc", "mode": "rw"}"#),
            Err(LoggerError::Json(_))
        ));
        assert!(matches!(
            LoggerConfig::from_json_str(r#"{"name": "svc", "level": "loud"}"#),
            Err(LoggerError::Json(_))
        ));
        assert!(LoggerConfig::from_json_str(r#"{"level": 10}"#).is_err());
    }
}
