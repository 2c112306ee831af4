//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Source location captured by the logging macros
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub module_path: String,
}

/// A single record handed to every handler of a logger
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub logger_name: String,
    pub level: i32,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub location: Option<Location>,
    pub function: Option<String>,
    pub thread_id: String,
    pub thread_name: Option<String>,
    pub process_id: u32,
    /// Caller-supplied fields, addressable from templates by name
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one record always renders as one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger_name: impl Into<String>, level: i32, message: impl AsRef<str>) -> Self {
        Self {
            logger_name: logger_name.into(),
            level,
            message: Self::sanitize_message(message.as_ref()),
            timestamp: Utc::now(),
            location: None,
            function: None,
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
            process_id: std::process::id(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, file: &str, line: u32, module_path: &str) -> Self {
        self.location = Some(Location {
            file: file.to_string(),
            line,
            module_path: module_path.to_string(),
        });
        self
    }

    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn with_fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in fields {
            self = self.with_field(key, value);
        }
        self
    }

    /// Display name of the record's level
    pub fn level_name(&self) -> String {
        LogLevel::name_for(self.level)
    }

    /// Named level, when the code is one of the standard ones
    pub fn named_level(&self) -> Option<LogLevel> {
        LogLevel::from_code(self.level)
    }

    /// Look up a caller-supplied field; the last value wins on duplicates
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
