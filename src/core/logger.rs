//! Named logger
//!
//! A [`Logger`] owns a severity threshold and a list of handlers. Records at
//! or above the threshold are passed to every handler in attachment order.
//! Loggers are shared through [`LoggerHandle`]s handed out by a
//! [`LoggerRegistry`](super::registry::LoggerRegistry).

use super::{
    error::Result, handler::Handler, log_level::LogLevel, log_record::LogRecord,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared handle to a registered logger
pub type LoggerHandle = Arc<Logger>;

pub struct Logger {
    name: String,
    level: RwLock<i32>,
    handlers: RwLock<Vec<Box<dyn Handler>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a detached logger with the `Info` threshold and no handlers
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(LogLevel::Info.code()),
            handlers: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current severity threshold
    pub fn level(&self) -> i32 {
        *self.level.read()
    }

    /// Set the severity threshold; any integer is accepted
    pub fn set_level(&self, level: impl Into<i32>) {
        *self.level.write() = level.into();
    }

    pub fn is_enabled_for(&self, level: impl Into<i32>) -> bool {
        level.into() >= self.level()
    }

    pub fn add_handler(&self, handler: Box<dyn Handler>) {
        self.handlers.write().push(handler);
    }

    /// Attach several handlers under one lock, preserving their order
    pub fn add_handlers(&self, handlers: impl IntoIterator<Item = Box<dyn Handler>>) {
        self.handlers.write().extend(handlers);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Names of attached handlers, in attachment order
    pub fn handler_names(&self) -> Vec<String> {
        self.handlers
            .read()
            .iter()
            .map(|h| h.name().to_string())
            .collect()
    }

    /// Detach every handler, flushing each one first
    ///
    /// Returns the number of handlers removed.
    pub fn clear_handlers(&self) -> usize {
        self.replace_handlers(Vec::new())
    }

    /// Swap the whole handler list under one write lock
    ///
    /// The previous handlers are flushed before they are dropped. Returns
    /// the number of handlers removed.
    pub fn replace_handlers(&self, handlers: impl IntoIterator<Item = Box<dyn Handler>>) -> usize {
        let mut current = self.handlers.write();
        for handler in current.iter_mut() {
            if let Err(e) = handler.flush() {
                eprintln!(
                    "[LOGGER ERROR] Handler '{}' of logger '{}' failed to flush on removal: {}",
                    handler.name(),
                    self.name,
                    e
                );
            }
        }
        let removed = current.len();
        *current = handlers.into_iter().collect();
        removed
    }

    pub fn log(&self, level: impl Into<i32>, message: impl AsRef<str>) {
        let level = level.into();
        if !self.is_enabled_for(level) {
            self.metrics.record_filtered();
            return;
        }

        self.dispatch(&LogRecord::new(self.name.as_str(), level, message));
    }

    /// Log with caller-supplied fields, addressable from templates by name
    pub fn log_with_fields<K, V>(
        &self,
        level: impl Into<i32>,
        message: impl AsRef<str>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: ToString,
    {
        let level = level.into();
        if !self.is_enabled_for(level) {
            self.metrics.record_filtered();
            return;
        }

        let record = LogRecord::new(self.name.as_str(), level, message).with_fields(fields);
        self.dispatch(&record);
    }

    /// Log a fully built record; the record's level is checked against the threshold
    pub fn log_record(&self, record: LogRecord) {
        if !self.is_enabled_for(record.level) {
            self.metrics.record_filtered();
            return;
        }

        self.dispatch(&record);
    }

    /// Hand a record to every handler with per-handler failure isolation
    ///
    /// A handler that errors or panics is reported on stderr and counted;
    /// the remaining handlers still receive the record.
    fn dispatch(&self, record: &LogRecord) {
        self.metrics.record_emitted();

        let mut handlers = self.handlers.write();
        for (idx, handler) in handlers.iter_mut().enumerate() {
            let emit_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler.emit(record)));

            match emit_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Handler #{} ({}) of logger '{}' failed: {}",
                        idx,
                        handler.name(),
                        self.name,
                        e
                    );
                    self.metrics.record_handler_error();
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Handler #{} of logger '{}' panicked: {}. \
                         Other handlers continue to function.",
                        idx,
                        self.name,
                        panic_message(&*panic_info)
                    );
                    self.metrics.record_handler_error();
                }
            }
        }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.write();
        for handler in handlers.iter_mut() {
            handler.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("handlers", &self.handler_names())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush logger '{}' on drop: {}", self.name, e);
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
