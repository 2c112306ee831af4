//! Registry of named loggers
//!
//! A registry maps names to shared [`LoggerHandle`]s. Asking twice for the
//! same name returns the same logger, so configuration applied through one
//! handle is visible through every other. Registries are ordinary values and
//! can be created per test or per subsystem; [`LoggerRegistry::global`] is
//! the process-wide instance used when no registry is passed explicitly.

use super::logger::{Logger, LoggerHandle};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, LoggerHandle>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL_REGISTRY.get_or_init(LoggerRegistry::new)
    }

    /// Return the logger registered under `name`, creating it on first use
    pub fn get_or_create(&self, name: &str) -> LoggerHandle {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        // Another thread may have registered it between the two locks
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name))),
        )
    }

    pub fn get(&self, name: &str) -> Option<LoggerHandle> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Unregister a logger; handles already handed out keep working
    pub fn remove(&self, name: &str) -> Option<LoggerHandle> {
        self.loggers.write().remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.names())
            .finish()
    }
}
