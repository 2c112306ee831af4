//! Logger metrics for observability
//!
//! Counters for records handed to handlers, records filtered out by the
//! level threshold, and handler failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use logger_config::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_handler_error();
///
/// assert_eq!(metrics.emitted(), 1);
/// assert_eq!(metrics.handler_errors(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records that passed the threshold and reached the handlers
    emitted: AtomicU64,

    /// Records rejected by the level threshold
    filtered: AtomicU64,

    /// Individual handler failures (one record can fail on several handlers)
    handler_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            handler_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handler_errors(&self) -> u64 {
        self.handler_errors.load(Ordering::Relaxed)
    }

    /// Record an emitted record, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handler_error(&self) -> u64 {
        self.handler_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.handler_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            emitted: AtomicU64::new(self.emitted()),
            filtered: AtomicU64::new(self.filtered()),
            handler_errors: AtomicU64::new(self.handler_errors()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.handler_errors(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_filtered(), 0);
        assert_eq!(metrics.record_filtered(), 1);
        assert_eq!(metrics.filtered(), 2);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_filtered();
        metrics.record_handler_error();

        metrics.reset();

        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.handler_errors(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();

        let snapshot = metrics.clone();
        metrics.record_emitted();

        assert_eq!(metrics.emitted(), 2);
        assert_eq!(snapshot.emitted(), 1);
    }
}
