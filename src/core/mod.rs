//! Core logging runtime: records, levels, templates, loggers and the registry

pub mod error;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use formatter::{Formatter, BUILTIN_FIELDS, DEFAULT_TEMPLATE, MAX_FIELD_WIDTH};
pub use handler::Handler;
pub use log_level::LogLevel;
pub use log_record::{Location, LogRecord};
pub use logger::{Logger, LoggerHandle};
pub use metrics::LoggerMetrics;
pub use registry::LoggerRegistry;
pub use timestamp::TimestampFormat;
