//! Logger configuration: format templates from flags, and loggers from settings

pub mod format_spec;
pub mod logger_config;

pub use format_spec::{build_format, FormatSpec, CANONICAL_FIELDS};
pub use logger_config::{LoggerConfig, DEFAULT_FORMAT, DEFAULT_LOG_PATH};
