//! # Logger Config
//!
//! Ready-to-use named loggers from a few settings, and format templates
//! from named boolean flags.
//!
//! ## Features
//!
//! - **Format builder**: `%(field)s` templates assembled from flags in a fixed order
//! - **Logger factory**: name, level, console and optional file output in one call
//! - **Explicit registry**: named loggers live in a registry value you own
//! - **Append or overwrite**: log files are opened in the configured mode
//!
//! ## Example
//!
//! ```no_run
//! use logger_config::prelude::*;
//!
//! let template = LoggerConfig::format(true, true, true, true, &[]);
//! let logger = LoggerConfig::new("app", LogLevel::Debug)
//!     .log_file("app.log")
//!     .formatter(template)
//!     .get_logger()?;
//!
//! logger.debug("ready");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod config;
pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::config::{build_format, FormatSpec, LoggerConfig};
    pub use crate::core::{
        Formatter, Handler, LogLevel, LogRecord, Logger, LoggerError, LoggerHandle,
        LoggerMetrics, LoggerRegistry, Result, TimestampFormat,
    };
    pub use crate::handlers::{ConsoleHandler, ConsoleTarget, FileHandler, FileMode};
}

pub use crate::config::{build_format, FormatSpec, LoggerConfig};
pub use crate::core::{
    Formatter, Handler, Location, LogLevel, LogRecord, Logger, LoggerError, LoggerHandle,
    LoggerMetrics, LoggerRegistry, Result, TimestampFormat,
};
pub use crate::handlers::{ConsoleHandler, ConsoleTarget, FileHandler, FileMode};
