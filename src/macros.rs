//! Logging macros with `format!`-style arguments
//!
//! Unlike the plain `Logger` methods, the macros record the call site, so
//! templates can use `%(pathname)s`, `%(filename)s`, `%(module)s` and
//! `%(lineno)d`.
//!
//! # Examples
//!
//! ```
//! use logger_config::prelude::*;
//! use logger_config::info;
//!
//! let registry = LoggerRegistry::new();
//! let logger = LoggerConfig::new("server", LogLevel::Info)
//!     .formatter("%(filename)s:%(lineno)d %(message)s")
//!     .get_logger_in(&registry)
//!     .unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at any level (a [`LogLevel`](crate::LogLevel) or an `i32` code).
///
/// ```
/// # use logger_config::prelude::*;
/// # let logger = Logger::new("app");
/// use logger_config::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, 35, "Between warn and error: {}", 35);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        logger.log_record(
            $crate::LogRecord::new(
                logger.name(),
                ::core::convert::Into::<i32>::into($level),
                format!($($arg)+),
            )
            .with_location(file!(), line!(), module_path!()),
        )
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
