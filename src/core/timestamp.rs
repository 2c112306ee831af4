//! Timestamp formatting for the `asctime` template field

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// How `%(asctime)s` is rendered
///
/// # Examples
///
/// ```
/// use logger_config::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time with comma-separated milliseconds: `2025-01-08 10:30:45,123`
    #[default]
    Asctime,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// strftime-compatible format, rendered in local time
    ///
    /// ```
    /// use logger_config::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Asctime => datetime
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S,%3f")
                .to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                datetime.with_timezone(&Local).format(format_str).to_string()
            }
        }
    }
}
