//! Error types for the logger configuration layer

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Opening the log file failed; the underlying IO error is kept as source
    #[error("Cannot open log file '{path}': {source}")]
    FileHandler {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Malformed format template
    #[error("Invalid format template '{template}': {message}")]
    Formatter { template: String, message: String },

    /// Template references a field the record does not carry
    #[error("Unknown format field '{field}'")]
    UnknownField { field: String },
}

impl LoggerError {
    /// Create a file handler error from the failed open
    pub fn file_handler(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileHandler {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Formatter {
            template: template.into(),
            message: message.into(),
        }
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        LoggerError::UnknownField {
            field: field.into(),
        }
    }

    /// Kind of the underlying IO error, if this error came from the filesystem
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            LoggerError::FileHandler { source, .. } => Some(source.kind()),
            LoggerError::Io(err) => Some(err.kind()),
            _ => None,
        }
    }
}
