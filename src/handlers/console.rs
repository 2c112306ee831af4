//! Console handler implementation

use crate::core::{Formatter, Handler, LogRecord, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Stream a [`ConsoleHandler`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

pub struct ConsoleHandler {
    formatter: Formatter,
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleHandler {
    /// Write to stderr without colors
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter,
            target: ConsoleTarget::default(),
            use_colors: false,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    /// Color whole lines by level (requires the `console` feature)
    ///
    /// # Example
    ///
    /// ```
    /// use logger_config::handlers::ConsoleHandler;
    /// use logger_config::Formatter;
    ///
    /// let handler = ConsoleHandler::new(Formatter::default()).with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    #[cfg(feature = "console")]
    fn paint(&self, line: String, record: &LogRecord) -> String {
        match record.named_level() {
            Some(level) if self.use_colors => line.color(level.color_code()).to_string(),
            _ => line,
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, line: String, _record: &LogRecord) -> String {
        line
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new(Formatter::default())
    }
}

impl Handler for ConsoleHandler {
    fn emit(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.paint(self.formatter.format(record)?, record);

        match self.target {
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let handler = ConsoleHandler::default();
        assert_eq!(handler.target(), ConsoleTarget::Stderr);
        assert_eq!(handler.name(), "console");
        assert_eq!(handler.formatter().template(), "%(message)s");
    }

    #[test]
    fn test_emit_to_stdout() {
        let mut handler = ConsoleHandler::new(Formatter::new("%(levelname)s %(message)s").unwrap())
            .with_target(ConsoleTarget::Stdout);
        let record = LogRecord::new("app", 20, "console output");
        assert!(handler.emit(&record).is_ok());
        assert!(handler.flush().is_ok());
    }

    #[test]
    fn test_emit_propagates_format_errors() {
        let mut handler = ConsoleHandler::new(Formatter::new("%(user)s").unwrap());
        let record = LogRecord::new("app", 20, "x");
        assert!(handler.emit(&record).is_err());
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colors_only_wrap_named_levels() {
        colored::control::set_override(true);
        let handler = ConsoleHandler::default().with_colors(true);

        let named = handler.paint("line".to_string(), &LogRecord::new("app", 40, "x"));
        let unnamed = handler.paint("line".to_string(), &LogRecord::new("app", 41, "x"));

        assert!(named.contains("\u{1b}["));
        assert_eq!(unnamed, "line");
        colored::control::unset_override();
    }
}
