//! Handler trait for log output destinations

use super::{error::Result, formatter::Formatter, log_record::LogRecord};

pub trait Handler: Send + Sync {
    /// Format and write one record
    fn emit(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
    fn formatter(&self) -> &Formatter;
}
