//! File handler implementation

use crate::core::{Formatter, Handler, LogRecord, LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How an existing log file is treated when the handler opens it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FileMode {
    /// Keep existing content and write after it (`"a"`)
    #[default]
    Append,
    /// Truncate the file on open (`"w"`)
    Overwrite,
}

impl FileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileMode::Append => "a",
            FileMode::Overwrite => "w",
        }
    }

    fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.create(true);
        match self {
            FileMode::Append => options.append(true),
            FileMode::Overwrite => options.write(true).truncate(true),
        };
        options
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "a" | "append" => Ok(FileMode::Append),
            "w" | "overwrite" => Ok(FileMode::Overwrite),
            _ => Err(LoggerError::config(
                "FileMode",
                format!("mode must be 'a' (append) or 'w' (overwrite), got '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for FileMode {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FileMode> for String {
    fn from(mode: FileMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Writes one formatted line per record and flushes after every record
pub struct FileHandler {
    path: PathBuf,
    mode: FileMode,
    writer: Option<BufWriter<File>>,
    formatter: Formatter,
}

impl FileHandler {
    /// Open (creating if needed) the file at `path`
    ///
    /// The parent directory must exist. Open failures keep the IO error as
    /// the source of [`LoggerError::FileHandler`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use logger_config::handlers::{FileHandler, FileMode};
    /// use logger_config::Formatter;
    ///
    /// let handler = FileHandler::open("/var/log/app.log", FileMode::Append, Formatter::default())
    ///     .unwrap();
    /// ```
    pub fn open(path: impl Into<PathBuf>, mode: FileMode, formatter: Formatter) -> Result<Self> {
        let path = path.into();
        let file = mode
            .open_options()
            .open(&path)
            .map_err(|e| LoggerError::file_handler(path.display().to_string(), e))?;

        Ok(Self {
            path,
            mode,
            writer: Some(BufWriter::new(file)),
            formatter,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }
}

impl Handler for FileHandler {
    fn emit(&mut self, record: &LogRecord) -> Result<()> {
        let mut line = self.formatter.format(record)?;
        line.push('\n');

        let writer = self.writer.as_mut().ok_or_else(|| {
            LoggerError::file_handler(
                self.path.display().to_string(),
                std::io::Error::other("file writer not initialized"),
            )
        })?;
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

impl Drop for FileHandler {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
