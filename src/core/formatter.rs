//! `%(field)s` template formatter
//!
//! A template is literal text mixed with placeholders of the form
//! `%(field)[-][width]conv`, where `conv` is one of:
//! - `s`: the field's text
//! - `d`: the field as an integer
//! - `r`: the field quoted (`'text'`), numbers unchanged
//!
//! `%%` renders a literal percent sign. The template is parsed once, when
//! the formatter is built; a malformed template is rejected there. Field
//! names are resolved per record, so a name the record does not carry is
//! only reported when a record is formatted.
//!
//! # Example
//!
//! ```
//! use logger_config::core::{Formatter, LogRecord};
//!
//! let formatter = Formatter::new("%(name)s %(levelname)-5s %(message)s").unwrap();
//! let record = LogRecord::new("app", 30, "disk almost full");
//! assert_eq!(formatter.format(&record).unwrap(), "app WARN  disk almost full");
//! ```

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use std::borrow::Cow;

/// Template used when an empty template is supplied
pub const DEFAULT_TEMPLATE: &str = "%(message)s";

/// Widest padding a placeholder may request
pub const MAX_FIELD_WIDTH: usize = 1024;

/// Fields every record provides
pub const BUILTIN_FIELDS: [&str; 15] = [
    "name",
    "levelname",
    "levelno",
    "message",
    "asctime",
    "created",
    "msecs",
    "lineno",
    "funcName",
    "module",
    "pathname",
    "filename",
    "thread",
    "threadName",
    "process",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Str,
    Int,
    Repr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Placeholder {
    field: String,
    left_align: bool,
    width: Option<usize>,
    conversion: Conversion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

enum Value<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    Float(f64),
}

/// Parsed format template bound to a timestamp style
#[derive(Debug, Clone)]
pub struct Formatter {
    template: String,
    segments: Vec<Segment>,
    timestamp_format: TimestampFormat,
}

impl Formatter {
    /// Parse a template; an empty template falls back to [`DEFAULT_TEMPLATE`]
    pub fn new(template: &str) -> Result<Self> {
        let template = if template.is_empty() {
            DEFAULT_TEMPLATE
        } else {
            template
        };

        Ok(Self {
            template: template.to_string(),
            segments: parse(template)?,
            timestamp_format: TimestampFormat::default(),
        })
    }

    /// Set how `%(asctime)s` is rendered
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Field names referenced by the template, in order of appearance
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(placeholder) => Some(placeholder.field.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn uses_field(&self, field: &str) -> bool {
        self.fields().any(|f| f == field)
    }

    /// Render one record as a single line (without trailing newline)
    pub fn format(&self, record: &LogRecord) -> Result<String> {
        let mut out = String::with_capacity(self.template.len() + record.message.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(placeholder) => {
                    let value = self.resolve(&placeholder.field, record)?;
                    let rendered = convert(&placeholder.field, value, placeholder.conversion)?;
                    pad_into(&mut out, &rendered, placeholder);
                }
            }
        }

        Ok(out)
    }

    fn resolve<'a>(&self, field: &str, record: &'a LogRecord) -> Result<Value<'a>> {
        let location = record.location.as_ref();
        let value = match field {
            "name" => Value::Text(Cow::Borrowed(record.logger_name.as_str())),
            "levelname" => Value::Text(Cow::Owned(record.level_name())),
            "levelno" => Value::Int(i64::from(record.level)),
            "message" => Value::Text(Cow::Borrowed(record.message.as_str())),
            "asctime" => Value::Text(Cow::Owned(self.timestamp_format.format(&record.timestamp))),
            "created" => Value::Float(record.timestamp.timestamp_micros() as f64 / 1_000_000.0),
            "msecs" => Value::Int(i64::from(record.timestamp.timestamp_subsec_millis())),
            "lineno" => Value::Int(location.map_or(0, |loc| i64::from(loc.line))),
            "funcName" => Value::Text(Cow::Borrowed(
                record.function.as_deref().unwrap_or("(unknown function)"),
            )),
            "module" => Value::Text(Cow::Borrowed(
                location
                    .and_then(|loc| loc.module_path.rsplit("::").next())
                    .unwrap_or("(unknown module)"),
            )),
            "pathname" => Value::Text(Cow::Borrowed(
                location.map_or("(unknown file)", |loc| loc.file.as_str()),
            )),
            "filename" => Value::Text(Cow::Borrowed(
                location
                    .and_then(|loc| loc.file.rsplit(['/', '\\']).next())
                    .unwrap_or("(unknown file)"),
            )),
            "thread" => Value::Text(Cow::Borrowed(record.thread_id.as_str())),
            "threadName" => Value::Text(Cow::Borrowed(
                record.thread_name.as_deref().unwrap_or(record.thread_id.as_str()),
            )),
            "process" => Value::Int(i64::from(record.process_id)),
            other => match record.field(other) {
                Some(value) => Value::Text(Cow::Borrowed(value)),
                None => return Err(LoggerError::unknown_field(other)),
            },
        };
        Ok(value)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            segments: vec![Segment::Field(Placeholder {
                field: "message".to_string(),
                left_align: false,
                width: None,
                conversion: Conversion::Str,
            })],
            timestamp_format: TimestampFormat::default(),
        }
    }
}

fn parse(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }

        match chars.next() {
            Some((_, '%')) => literal.push('%'),
            Some((open, '(')) => {
                let rest = &template[open + 1..];
                let close = rest
                    .find(')')
                    .ok_or_else(|| LoggerError::formatter(template, "unterminated field name"))?;
                let field = &rest[..close];
                if field.is_empty() {
                    return Err(LoggerError::formatter(template, "empty field name"));
                }
                // Skip the field name and the closing parenthesis
                for _ in 0..=field.chars().count() {
                    chars.next();
                }

                let left_align = chars.next_if(|&(_, c)| c == '-').is_some();
                let mut digits = String::new();
                while let Some((_, d)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
                    digits.push(d);
                }
                let width = if digits.is_empty() {
                    None
                } else {
                    let out_of_range = || {
                        LoggerError::formatter(
                            template,
                            format!("width '{}' out of range (max {})", digits, MAX_FIELD_WIDTH),
                        )
                    };
                    let width = digits.parse::<usize>().map_err(|_| out_of_range())?;
                    if width > MAX_FIELD_WIDTH {
                        return Err(out_of_range());
                    }
                    Some(width)
                };

                let conversion = match chars.next() {
                    Some((_, 's')) => Conversion::Str,
                    Some((_, 'd')) => Conversion::Int,
                    Some((_, 'r')) => Conversion::Repr,
                    Some((_, other)) => {
                        return Err(LoggerError::formatter(
                            template,
                            format!("unsupported conversion '{}' for field '{}'", other, field),
                        ))
                    }
                    None => {
                        return Err(LoggerError::formatter(
                            template,
                            format!("missing conversion for field '{}'", field),
                        ))
                    }
                };

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(Placeholder {
                    field: field.to_string(),
                    left_align,
                    width,
                    conversion,
                }));
            }
            Some((_, other)) => {
                return Err(LoggerError::formatter(
                    template,
                    format!("expected '(' or '%' after '%', found '{}'", other),
                ))
            }
            None => return Err(LoggerError::formatter(template, "dangling '%' at end")),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn convert(field: &str, value: Value<'_>, conversion: Conversion) -> Result<String> {
    let rendered = match (conversion, value) {
        (Conversion::Str, Value::Text(text)) => text.into_owned(),
        (Conversion::Str, Value::Int(n)) => n.to_string(),
        (Conversion::Str, Value::Float(f)) => f.to_string(),
        (Conversion::Int, Value::Int(n)) => n.to_string(),
        (Conversion::Int, Value::Float(f)) => (f.trunc() as i64).to_string(),
        (Conversion::Int, Value::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| LoggerError::formatter(format!("%({})d", field), "value is not a number"))?
            .to_string(),
        (Conversion::Repr, Value::Text(text)) => format!("'{}'", text.replace('\'', "\\'")),
        (Conversion::Repr, Value::Int(n)) => n.to_string(),
        (Conversion::Repr, Value::Float(f)) => f.to_string(),
    };
    Ok(rendered)
}

fn pad_into(out: &mut String, rendered: &str, placeholder: &Placeholder) {
    let fill = placeholder
        .width
        .map_or(0, |w| w.saturating_sub(rendered.chars().count()));
    if placeholder.left_align {
        out.push_str(rendered);
        out.push_str(&" ".repeat(fill));
    } else {
        out.push_str(&" ".repeat(fill));
        out.push_str(rendered);
    }
}
