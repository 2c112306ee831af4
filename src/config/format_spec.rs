//! Format templates assembled from named boolean flags
//!
//! The four canonical fields always come first, in the order
//! `name`, `asctime`, `levelname`, `message`; extra fields follow in the
//! order they were supplied. Only fields whose flag is `true` appear, each as
//! a `%(field)s` placeholder, separated by single spaces.
//!
//! An extra field that repeats a canonical field, or an earlier extra,
//! overwrites that entry's flag but keeps its position.

use serde::{Deserialize, Serialize};

pub const CANONICAL_FIELDS: [&str; 4] = ["name", "asctime", "levelname", "message"];

/// Build a template from flags
///
/// # Examples
///
/// ```
/// use logger_config::config::build_format;
///
/// assert_eq!(
///     build_format(true, false, true, true, &[]),
///     "%(name)s %(levelname)s %(message)s"
/// );
/// assert_eq!(build_format(false, false, false, true, &[("lineno", true)]),
///     "%(message)s %(lineno)s");
/// assert_eq!(build_format(false, false, false, false, &[]), "");
/// ```
pub fn build_format(
    name: bool,
    asctime: bool,
    levelname: bool,
    message: bool,
    extra_fields: &[(&str, bool)],
) -> String {
    FormatSpec::new()
        .name(name)
        .asctime(asctime)
        .levelname(levelname)
        .message(message)
        .fields(extra_fields.iter().copied())
        .build()
}

/// Fluent form of [`build_format`]
///
/// ```
/// use logger_config::config::FormatSpec;
///
/// let template = FormatSpec::new()
///     .asctime(true)
///     .message(true)
///     .field("lineno", true)
///     .build();
/// assert_eq!(template, "%(asctime)s %(message)s %(lineno)s");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSpec {
    pub name: bool,
    pub asctime: bool,
    pub levelname: bool,
    pub message: bool,
    /// Extra `(field, included)` pairs in call order
    pub extra: Vec<(String, bool)>,
}

impl FormatSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, include: bool) -> Self {
        self.name = include;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn asctime(mut self, include: bool) -> Self {
        self.asctime = include;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn levelname(mut self, include: bool) -> Self {
        self.levelname = include;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn message(mut self, include: bool) -> Self {
        self.message = include;
        self
    }

    /// Append one extra field
    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, field: impl Into<String>, include: bool) -> Self {
        self.extra.push((field.into(), include));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = (S, bool)>) -> Self {
        self.extra
            .extend(fields.into_iter().map(|(field, include)| (field.into(), include)));
        self
    }

    /// Every field with its effective flag, in template order
    pub fn entries(&self) -> Vec<(&str, bool)> {
        let mut entries: Vec<(&str, bool)> = CANONICAL_FIELDS
            .iter()
            .copied()
            .zip([self.name, self.asctime, self.levelname, self.message])
            .collect();

        for (field, include) in &self.extra {
            match entries.iter_mut().find(|(existing, _)| *existing == field.as_str()) {
                Some(entry) => entry.1 = *include,
                None => entries.push((field.as_str(), *include)),
            }
        }
        entries
    }

    /// Names of the included fields, in template order
    pub fn included(&self) -> Vec<&str> {
        self.entries()
            .into_iter()
            .filter_map(|(field, include)| include.then_some(field))
            .collect()
    }

    pub fn build(&self) -> String {
        self.included()
            .iter()
            .map(|field| format!("%({})s", field))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
