//! Typed values carried between configuration sources.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::error::ConfigError;
use super::field::Field;

/// A set of explicitly-set fields, ordered by declaration.
pub type FieldValues = BTreeMap<Field, FieldValue>;

/// The value of one setting, as supplied by a source or held by [`Settings`].
///
/// The variant of a field's declared default fixes the shape every source
/// must supply for that field.
///
/// [`Settings`]: super::Settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Ordered list of strings
    Strings(Vec<String>),
    /// Ordered list of file paths
    Paths(Vec<PathBuf>),
    /// Directory path; `None` stands for the current directory
    Directory(Option<PathBuf>),
    /// Boolean switch
    Flag(bool),
    /// Occurrence counter
    Count(u8),
    /// Non-negative integer
    Number(u32),
}

impl FieldValue {
    /// Returns a short name for the shape of this value, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Strings(_) => "a list of strings",
            Self::Paths(_) => "a list of file paths",
            Self::Directory(_) => "a directory path",
            Self::Flag(_) => "a boolean",
            Self::Count(_) => "a counter",
            Self::Number(_) => "a non-negative integer",
        }
    }

    /// Returns true for list-valued shapes.
    #[cfg(test)]
    pub(crate) const fn is_list(&self) -> bool {
        matches!(self, Self::Strings(_) | Self::Paths(_))
    }

    /// Concatenates two lists of the same shape, `self` first.
    ///
    /// Returns `None` if either side is not a list or the shapes differ.
    /// Duplicates are kept.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Strings(current), Self::Strings(supplied)) => {
                Some(Self::Strings(current.iter().chain(supplied).cloned().collect()))
            }
            (Self::Paths(current), Self::Paths(supplied)) => {
                Some(Self::Paths(current.iter().chain(supplied).cloned().collect()))
            }
            _ => None,
        }
    }

    /// Decodes a textual value (from an environment variable) for `field`.
    ///
    /// Lists are JSON arrays of strings, booleans accept the usual spellings
    /// (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`). A blank directory
    /// stands for the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the field if `raw` cannot
    /// be decoded into the field's shape.
    pub fn parse_text(field: Field, raw: &str) -> Result<Self, ConfigError> {
        let name = field.name();
        let invalid = |reason: String| ConfigError::invalid(name, raw, reason);

        match field.spec().default {
            Self::Strings(_) => serde_json::from_str::<Vec<String>>(raw)
                .map(Self::Strings)
                .map_err(|e| invalid(e.to_string())),
            Self::Paths(_) => serde_json::from_str::<Vec<PathBuf>>(raw)
                .map(Self::Paths)
                .map_err(|e| invalid(e.to_string())),
            Self::Directory(_) => {
                let raw = raw.trim();
                Ok(Self::Directory((!raw.is_empty()).then(|| PathBuf::from(raw))))
            }
            Self::Flag(_) => parse_bool(raw)
                .map(Self::Flag)
                .ok_or_else(|| invalid("expected a boolean".to_string())),
            Self::Count(_) => raw
                .trim()
                .parse::<u8>()
                .map(Self::Count)
                .map_err(|e| invalid(e.to_string())),
            Self::Number(_) => raw
                .trim()
                .parse::<u32>()
                .map(Self::Number)
                .map_err(|e| invalid(e.to_string())),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strings(items) => {
                let items: Vec<&str> = items.iter().map(String::as_str).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Self::Paths(items) => {
                let items: Vec<String> = items.iter().map(|p| p.display().to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Self::Directory(Some(path)) => write!(f, "{}", path.display()),
            Self::Directory(None) => f.write_str("null"),
            Self::Flag(value) => write!(f, "{value}"),
            Self::Count(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
