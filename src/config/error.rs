//! Error types for configuration loading, merging and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant aborts resolution; no partially resolved settings are
/// ever handed back alongside an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file designated by the environment does not exist.
    #[error("Config file '{}' does not exist", path.display())]
    ConfigNotFound {
        /// Path taken from the environment, after tilde expansion
        path: PathBuf,
    },

    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the YAML document, or the document does not match the schema.
    #[error("Failed to parse YAML config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Failed to write a file (for `--config-generate`).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A field received a value of the wrong type or outside its range.
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// The offending value, rendered as text
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A path-valued field points at nothing.
    #[error("Invalid value for {field}: path '{}' does not exist", path.display())]
    PathNotFound {
        /// Name of the field
        field: &'static str,
        /// The offending path
        path: PathBuf,
    },

    /// A directory-valued field points at something that is not a directory.
    #[error("Invalid value for {field}: path '{}' is not a directory", path.display())]
    NotADirectory {
        /// Name of the field
        field: &'static str,
        /// The offending path
        path: PathBuf,
    },

    /// A file-valued field points at something that is not a regular file.
    #[error("Invalid value for {field}: path '{}' is not a file", path.display())]
    NotAFile {
        /// Name of the field
        field: &'static str,
        /// The offending path
        path: PathBuf,
    },

    /// The current working directory could not be determined.
    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl ConfigError {
    /// Creates an `InvalidValue` error for the given field.
    #[must_use]
    pub fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error concerns locating or parsing the config file.
    #[must_use]
    pub const fn is_config_file_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::FileRead { .. } | Self::YamlParse(_)
        )
    }
}
