//! Snapshot of the `PODCAST_ARCHIVER_*` environment.
//!
//! Resolution never reads the process environment directly; the entry point
//! takes one [`Environment`] snapshot and passes it down, tests build their own.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::defaults::{CONFIG_ENV_VAR, ENV_PREFIX};
use super::error::ConfigError;
use super::field::Field;
use super::paths::expand_home;
use super::value::{FieldValue, FieldValues};

/// Namespaced environment variables, keyed by upper-cased name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Captures the relevant variables of the current process.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_pairs(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Builds a snapshot from name/value pairs. Names are matched case-insensitively.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.as_ref().to_ascii_uppercase();
                key.starts_with(ENV_PREFIX).then(|| (key, value.into()))
            })
            .collect();

        Self { vars }
    }

    /// Returns true if no namespaced variable is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the config file designated by `PODCAST_ARCHIVER_CONFIG`.
    ///
    /// An unset or empty variable yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigNotFound`] if the variable is set but the
    /// (tilde-expanded) path does not name an existing file.
    pub fn config_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        let Some(raw) = self.vars.get(CONFIG_ENV_VAR).filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };

        let path = expand_home(Path::new(raw));
        if !path.is_file() {
            return Err(ConfigError::ConfigNotFound { path });
        }

        Ok(Some(path))
    }

    /// Decodes the per-field variables (`PODCAST_ARCHIVER_<FIELD>`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable cannot be decoded
    /// into its field's shape.
    pub fn field_values(&self) -> Result<FieldValues, ConfigError> {
        let mut values = FieldValues::new();

        for field in Field::ALL {
            let key = format!("{ENV_PREFIX}{}", field.name().to_ascii_uppercase());
            if let Some(raw) = self.vars.get(&key) {
                values.insert(field, FieldValue::parse_text(field, raw)?);
            }
        }

        Ok(values)
    }
}
