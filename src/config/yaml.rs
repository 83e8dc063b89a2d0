//! YAML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;
use super::field::Field;
use super::value::{FieldValue, FieldValues};

/// Root configuration structure from the YAML file.
///
/// All fields are optional so that absent keys keep their defaults.
/// Unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    /// Feed URLs or local feed files
    pub feeds: Option<Vec<String>>,

    /// OPML files containing further feeds
    pub opml_files: Option<Vec<PathBuf>>,

    /// Output directory of the archive
    pub archive_directory: Option<PathBuf>,

    /// One subdirectory per podcast
    pub create_subdirectories: Option<bool>,

    /// Stop at the first already archived episode
    pub update_archive: Option<bool>,

    /// Verbosity level
    pub verbose: Option<u8>,

    /// Show progress bars while downloading
    pub show_progress_bars: Option<bool>,

    /// Sanitize file and directory names
    pub slugify_paths: Option<bool>,

    /// Episodes per feed (0 = unlimited)
    pub maximum_episode_count: Option<u32>,

    /// Prefix episode files with their publication date
    pub add_date_prefix: Option<bool>,
}

impl YamlConfig {
    /// Loads configuration from a YAML file.
    ///
    /// The file handle is released before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// An empty document, or one that is only comments or `null`, yields an
    /// empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, contains unknown keys, or
    /// a value has the wrong type. The message names the offending key and
    /// carries the parser's location.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let parsed: Option<Self> = serde_yaml::from_str(content)?;
        Ok(parsed.unwrap_or_default())
    }

    /// Converts the keys present in the document into field values.
    #[must_use]
    pub fn into_values(self) -> FieldValues {
        let mut values = FieldValues::new();
        let mut set = |field: Field, value: Option<FieldValue>| {
            if let Some(value) = value {
                values.insert(field, value);
            }
        };

        set(Field::Feeds, self.feeds.map(FieldValue::Strings));
        set(Field::OpmlFiles, self.opml_files.map(FieldValue::Paths));
        set(
            Field::ArchiveDirectory,
            self.archive_directory.map(|dir| FieldValue::Directory(Some(dir))),
        );
        set(
            Field::CreateSubdirectories,
            self.create_subdirectories.map(FieldValue::Flag),
        );
        set(Field::UpdateArchive, self.update_archive.map(FieldValue::Flag));
        set(Field::Verbose, self.verbose.map(FieldValue::Count));
        set(
            Field::ShowProgressBars,
            self.show_progress_bars.map(FieldValue::Flag),
        );
        set(Field::SlugifyPaths, self.slugify_paths.map(FieldValue::Flag));
        set(
            Field::MaximumEpisodeCount,
            self.maximum_episode_count.map(FieldValue::Number),
        );
        set(Field::AddDatePrefix, self.add_date_prefix.map(FieldValue::Flag));

        values
    }
}
