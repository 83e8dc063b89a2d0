//! Resolved settings after merging defaults, environment, YAML and CLI sources.
//!
//! A [`Settings`] value only exists in validated form: every constructor runs
//! the path rules of the registry, so `archive_directory` always names an
//! existing directory and every entry of `opml_files` an existing file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::env::Environment;
use super::error::ConfigError;
use super::field::{Field, MergeKind};
use super::value::{FieldValue, FieldValues};
use super::yaml::YamlConfig;

/// Fully resolved configuration handed to the archiving pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // mirrors the boolean switches of the CLI
pub struct Settings {
    /// Feed URLs or local feed files
    pub feeds: Vec<String>,

    /// Canonical paths of OPML files containing further feeds
    pub opml_files: Vec<PathBuf>,

    /// Canonical output directory of the archive
    pub archive_directory: PathBuf,

    /// Place each podcast in its own subdirectory
    pub create_subdirectories: bool,

    /// Stop at the first already archived episode
    pub update_archive: bool,

    /// Verbosity level
    pub verbose: u8,

    /// Show progress bars while downloading
    pub show_progress_bars: bool,

    /// Sanitize file and directory names
    pub slugify_paths: bool,

    /// Episodes per feed (0 = unlimited)
    pub maximum_episode_count: u32,

    /// Prefix episode files with their publication date
    pub add_date_prefix: bool,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{ feeds: {}, opml_files: {}, archive_directory: {}, subdirs: {}, \
             update: {}, verbose: {}, progress: {}, slugify: {}, max_episodes: {}, \
             date_prefix: {} }}",
            self.feeds.len(),
            self.opml_files.len(),
            self.archive_directory.display(),
            self.create_subdirectories,
            self.update_archive,
            self.verbose,
            self.show_progress_bars,
            self.slugify_paths,
            self.maximum_episode_count,
            self.add_date_prefix,
        )
    }
}

impl Settings {
    /// Creates settings with every field at its declared default.
    ///
    /// `archive_directory` resolves to the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CurrentDir`] if the current directory cannot be determined.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_values(FieldValues::new())
    }

    /// Creates validated settings from a set of explicitly-set fields.
    ///
    /// Fields missing from `values` take their declared default. Every field
    /// then passes through its path rule, so paths are expanded,
    /// canonicalized and checked for existence.
    ///
    /// # Errors
    ///
    /// Returns an error naming the field if a value has the wrong shape or a
    /// path does not exist.
    pub fn from_values(mut values: FieldValues) -> Result<Self, ConfigError> {
        let mut settings = Self::blank();

        for field in Field::ALL {
            let value = values
                .remove(&field)
                .unwrap_or_else(|| field.default_value());
            let value = field.spec().rule.apply(field.name(), value)?;
            settings.assign(field, value)?;
        }

        Ok(settings)
    }

    /// Loads settings from a YAML file and the environment.
    ///
    /// The file is `explicit_path` if that names an existing file, otherwise
    /// the one designated by `PODCAST_ARCHIVER_CONFIG`. Keys of the document
    /// override per-field environment variables, which override defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `PODCAST_ARCHIVER_CONFIG` is set but names no existing file
    /// - The file cannot be read or is not valid YAML
    /// - The document contains unknown keys or invalid values
    /// - A per-field environment variable cannot be decoded
    pub fn load_from_source(
        explicit_path: Option<&Path>,
        env: &Environment,
    ) -> Result<Self, ConfigError> {
        let mut values = env.field_values()?;
        if !env.is_empty() {
            tracing::debug!(fields = values.len(), "Applied field variables from environment");
        }

        if let Some(target) = Self::resolve_config_path(explicit_path, env)? {
            tracing::debug!(path = %target.display(), "Loading configuration file");
            values.extend(YamlConfig::load(&target)?.into_values());
        }

        Self::from_values(values)
    }

    /// Merges values supplied on the command line into a new, re-validated instance.
    ///
    /// Fields absent from `parsed` are left alone. List fields are appended
    /// to (current entries first, duplicates kept). Other fields take the
    /// supplied value only if it differs from the field's default, so a flag
    /// left at its default never clobbers a value loaded from a file.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Settings::from_values`], for
    /// example when a supplied OPML file does not exist or the archive
    /// directory has disappeared since loading.
    pub fn merge_parsed_arguments(&self, parsed: &FieldValues) -> Result<Self, ConfigError> {
        let mut merged = FieldValues::new();

        for field in Field::ALL {
            let spec = field.spec();
            let current = self.value(field);

            let value = match (parsed.get(&field), spec.merge) {
                (None, _) => current,
                (Some(supplied), MergeKind::Additive) => current.concat(supplied).ok_or_else(|| {
                    ConfigError::invalid(
                        spec.name,
                        supplied.to_string(),
                        format!("expected {}", spec.default.kind()),
                    )
                })?,
                (Some(supplied), MergeKind::Overriding) if *supplied != spec.default => {
                    supplied.clone()
                }
                (Some(_), MergeKind::Overriding) => current,
            };

            if value != spec.default {
                merged.insert(field, value);
            }
        }

        Self::from_values(merged)
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Feeds => FieldValue::Strings(self.feeds.clone()),
            Field::OpmlFiles => FieldValue::Paths(self.opml_files.clone()),
            Field::ArchiveDirectory => FieldValue::Directory(Some(self.archive_directory.clone())),
            Field::CreateSubdirectories => FieldValue::Flag(self.create_subdirectories),
            Field::UpdateArchive => FieldValue::Flag(self.update_archive),
            Field::Verbose => FieldValue::Count(self.verbose),
            Field::ShowProgressBars => FieldValue::Flag(self.show_progress_bars),
            Field::SlugifyPaths => FieldValue::Flag(self.slugify_paths),
            Field::MaximumEpisodeCount => FieldValue::Number(self.maximum_episode_count),
            Field::AddDatePrefix => FieldValue::Flag(self.add_date_prefix),
        }
    }

    fn resolve_config_path(
        explicit_path: Option<&Path>,
        env: &Environment,
    ) -> Result<Option<PathBuf>, ConfigError> {
        match explicit_path {
            Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Config file not found, falling back to the environment"
                );
                env.config_path()
            }
            None => env.config_path(),
        }
    }

    fn assign(&mut self, field: Field, value: FieldValue) -> Result<(), ConfigError> {
        match (field, value) {
            (Field::Feeds, FieldValue::Strings(feeds)) => self.feeds = feeds,
            (Field::OpmlFiles, FieldValue::Paths(files)) => self.opml_files = files,
            (Field::ArchiveDirectory, FieldValue::Directory(Some(dir))) => {
                self.archive_directory = dir;
            }
            (Field::CreateSubdirectories, FieldValue::Flag(flag)) => {
                self.create_subdirectories = flag;
            }
            (Field::UpdateArchive, FieldValue::Flag(flag)) => self.update_archive = flag,
            (Field::Verbose, FieldValue::Count(count)) => self.verbose = count,
            (Field::ShowProgressBars, FieldValue::Flag(flag)) => self.show_progress_bars = flag,
            (Field::SlugifyPaths, FieldValue::Flag(flag)) => self.slugify_paths = flag,
            (Field::MaximumEpisodeCount, FieldValue::Number(count)) => {
                self.maximum_episode_count = count;
            }
            (Field::AddDatePrefix, FieldValue::Flag(flag)) => self.add_date_prefix = flag,
            (field, value) => {
                return Err(ConfigError::invalid(
                    field.name(),
                    value.to_string(),
                    format!("expected {}, got {}", field.spec().default.kind(), value.kind()),
                ));
            }
        }
        Ok(())
    }

    fn blank() -> Self {
        Self {
            feeds: Vec::new(),
            opml_files: Vec::new(),
            archive_directory: PathBuf::new(),
            create_subdirectories: false,
            update_archive: false,
            verbose: 0,
            show_progress_bars: false,
            slugify_paths: false,
            maximum_episode_count: 0,
            add_date_prefix: false,
        }
    }
}
