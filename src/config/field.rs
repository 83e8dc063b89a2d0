//! Static field registry.
//!
//! Every configurable setting is declared exactly once in [`FIELDS`], together
//! with its default, merge semantics, path rule and the metadata the argument
//! parser and the example generator need. Merging and documentation iterate
//! this table instead of hard-coding field names.

use std::fmt;

use super::defaults;
use super::error::ConfigError;
use super::paths;
use super::value::FieldValue;

/// Identifier of a configurable setting, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Feeds,
    OpmlFiles,
    ArchiveDirectory,
    CreateSubdirectories,
    UpdateArchive,
    Verbose,
    ShowProgressBars,
    SlugifyPaths,
    MaximumEpisodeCount,
    AddDatePrefix,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Feeds,
        Self::OpmlFiles,
        Self::ArchiveDirectory,
        Self::CreateSubdirectories,
        Self::UpdateArchive,
        Self::Verbose,
        Self::ShowProgressBars,
        Self::SlugifyPaths,
        Self::MaximumEpisodeCount,
        Self::AddDatePrefix,
    ];

    /// Returns the registry entry for this field.
    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }

    /// Returns the key used in YAML documents and as the argument id.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Returns a fresh copy of the declared default.
    #[must_use]
    pub fn default_value(self) -> FieldValue {
        self.spec().default.clone()
    }

    /// Looks a field up by its key.
    #[cfg(test)]
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How values from a later source combine with the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKind {
    /// Later values are appended to the current list.
    Additive,
    /// A later value replaces the current one, unless it equals the default.
    Overriding,
}

/// How the command-line parser should treat repeated occurrences of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    /// Takes one value; the last occurrence wins.
    Set,
    /// Takes no value; presence means `true`.
    SetTrue,
    /// Takes one value per occurrence and collects them into a list.
    Append,
    /// Takes no value; counts occurrences.
    Count,
}

/// Normalization and existence check applied to path-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// Not a path field.
    None,
    /// Every path must name an existing regular file.
    ExistingFile,
    /// The path must name an existing directory; unset means the current directory.
    ExistingDirectory,
}

impl PathRule {
    /// Normalizes the path(s) inside `value` and checks they exist.
    ///
    /// Values of a shape the rule does not apply to are returned unchanged;
    /// shape mismatches are reported when the value is assigned.
    ///
    /// # Errors
    ///
    /// Returns an error naming `field` if a path does not exist or has the
    /// wrong kind, or if the current directory cannot be determined.
    pub fn apply(self, field: &'static str, value: FieldValue) -> Result<FieldValue, ConfigError> {
        match (self, value) {
            (Self::ExistingFile, FieldValue::Paths(files)) => files
                .iter()
                .map(|file| paths::existing_file(field, file))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::Paths),
            (Self::ExistingDirectory, FieldValue::Directory(directory)) => {
                let resolved = match directory {
                    Some(directory) => paths::existing_directory(field, &directory)?,
                    None => paths::current_directory()?,
                };
                Ok(FieldValue::Directory(Some(resolved)))
            }
            (_, value) => Ok(value),
        }
    }
}

/// Declarative description of one setting.
#[derive(Debug)]
pub struct FieldSpec {
    /// Identifier of the field
    pub field: Field,
    /// Key used in YAML documents and as the argument id
    pub name: &'static str,
    /// Human-readable description, used for `--help` and the example file
    pub description: &'static str,
    /// Short command-line flag
    pub short: Option<char>,
    /// Long command-line flag, without leading dashes
    pub long: Option<&'static str>,
    /// Parsing behavior of the command-line flag
    pub action: CliAction,
    /// Placeholder shown in `--help` for value-taking flags
    pub metavar: Option<&'static str>,
    /// Merge semantics across sources
    pub merge: MergeKind,
    /// Path normalization rule
    pub rule: PathRule,
    /// Declared default
    pub default: FieldValue,
}

impl FieldSpec {
    /// Returns the flag spellings as they are typed on the command line.
    #[must_use]
    pub fn flags(&self) -> Vec<String> {
        self.short
            .map(|short| format!("-{short}"))
            .into_iter()
            .chain(self.long.map(|long| format!("--{long}")))
            .collect()
    }
}

/// The registry, indexed by `Field as usize`.
pub static FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        field: Field::Feeds,
        name: "feeds",
        description: "Provide feed URLs to the archiver. The command line flag can be used \
                      repeatedly to input multiple feeds.",
        short: Some('f'),
        long: Some("feed"),
        action: CliAction::Append,
        metavar: Some("FEED_URL_OR_FILE"),
        merge: MergeKind::Additive,
        rule: PathRule::None,
        default: FieldValue::Strings(Vec::new()),
    },
    FieldSpec {
        field: Field::OpmlFiles,
        name: "opml_files",
        description: "Provide an OPML file (as exported by many other podcatchers) containing \
                      your feeds. The parameter can be used multiple times, once for every \
                      OPML file.",
        short: Some('o'),
        long: Some("opml"),
        action: CliAction::Append,
        metavar: Some("OPML_FILE"),
        merge: MergeKind::Additive,
        rule: PathRule::ExistingFile,
        default: FieldValue::Paths(Vec::new()),
    },
    FieldSpec {
        field: Field::ArchiveDirectory,
        name: "archive_directory",
        description: "Set the output directory of the podcast archive.",
        short: Some('d'),
        long: Some("dir"),
        action: CliAction::Set,
        metavar: Some("DIRECTORY"),
        merge: MergeKind::Overriding,
        rule: PathRule::ExistingDirectory,
        default: FieldValue::Directory(None),
    },
    FieldSpec {
        field: Field::CreateSubdirectories,
        name: "create_subdirectories",
        description: "Place downloaded podcasts in separate subdirectories per podcast \
                      (named with their title).",
        short: Some('s'),
        long: Some("subdirs"),
        action: CliAction::SetTrue,
        metavar: None,
        merge: MergeKind::Overriding,
        rule: PathRule::None,
        default: FieldValue::Flag(false),
    },
    FieldSpec {
        field: Field::UpdateArchive,
        name: "update_archive",
        description: "Force the archiver to only update the feeds with newly added episodes. \
                      As soon as the first old episode found in the download directory, \
                      further downloading is interrupted.",
        short: Some('u'),
        long: Some("update"),
        action: CliAction::SetTrue,
        metavar: None,
        merge: MergeKind::Overriding,
        rule: PathRule::None,
        default: FieldValue::Flag(false),
    },
    FieldSpec {
        field: Field::Verbose,
        name: "verbose",
        description: "Increase the level of verbosity while downloading.",
        short: Some('v'),
        long: Some("verbose"),
        action: CliAction::Count,
        metavar: None,
        merge: MergeKind::Overriding,
        rule: PathRule::None,
        default: FieldValue::Count(defaults::VERBOSE),
    },
    FieldSpec {
        field: Field::ShowProgressBars,
        name: "show_progress_bars",
        description: "Show progress bars while downloading episodes.",
        short: Some('p'),
        long: Some("progress"),
        action: CliAction::SetTrue,
        metavar: None,
        merge: MergeKind::Overriding,
        rule: PathRule::None,
        default: FieldValue::Flag(false),
    },
    FieldSpec {
        field: Field::SlugifyPaths,
        name: "slugify_paths",
        description: "Clean all folders and filename of potentially weird characters that \
                      might cause trouble with one or another target filesystem.",
        short: Some('S'),
        long: Some("slugify"),
        action: CliAction::SetTrue,
        metavar: None,
        merge: MergeKind::Overriding,
        rule: PathRule::None,
        default: FieldValue::Flag(false),
    },
    FieldSpec {
        field: Field::MaximumEpisodeCount,
        name: "maximum_episode_count",
        description: "Only download the given number of episodes per podcast feed. Useful if \
                      you don't really need the entire backlog.",
        short: Some('m'),
        long: Some("max-episodes"),
        action: CliAction::Set,
        metavar: Some("COUNT"),
        merge: MergeKind::Overriding,
        rule: PathRule::None,
        default: FieldValue::Number(defaults::MAXIMUM_EPISODE_COUNT),
    },
    FieldSpec {
        field: Field::AddDatePrefix,
        name: "add_date_prefix",
        description: "Prefix all episodes with an ISO8601 formatted date of when they were \
                      published. Useful to ensure chronological ordering.",
        short: None,
        long: Some("date-prefix"),
        action: CliAction::SetTrue,
        metavar: None,
        merge: MergeKind::Overriding,
        rule: PathRule::None,
        default: FieldValue::Flag(false),
    },
];

/// Returns the registry in declaration order.
#[must_use]
pub fn registry() -> &'static [FieldSpec] {
    &FIELDS
}
