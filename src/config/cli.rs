//! CLI argument parsing using clap.
//!
//! The options that select a configuration file are declared with the derive
//! API. One argument per setting is added from the field registry, and the
//! options actually given on the command line are collected back into
//! [`FieldValues`] for [`Settings::merge_parsed_arguments`].
//!
//! [`Settings::merge_parsed_arguments`]: super::Settings::merge_parsed_arguments

use std::ffi::OsString;
use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, value_parser};

use super::defaults::EXAMPLE_FILE_NAME;
use super::field::{CliAction, FieldSpec, registry};
use super::value::{FieldValue, FieldValues};

/// Archive all episodes of your favourite podcasts.
///
/// Settings are read from a YAML file (`--config` or `PODCAST_ARCHIVER_CONFIG`)
/// and from `PODCAST_ARCHIVER_<FIELD>` variables; command-line options take
/// precedence, and list options extend the lists from the file.
#[derive(Debug, Parser)]
#[command(name = "podcast-archiver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, short, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(
        long = "config-generate",
        value_name = "OUTPUT_FILE",
        num_args = 0..=1,
        default_missing_value = EXAMPLE_FILE_NAME
    )]
    pub config_generate: Option<PathBuf>,

    #[arg(skip)]
    overrides: FieldValues,
}

impl Cli {
    /// Parses CLI arguments from the command line, exiting on usage errors.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::try_parse_from_iter(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns clap's error for unknown options or malformed values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::full_command().try_get_matches_from(iter)?;
        let mut cli = <Self as FromArgMatches>::from_arg_matches(&matches)?;
        cli.overrides = collect_overrides(&matches);
        Ok(cli)
    }

    /// Returns the complete command, including one argument per setting.
    #[must_use]
    pub fn full_command() -> clap::Command {
        <Self as CommandFactory>::command().args(registry().iter().map(field_arg))
    }

    /// Returns the settings given on the command line; untouched options are absent.
    #[must_use]
    pub const fn parsed_arguments(&self) -> &FieldValues {
        &self.overrides
    }
}

fn field_arg(spec: &'static FieldSpec) -> Arg {
    let mut arg = Arg::new(spec.name).help(spec.description);
    if let Some(short) = spec.short {
        arg = arg.short(short);
    }
    if let Some(long) = spec.long {
        arg = arg.long(long);
    }
    if let Some(metavar) = spec.metavar {
        arg = arg.value_name(metavar);
    }

    arg = match spec.action {
        CliAction::Set => arg.action(ArgAction::Set),
        CliAction::SetTrue => arg.action(ArgAction::SetTrue),
        CliAction::Append => arg.action(ArgAction::Append),
        CliAction::Count => arg.action(ArgAction::Count),
    };

    match spec.default {
        FieldValue::Strings(_) => arg.value_parser(value_parser!(String)),
        FieldValue::Paths(_) | FieldValue::Directory(_) => arg.value_parser(value_parser!(PathBuf)),
        FieldValue::Number(_) => arg.value_parser(value_parser!(u32)),
        FieldValue::Flag(_) | FieldValue::Count(_) => arg,
    }
}

fn collect_overrides(matches: &ArgMatches) -> FieldValues {
    let mut values = FieldValues::new();

    for spec in registry() {
        let id = spec.name;
        if matches.value_source(id) != Some(ValueSource::CommandLine) {
            continue;
        }

        let value = match spec.default {
            FieldValue::Strings(_) => FieldValue::Strings(
                matches.get_many::<String>(id).into_iter().flatten().cloned().collect(),
            ),
            FieldValue::Paths(_) => FieldValue::Paths(
                matches.get_many::<PathBuf>(id).into_iter().flatten().cloned().collect(),
            ),
            FieldValue::Directory(_) => {
                FieldValue::Directory(matches.get_one::<PathBuf>(id).cloned())
            }
            FieldValue::Flag(_) => FieldValue::Flag(matches.get_flag(id)),
            FieldValue::Count(_) => FieldValue::Count(matches.get_count(id)),
            FieldValue::Number(_) => {
                FieldValue::Number(matches.get_one::<u32>(id).copied().unwrap_or_default())
            }
        };
        values.insert(spec.field, value);
    }

    values
}
