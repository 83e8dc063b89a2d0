//! Configuration layer for the podcast archiver.
//!
//! This module provides:
//! - The field registry ([`Field`], [`FieldSpec`], [`registry`])
//! - CLI argument parsing ([`Cli`])
//! - YAML configuration file parsing ([`YamlConfig`])
//! - The environment snapshot ([`Environment`])
//! - Resolved, validated settings ([`Settings`])
//! - Example file generation ([`generate_example`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Options actually given on the command line
//! 2. **YAML config file** - `--config <FILE>`, or `PODCAST_ARCHIVER_CONFIG`
//! 3. **Field variables** - `PODCAST_ARCHIVER_<FIELD>`, e.g. `PODCAST_ARCHIVER_VERBOSE=1`
//! 4. **Built-in defaults** - Declared in the registry
//!
//! # Config File Lookup
//!
//! `--config` is used only if it names an existing file; otherwise lookup
//! falls through to `PODCAST_ARCHIVER_CONFIG`. A path given in that variable
//! must exist: a missing file is an error, not a fallback to defaults.
//!
//! # Merge Semantics
//!
//! `feeds` and `opml_files` are **additive**: CLI values are appended to the
//! values from the file, keeping order and duplicates.
//!
//! All other fields are **overriding**: a CLI value wins only if it differs
//! from the field's default, so an untouched flag never resets a value
//! loaded from the file. A consequence is that the CLI cannot switch a
//! boolean back to `false` once the file set it to `true`.
//!
//! # Path Normalization
//!
//! `archive_directory` and `opml_files` are tilde-expanded and canonicalized,
//! and must exist. An unset `archive_directory` resolves to the current
//! working directory. Validation re-runs after the CLI merge.

mod cli;
pub mod defaults;
mod env;
mod error;
mod example;
mod field;
mod paths;
mod settings;
mod value;
mod yaml;

#[cfg(test)]
mod settings_tests;

pub use cli::Cli;
pub use env::Environment;
pub use error::ConfigError;
pub use example::{generate_example, render_example};
pub use field::{CliAction, FIELDS, Field, FieldSpec, MergeKind, PathRule, registry};
pub use paths::expand_home;
pub use settings::Settings;
pub use value::{FieldValue, FieldValues};
pub use yaml::YamlConfig;
