//! Tests for settings resolution.

use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::cli::Cli;
use super::env::Environment;
use super::example::generate_example;
use super::field::Field;
use super::settings::Settings;
use super::value::{FieldValue, FieldValues};
use super::yaml::YamlConfig;

/// Helper to build an environment snapshot
fn env(pairs: &[(&str, &str)]) -> Environment {
    Environment::from_pairs(pairs.iter().copied())
}

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["podcast-archiver"];
    full_args.extend(args);
    Cli::try_parse_from_iter(full_args).unwrap()
}

/// Helper to write a YAML config into `dir`
fn yaml_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to create an (empty) file into `dir`
fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "<opml version=\"2.0\"/>").unwrap();
    path
}

/// Canonical form of a path, as stored in resolved settings
fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap()
}

/// Canonical current working directory
fn cwd() -> PathBuf {
    canonical(&std::env::current_dir().unwrap())
}

/// Helper to load settings from a YAML file with an empty environment
fn load_yaml(path: &Path) -> Settings {
    Settings::load_from_source(Some(path), &env(&[])).unwrap()
}

mod loading_tests;
