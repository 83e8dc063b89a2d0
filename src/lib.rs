//! Podcast Archiver
//!
//! Configuration model of the podcast archiver: the declared settings, their
//! resolution from defaults, environment, YAML file and command line, and
//! generation of a self-documenting example file.

pub mod config;
