//! Podcast Archiver
//!
//! Entry point for the podcast-archiver application.

use std::process::ExitCode;

use podcast_archiver::config::{Cli, Environment, Settings, generate_example};

mod app;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle --config-generate
    if let Some(output) = &cli.config_generate {
        return handle_config_generate(output);
    }

    // Resolve settings: environment and file first, then the command line
    let env = Environment::from_process();
    let settings = match Settings::load_from_source(cli.config.as_deref(), &env)
        .and_then(|settings| settings.merge_parsed_arguments(cli.parsed_arguments()))
    {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(settings.verbose);
    tracing::info!("{settings}");

    print_settings(&settings)
}

/// Handles the `--config-generate` option.
fn handle_config_generate(output: &std::path::Path) -> ExitCode {
    match generate_example(output) {
        Ok(()) => {
            println!("Example configuration written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Prints the resolved settings as YAML for the archiving pipeline to pick up.
fn print_settings(settings: &Settings) -> ExitCode {
    match serde_yaml::to_string(settings) {
        Ok(yaml) => {
            print!("{yaml}");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render settings: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
