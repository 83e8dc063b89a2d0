//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Namespace prefix shared by every environment variable the archiver reads.
pub const ENV_PREFIX: &str = "PODCAST_ARCHIVER_";

/// Environment variable holding the path of the YAML configuration file.
pub const CONFIG_ENV_VAR: &str = "PODCAST_ARCHIVER_CONFIG";

/// Default output path for `--config-generate`.
pub const EXAMPLE_FILE_NAME: &str = "podcast-archiver.yaml";

/// Column at which description comments in the example file are wrapped.
pub const EXAMPLE_WRAP_WIDTH: usize = 70;

/// Default maximum number of episodes per feed (0 = unlimited).
pub const MAXIMUM_EPISODE_COUNT: u32 = 0;

/// Default verbosity counter.
pub const VERBOSE: u8 = 0;

/// Tool name used in generated files and log output.
pub const TOOL_NAME: &str = "podcast-archiver";

/// Version string of this build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
