//! Example configuration file generation.
//!
//! The example is rendered from the field registry, so it always lists every
//! setting with its current description and default.

use std::path::Path;

use super::defaults::{EXAMPLE_WRAP_WIDTH, TOOL_NAME, VERSION};
use super::error::ConfigError;
use super::field::registry;

const COMMENT_PREFIX: &str = "## ";
const CONTINUATION_PREFIX: &str = "##   ";

/// Renders the commented example configuration for the given version.
///
/// Every field gets a wrapped `##` description block followed by a
/// commented-out `# name: default` line.
#[must_use]
pub fn render_example(version: &str) -> String {
    let mut lines = vec![
        format!("{COMMENT_PREFIX}Configuration for {TOOL_NAME}"),
        format!("{COMMENT_PREFIX}Generated with version {version}"),
        String::new(),
    ];

    for spec in registry() {
        lines.extend(wrap_comment(
            &format!("Field '{}': {}", spec.name, spec.description),
            EXAMPLE_WRAP_WIDTH,
        ));
        lines.push(format!("# {}: {}", spec.name, spec.default));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Writes the example configuration to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file cannot be written.
pub fn generate_example(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, render_example(VERSION)).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Wraps `text` into comment lines of at most `width` columns.
///
/// Words longer than a line are kept whole.
fn wrap_comment(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::from(COMMENT_PREFIX);
    let mut empty = true;

    for word in text.split_whitespace() {
        if !empty && current.len() + 1 + word.len() > width {
            lines.push(current);
            current = String::from(CONTINUATION_PREFIX);
            empty = true;
        }
        if !empty {
            current.push(' ');
        }
        current.push_str(word);
        empty = false;
    }

    if !empty {
        lines.push(current);
    }
    lines
}
