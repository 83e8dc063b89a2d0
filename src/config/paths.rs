//! Path normalization for path-valued settings.

use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Expands a leading `~` component to the user's home directory.
///
/// Paths that do not start with `~` (including `~user`) are returned as-is,
/// as are all paths when no home directory is known.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

/// Returns the canonical current working directory.
///
/// # Errors
///
/// Returns [`ConfigError::CurrentDir`] if the directory cannot be determined.
pub fn current_directory() -> Result<PathBuf, ConfigError> {
    std::env::current_dir()
        .and_then(dunce::canonicalize)
        .map_err(ConfigError::CurrentDir)
}

/// Expands and canonicalizes `path`, which must name an existing directory.
///
/// # Errors
///
/// Returns an error naming `field` if the path does not exist or is not a directory.
pub fn existing_directory(field: &'static str, path: &Path) -> Result<PathBuf, ConfigError> {
    let resolved = canonical(field, path)?;
    if !resolved.is_dir() {
        return Err(ConfigError::NotADirectory {
            field,
            path: resolved,
        });
    }
    Ok(resolved)
}

/// Expands and canonicalizes `path`, which must name an existing regular file.
///
/// # Errors
///
/// Returns an error naming `field` if the path does not exist or is not a file.
pub fn existing_file(field: &'static str, path: &Path) -> Result<PathBuf, ConfigError> {
    let resolved = canonical(field, path)?;
    if !resolved.is_file() {
        return Err(ConfigError::NotAFile {
            field,
            path: resolved,
        });
    }
    Ok(resolved)
}

fn canonical(field: &'static str, path: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_home(path);
    dunce::canonicalize(&expanded).map_err(|_| ConfigError::PathNotFound {
        field,
        path: expanded,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn expand_home_leaves_plain_paths_alone() {
        assert_eq!(expand_home(Path::new("/data/pods")), PathBuf::from("/data/pods"));
        assert_eq!(expand_home(Path::new("~user/x")), PathBuf::from("~user/x"));
    }

    #[test]
    fn expand_home_replaces_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        assert_eq!(expand_home(Path::new("~/pods")), home.join("pods"));
        assert_eq!(expand_home(Path::new("~")), home);
    }

    #[test]
    fn existing_directory_resolves_parent_components() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("inner")).unwrap();
        let dotted = dir.path().join("inner").join("..");

        let resolved = existing_directory("archive_directory", &dotted).unwrap();

        assert_eq!(resolved, dunce::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn existing_directory_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("feeds.opml");
        fs::write(&file, "<opml/>").unwrap();

        let result = existing_directory("archive_directory", &file);

        assert!(matches!(result, Err(ConfigError::NotADirectory { .. })));
    }

    #[test]
    fn existing_file_rejects_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.opml");

        let result = existing_file("opml_files", &missing);

        assert!(matches!(
            result,
            Err(ConfigError::PathNotFound { field: "opml_files", path }) if path == missing
        ));
    }

    #[test]
    fn existing_file_rejects_directory() {
        let dir = tempdir().unwrap();

        let result = existing_file("opml_files", dir.path());

        assert!(matches!(result, Err(ConfigError::NotAFile { .. })));
    }
}
