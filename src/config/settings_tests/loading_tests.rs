//! Tests for defaults and source selection.

use tempfile::tempdir;

use super::*;

mod defaults {
    use super::*;

    #[test]
    fn every_field_at_its_default() {
        let settings = Settings::defaults().unwrap();

        assert!(settings.feeds.is_empty());
        assert!(settings.opml_files.is_empty());
        assert_eq!(settings.archive_directory, cwd());
        assert!(!settings.create_subdirectories);
        assert!(!settings.update_archive);
        assert_eq!(settings.verbose, 0);
        assert!(!settings.show_progress_bars);
        assert!(!settings.slugify_paths);
        assert_eq!(settings.maximum_episode_count, 0);
        assert!(!settings.add_date_prefix);
    }

    #[test]
    fn no_sources_yield_defaults() {
        let settings = Settings::load_from_source(None, &env(&[])).unwrap();

        assert_eq!(settings, Settings::defaults().unwrap());
    }

    #[test]
    fn value_reports_current_fields() {
        let settings = Settings::defaults().unwrap();

        assert_eq!(
            settings.value(Field::ArchiveDirectory),
            FieldValue::Directory(Some(cwd()))
        );
        for field in Field::ALL {
            if field != Field::ArchiveDirectory {
                assert_eq!(settings.value(field), field.default_value(), "field {field}");
            }
        }
    }
}

mod config_file_lookup {
    use super::*;

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempdir().unwrap();
        let path = yaml_file(dir.path(), "feeds: [X]\nmaximum_episode_count: 3\n");

        let settings = load_yaml(&path);

        assert_eq!(settings.feeds, vec!["X"]);
        assert_eq!(settings.maximum_episode_count, 3);
        assert!(!settings.update_archive);
    }

    #[test]
    fn generated_example_loads_as_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("podcast-archiver.yaml");
        generate_example(&path).unwrap();

        let settings = Settings::load_from_source(Some(&path), &env(&[])).unwrap();

        assert_eq!(settings, Settings::defaults().unwrap());
    }

    #[test]
    fn env_path_is_loaded_without_explicit_path() {
        let dir = tempdir().unwrap();
        let path = yaml_file(dir.path(), "update_archive: true\n");
        let env = env(&[("PODCAST_ARCHIVER_CONFIG", path.to_str().unwrap())]);

        let settings = Settings::load_from_source(None, &env).unwrap();

        assert!(settings.update_archive);
    }

    #[test]
    fn explicit_path_wins_over_env_path() {
        let dir = tempdir().unwrap();
        let explicit = yaml_file(dir.path(), "verbose: 1\n");
        let other = dir.path().join("other.yaml");
        fs::write(&other, "verbose: 2\n").unwrap();
        let env = env(&[("PODCAST_ARCHIVER_CONFIG", other.to_str().unwrap())]);

        let settings = Settings::load_from_source(Some(&explicit), &env).unwrap();

        assert_eq!(settings.verbose, 1);
    }

    #[test]
    fn missing_explicit_path_falls_through_to_env() {
        let dir = tempdir().unwrap();
        let from_env = yaml_file(dir.path(), "slugify_paths: true\n");
        let missing = dir.path().join("missing.yaml");
        let env = env(&[("PODCAST_ARCHIVER_CONFIG", from_env.to_str().unwrap())]);

        let settings = Settings::load_from_source(Some(&missing), &env).unwrap();

        assert!(settings.slugify_paths);
    }

    #[test]
    fn missing_explicit_path_without_env_yields_defaults() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");

        let settings = Settings::load_from_source(Some(&missing), &env(&[])).unwrap();

        assert_eq!(settings, Settings::defaults().unwrap());
    }

    #[test]
    fn missing_env_path_fails_fast() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let env = env(&[("PODCAST_ARCHIVER_CONFIG", missing.to_str().unwrap())]);

        let result = Settings::load_from_source(None, &env);

        assert!(matches!(result, Err(ConfigError::ConfigNotFound { path }) if path == missing));
    }

    #[test]
    fn missing_env_path_fails_even_if_explicit_path_is_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let env = env(&[("PODCAST_ARCHIVER_CONFIG", missing.to_str().unwrap())]);

        let result = Settings::load_from_source(Some(&missing), &env);

        assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = yaml_file(dir.path(), "");

        assert_eq!(load_yaml(&path), Settings::defaults().unwrap());
    }
}

mod document_errors {
    use super::*;

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempdir().unwrap();
        let path = yaml_file(dir.path(), "feeds: []\nfeed_urls: [x]\n");

        let result = Settings::load_from_source(Some(&path), &env(&[]));

        assert!(matches!(result, Err(ConfigError::YamlParse(_))));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let dir = tempdir().unwrap();
        let path = yaml_file(dir.path(), "feeds: [unterminated\n");

        let result = Settings::load_from_source(Some(&path), &env(&[]));

        assert!(matches!(result, Err(ConfigError::YamlParse(_))));
    }
}

mod field_variables {
    use super::*;

    #[test]
    fn field_variable_applies_without_file() {
        let env = env(&[("PODCAST_ARCHIVER_MAXIMUM_EPISODE_COUNT", "4")]);

        let settings = Settings::load_from_source(None, &env).unwrap();

        assert_eq!(settings.maximum_episode_count, 4);
    }

    #[test]
    fn file_overrides_field_variable() {
        let dir = tempdir().unwrap();
        let path = yaml_file(dir.path(), "feeds: [from-file]\n");
        let env = env(&[("PODCAST_ARCHIVER_FEEDS", r#"["from-env"]"#)]);

        let settings = Settings::load_from_source(Some(&path), &env).unwrap();

        assert_eq!(settings.feeds, vec!["from-file"]);
    }

    #[test]
    fn field_variable_fills_keys_missing_from_file() {
        let dir = tempdir().unwrap();
        let path = yaml_file(dir.path(), "feeds: [from-file]\n");
        let env = env(&[("PODCAST_ARCHIVER_ADD_DATE_PREFIX", "true")]);

        let settings = Settings::load_from_source(Some(&path), &env).unwrap();

        assert!(settings.add_date_prefix);
        assert_eq!(settings.feeds, vec!["from-file"]);
    }

    #[test]
    fn blank_directory_variable_means_current_directory() {
        let env = env(&[("PODCAST_ARCHIVER_ARCHIVE_DIRECTORY", "")]);

        let settings = Settings::load_from_source(None, &env).unwrap();

        assert_eq!(settings.archive_directory, cwd());
    }

    #[test]
    fn invalid_field_variable_is_rejected() {
        let env = env(&[("PODCAST_ARCHIVER_VERBOSE", "loud")]);

        let result = Settings::load_from_source(None, &env);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "verbose", .. })
        ));
    }
}
