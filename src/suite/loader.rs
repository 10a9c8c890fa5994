//! Suite resolution and parsing
//!
//! Resolves the named external suite on a fixed search path. Unlike
//! capability detection, a missing suite is a hard error: once the
//! automation tool is present, the cases it is supposed to run must be
//! resolvable.

use std::path::{Path, PathBuf};

use crate::common::{paths, Config, Error, Result};

use super::config::TestSuite;

/// Default suite file name searched on the resolution path
pub const DEFAULT_SUITE_FILE: &str = "gui-suite.yaml";

/// Load the test suite
///
/// Resolution order: explicit path argument, then the `suite.path`
/// configuration entry, then `gui-suite.yaml` in the search directories.
/// Returns the parsed suite together with the path it was loaded from.
pub fn load_suite(explicit: Option<&Path>, config: &Config) -> Result<(TestSuite, PathBuf)> {
    let path = resolve_suite_path(
        explicit,
        config.suite.path.as_deref(),
        &paths::suite_search_dirs(),
    )?;

    let content = std::fs::read_to_string(&path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let suite: TestSuite = serde_yaml::from_str(&content).map_err(|e| Error::SuiteParse {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    Ok((suite, path))
}

fn resolve_suite_path(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    search_dirs: &[PathBuf],
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::SuiteNotFound {
            searched: path.display().to_string(),
        });
    }

    if let Some(path) = configured {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::SuiteNotFound {
            searched: path.display().to_string(),
        });
    }

    let mut searched = Vec::new();
    for dir in search_dirs {
        let candidate = dir.join(DEFAULT_SUITE_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        searched.push(candidate.display().to_string());
    }

    Err(Error::SuiteNotFound {
        searched: searched.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = resolve_suite_path(Some(&missing), None, &[]).unwrap_err();
        assert!(matches!(err, Error::SuiteNotFound { .. }));
    }

    #[test]
    fn test_configured_path_beats_search_dirs() {
        let dir = tempdir().unwrap();
        let configured = dir.path().join("suite.yaml");
        std::fs::write(&configured, "name: x\ncases: []\n").unwrap();
        // Search dir also contains a default file; the configured path wins
        std::fs::write(dir.path().join(DEFAULT_SUITE_FILE), "name: y\ncases: []\n").unwrap();

        let resolved = resolve_suite_path(
            None,
            Some(&configured),
            &[dir.path().to_path_buf()],
        )
        .unwrap();
        assert_eq!(resolved, configured);
    }

    #[test]
    fn test_search_dirs_in_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        std::fs::write(second.path().join(DEFAULT_SUITE_FILE), "name: y\ncases: []\n").unwrap();

        let resolved = resolve_suite_path(
            None,
            None,
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        )
        .unwrap();
        assert_eq!(resolved, second.path().join(DEFAULT_SUITE_FILE));
    }

    #[test]
    fn test_nothing_found_lists_searched_locations() {
        let dir = tempdir().unwrap();
        let err = resolve_suite_path(None, None, &[dir.path().to_path_buf()]).unwrap_err();
        match err {
            Error::SuiteNotFound { searched } => {
                assert!(searched.contains(DEFAULT_SUITE_FILE));
            }
            other => panic!("Expected SuiteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_suite_parse_error_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "name: [unclosed\n").unwrap();

        let config = Config::default();
        let err = load_suite(Some(&path), &config).unwrap_err();
        match err {
            Error::SuiteParse { path: p, .. } => assert!(p.contains("bad.yaml")),
            other => panic!("Expected SuiteParse, got {:?}", other),
        }
    }
}
