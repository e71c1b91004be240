//! core::config::env
//!
//! Environment snapshot used as the fallback source for unset flags.
//!
//! The process environment and the optional `.env` file are read exactly
//! once, in [`Environment::capture`]. Everything downstream looks values up
//! in the snapshot, so tests can inject an [`Environment`] built from a map.
//!
//! # `.env` format
//!
//! ```text
//! # comment
//! GITHUB_USERNAME=alice
//! export GITHUB_TOKEN="ghp_xxx"
//! PROJECTS_BASE_PATH='~/projects'
//! ```
//!
//! Parsing is done by `dotenvy`. Variables already set in the process
//! environment are not overridden.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use super::ConfigError;

/// Immutable view of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Build an environment from explicit key/value pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use ghinit::core::config::Environment;
    ///
    /// let env = Environment::from_pairs([("GITHUB_USERNAME", "alice")]);
    /// assert_eq!(env.get("GITHUB_USERNAME"), Some("alice"));
    /// assert_eq!(env.get("GITHUB_TOKEN"), None);
    /// ```
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot the process environment, then fill gaps from `env_file`.
    ///
    /// A missing `env_file` is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file exists but cannot be read,
    /// or `ConfigError::ParseError` if a line is malformed.
    pub fn capture(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut env = Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        };

        if let Some(path) = env_file {
            env.merge_file(path)?;
        }

        Ok(env)
    }

    /// Add entries from a `.env` file without overriding existing ones.
    fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let entries = parse_dotenv(&contents).map_err(|message| ConfigError::ParseError {
            path: path.to_path_buf(),
            message,
        })?;

        for (key, value) in entries {
            self.vars.entry(key).or_insert(value);
        }

        Ok(())
    }

    /// Look up a variable. Empty values are treated as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Parse the contents of a `.env` file into ordered key/value pairs.
///
/// Syntax follows dotenv: `export` prefixes, single quotes (literal),
/// double quotes with `\\`, `\"` and `\n` escapes, multi-line quoted
/// values and trailing ` #` comments. `$VAR` references are substituted.
///
/// Returns an error message naming the offending line number. The line
/// itself is not echoed, since it may hold a token.
pub fn parse_dotenv(contents: &str) -> Result<Vec<(String, String)>, String> {
    dotenvy::from_read_iter(contents.as_bytes())
        .map(|entry| entry.map_err(|e| describe_error(contents, e)))
        .collect()
}

fn describe_error(contents: &str, err: dotenvy::Error) -> String {
    match err {
        dotenvy::Error::LineParse(line, column) => {
            let first = line.lines().next().unwrap_or_default().trim();
            match contents.lines().position(|l| l.trim() == first) {
                Some(idx) => format!("line {}: invalid syntax at column {}", idx + 1, column + 1),
                None => format!("invalid syntax at column {}", column + 1),
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_basic_pairs() {
        assert_eq!(
            parse_dotenv("A=1\nB=two\n").unwrap(),
            pairs(&[("A", "1"), ("B", "two")])
        );
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let entries = parse_dotenv("# header\n\n   \nA=1 # trailing\n").unwrap();
        assert_eq!(entries, pairs(&[("A", "1")]));
    }

    #[test]
    fn parse_export_and_quotes() {
        let entries =
            parse_dotenv("export TOKEN=\"ghp_x #1\"\nPATH_VAR='~/my projects'\n").unwrap();
        assert_eq!(
            entries,
            pairs(&[("TOKEN", "ghp_x #1"), ("PATH_VAR", "~/my projects")])
        );
    }

    #[test]
    fn parse_value_may_contain_equals() {
        let entries = parse_dotenv("URL=https://x.test/?a=b").unwrap();
        assert_eq!(entries[0].1, "https://x.test/?a=b");
    }

    #[test]
    fn escaped_quote_does_not_end_value() {
        let entries = parse_dotenv(r#"TOKEN="a\"b""#).unwrap();
        assert_eq!(entries, pairs(&[("TOKEN", "a\"b")]));
    }

    #[test]
    fn escaped_backslash_and_newline() {
        let entries = parse_dotenv(r#"A="c:\\dir"
B="line1\nline2""#)
        .unwrap();
        assert_eq!(entries, pairs(&[("A", "c:\\dir"), ("B", "line1\nline2")]));
    }

    #[test]
    fn single_quotes_are_literal() {
        let entries = parse_dotenv(r#"A='x\ny'"#).unwrap();
        assert_eq!(entries, pairs(&[("A", "x\\ny")]));
    }

    #[test]
    fn text_after_closing_quote_is_not_dropped() {
        let entries = parse_dotenv("A=\"x\"junk\n").unwrap();
        assert_eq!(entries, pairs(&[("A", "xjunk")]));
    }

    #[test]
    fn parse_errors_name_the_line() {
        let err = parse_dotenv("A=1\nnot a pair\n").unwrap_err();
        assert!(err.starts_with("line 2:"), "{err}");

        let err = parse_dotenv("1BAD=x").unwrap_err();
        assert!(err.starts_with("line 1:"), "{err}");

        assert!(parse_dotenv("A=\"open").is_err());
    }

    #[test]
    fn parse_errors_do_not_echo_values() {
        let err = parse_dotenv("GITHUB_TOKEN=\"ghp_secret").unwrap_err();
        assert!(!err.contains("ghp_secret"), "{err}");
    }

    #[test]
    fn empty_values_are_unset() {
        let env = Environment::from_pairs([("A", ""), ("B", "x")]);
        assert_eq!(env.get("A"), None);
        assert_eq!(env.get("B"), Some("x"));
    }

    #[test]
    fn merge_file_does_not_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "GITHUB_USERNAME=from-file\nGITHUB_TOKEN=file-token\n").unwrap();

        let mut env = Environment::from_pairs([("GITHUB_USERNAME", "from-env")]);
        env.merge_file(&path).unwrap();

        assert_eq!(env.get("GITHUB_USERNAME"), Some("from-env"));
        assert_eq!(env.get("GITHUB_TOKEN"), Some("file-token"));
    }

    #[test]
    fn merge_missing_file_is_ok() {
        let temp = TempDir::new().unwrap();
        let mut env = Environment::default();
        env.merge_file(&temp.path().join("absent.env")).unwrap();
        assert_eq!(env, Environment::default());
    }

    #[test]
    fn merge_malformed_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "garbage\n").unwrap();

        let err = Environment::default().merge_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(".env"));
    }
}
