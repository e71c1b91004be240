//! core::config
//!
//! Configuration resolution.
//!
//! # Overview
//!
//! Every value one invocation needs is resolved once, up front, into a
//! [`ResolvedConfig`]. Later stages receive it explicitly and never read
//! the environment themselves.
//!
//! # Precedence
//!
//! Values are resolved in this order (earlier wins):
//! 1. CLI flags
//! 2. Environment variables (`GITHUB_USERNAME`, `GITHUB_TOKEN`, `PROJECTS_BASE_PATH`)
//! 3. `.env` file entries (see [`env`])
//! 4. Global config file (see [`schema`])
//! 5. Built-in defaults
//!
//! # Required Values
//!
//! Username, token and base path are required and checked in that order.
//! The first missing one is reported with a hint naming the flag and the
//! environment variable that supply it.
//!
//! # Example
//!
//! ```
//! use ghinit::core::config::{resolve, CliOverrides, Environment, GlobalConfig};
//!
//! let flags = CliOverrides {
//!     repository_name: "demo".to_string(),
//!     username: Some("alice".to_string()),
//!     ..Default::default()
//! };
//! let env = Environment::from_pairs([
//!     ("GITHUB_TOKEN", "abc"),
//!     ("PROJECTS_BASE_PATH", "/tmp/projects"),
//! ]);
//!
//! let config = resolve(&flags, &env, &GlobalConfig::default(), None).unwrap();
//! assert_eq!(config.request.owner, "alice");
//! assert_eq!(config.api_url, "https://api.github.com");
//! ```

pub mod env;
pub mod schema;

pub use env::Environment;
pub use schema::{ForgeConfig, GitConfig, GlobalConfig};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{
    validate_login, Mode, RepoName, RepositoryRequest, Token, TypeError, Visibility,
};

/// Environment variable holding the forge username.
pub const USERNAME_VAR: &str = "GITHUB_USERNAME";
/// Environment variable holding the forge token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Environment variable holding the base path for new working copies.
pub const BASE_PATH_VAR: &str = "PROJECTS_BASE_PATH";
/// Environment variable overriding the config file location.
pub const CONFIG_PATH_VAR: &str = "GHINIT_CONFIG";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default git host used in clone and remote URLs.
pub const DEFAULT_HOST: &str = "github.com";
/// Default branch for push mode.
pub const DEFAULT_BRANCH: &str = "main";
/// Default placeholder commit message for push mode.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit";

/// A value that must be supplied by flag, environment or config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Username,
    Token,
    BasePath,
}

impl RequiredField {
    /// The flag that supplies this value.
    pub fn flag(self) -> &'static str {
        match self {
            RequiredField::Username => "-u/--username",
            RequiredField::Token => "-t/--token",
            RequiredField::BasePath => "-p/--path",
        }
    }

    /// The environment variable that supplies this value.
    pub fn env_var(self) -> &'static str {
        match self {
            RequiredField::Username => USERNAME_VAR,
            RequiredField::Token => TOKEN_VAR,
            RequiredField::BasePath => BASE_PATH_VAR,
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Username => write!(f, "GitHub username"),
            RequiredField::Token => write!(f, "GitHub token"),
            RequiredField::BasePath => write!(f, "base path"),
        }
    }
}

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "missing {field}: pass {flag} or set {var} in the environment or .env file",
        flag = .field.flag(),
        var = .field.env_var()
    )]
    Missing { field: RequiredField },

    #[error(transparent)]
    InvalidName(#[from] TypeError),

    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

impl ConfigError {
    /// The missing required field, if that is what this error reports.
    pub fn missing_field(&self) -> Option<RequiredField> {
        match self {
            ConfigError::Missing { field } => Some(*field),
            _ => None,
        }
    }
}

/// Values taken from the command line. `None` means the flag was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub repository_name: String,
    pub username: Option<String>,
    pub token: Option<String>,
    pub path: Option<PathBuf>,
    pub public: bool,
    pub mode: Option<Mode>,
    pub api_url: Option<String>,
    pub host: Option<String>,
}

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// What to create and where
    pub request: RepositoryRequest,
    /// Forge REST API base URL, without trailing slash
    pub api_url: String,
    /// Git host used in clone and remote URLs
    pub host: String,
    /// Branch created and pushed in push mode
    pub default_branch: String,
    /// Placeholder commit message in push mode
    pub commit_message: String,
}

/// Resolve flags, environment and config file into a [`ResolvedConfig`].
///
/// `home` is used to expand a leading `~` in the base path.
///
/// # Errors
///
/// - `ConfigError::InvalidName` if the repository name is not valid
/// - `ConfigError::Missing` for the first missing of username, token, base path
/// - `ConfigError::InvalidName` if the username is not a valid GitHub login
pub fn resolve(
    flags: &CliOverrides,
    env: &Environment,
    file: &GlobalConfig,
    home: Option<&Path>,
) -> Result<ResolvedConfig, ConfigError> {
    let name = RepoName::new(flags.repository_name.as_str())?;

    let username = non_empty(flags.username.as_deref())
        .or_else(|| env.get(USERNAME_VAR))
        .or_else(|| non_empty(file.username.as_deref()))
        .ok_or(ConfigError::Missing {
            field: RequiredField::Username,
        })?;

    let token = non_empty(flags.token.as_deref())
        .or_else(|| env.get(TOKEN_VAR))
        .ok_or(ConfigError::Missing {
            field: RequiredField::Token,
        })?;

    let base_path = flags
        .path
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| env.get(BASE_PATH_VAR).map(PathBuf::from))
        .or_else(|| non_empty(file.base_path.as_deref()).map(PathBuf::from))
        .ok_or(ConfigError::Missing {
            field: RequiredField::BasePath,
        })?;

    validate_login(username)?;

    let forge = file.forge.clone().unwrap_or_default();
    let git = file.git.clone().unwrap_or_default();

    let public = flags.public || file.public.unwrap_or(false);

    Ok(ResolvedConfig {
        request: RepositoryRequest {
            name,
            owner: username.to_string(),
            token: Token::new(token),
            base_path: expand_home(&base_path, home),
            visibility: Visibility::from_public_flag(public),
            mode: flags.mode.or(file.mode).unwrap_or_default(),
        },
        api_url: flags
            .api_url
            .clone()
            .or(forge.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string(),
        host: flags
            .host
            .clone()
            .or(forge.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        default_branch: git
            .default_branch
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
        commit_message: git
            .commit_message
            .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string()),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Expand a leading `~` component to `home`. Other paths are returned unchanged.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home.to_path_buf(),
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Loading of the optional global config file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents, defaults when no file exists
    pub global: GlobalConfig,
    /// Path the config was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load the global config from the first existing location.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. A missing file is not an error.
    pub fn load(env: &Environment, home: Option<&Path>) -> Result<Self, ConfigError> {
        for path in Self::candidate_paths(env, home) {
            if path.exists() {
                let global = Self::read(&path)?;
                global.validate()?;
                return Ok(Self {
                    global,
                    path: Some(path),
                });
            }
        }

        Ok(Self::default())
    }

    /// Config file locations in search order.
    pub fn candidate_paths(env: &Environment, home: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(path) = env.get(CONFIG_PATH_VAR) {
            paths.push(PathBuf::from(path));
        }
        if let Some(xdg) = env.get("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("ghinit/config.toml"));
        }
        if let Some(home) = home {
            paths.push(home.join(".ghinit/config.toml"));
        }

        paths
    }

    fn read(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
