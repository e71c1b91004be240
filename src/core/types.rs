//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoName`] - Validated forge repository name
//! - [`Token`] - Bearer token that never prints its value
//! - [`Visibility`] - Public or private repository
//! - [`Mode`] - How the local working copy is produced
//! - [`RepositoryRequest`] - Everything one invocation needs, resolved once
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use ghinit::core::types::{Mode, RepoName, Token};
//!
//! let name = RepoName::new("my-project").unwrap();
//! assert_eq!(name.as_str(), "my-project");
//! assert!(RepoName::new("bad name").is_err());
//!
//! let token = Token::new("ghp_secret");
//! assert_eq!(format!("{:?}", token), "Token(<redacted>)");
//!
//! assert_eq!("push".parse::<Mode>().unwrap(), Mode::Push);
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest repository name GitHub accepts.
pub const MAX_REPO_NAME_LEN: usize = 100;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository name: {0}")]
    InvalidRepoName(String),

    #[error("invalid mode '{0}', must be one of: clone, push")]
    InvalidMode(String),

    #[error("invalid GitHub username '{0}': use letters, digits and single hyphens")]
    InvalidLogin(String),
}

/// Longest account name GitHub accepts.
pub const MAX_LOGIN_LEN: usize = 39;

/// Check that `login` is a GitHub account name.
///
/// The owner is interpolated into API paths and git URLs, so anything that
/// could add a path segment, userinfo or query is rejected.
///
/// # Example
///
/// ```
/// use ghinit::core::types::validate_login;
///
/// assert!(validate_login("alice").is_ok());
/// assert!(validate_login("octo-cat42").is_ok());
///
/// assert!(validate_login("alice/../bob").is_err());
/// assert!(validate_login("-alice").is_err());
/// assert!(validate_login("al@ce").is_err());
/// ```
pub fn validate_login(login: &str) -> Result<(), TypeError> {
    let valid = !login.is_empty()
        && login.len() <= MAX_LOGIN_LEN
        && !login.starts_with('-')
        && !login.ends_with('-')
        && !login.contains("--")
        && login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(TypeError::InvalidLogin(login.to_string()))
    }
}

/// A validated repository name.
///
/// Repository names must:
/// - Not be empty
/// - Be at most [`MAX_REPO_NAME_LEN`] characters
/// - Contain only ASCII alphanumerics, `-`, `_` and `.`
/// - Not be `.` or `..`
/// - Not end with `.git`
///
/// # Example
///
/// ```
/// use ghinit::core::types::RepoName;
///
/// assert!(RepoName::new("dotfiles").is_ok());
/// assert!(RepoName::new("my.site_v2").is_ok());
///
/// assert!(RepoName::new("").is_err());
/// assert!(RepoName::new("..").is_err());
/// assert!(RepoName::new("owner/repo").is_err());
/// assert!(RepoName::new("repo.git").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName(String);

impl RepoName {
    /// Create a new validated repository name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if the name is not a valid forge identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot be empty".into(),
            ));
        }

        if name.len() > MAX_REPO_NAME_LEN {
            return Err(TypeError::InvalidRepoName(format!(
                "repository name cannot be longer than {} characters",
                MAX_REPO_NAME_LEN
            )));
        }

        if name == "." || name == ".." {
            return Err(TypeError::InvalidRepoName(format!(
                "repository name cannot be '{}'",
                name
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(TypeError::InvalidRepoName(format!(
                "repository name cannot contain {:?}",
                c
            )));
        }

        if name.to_ascii_lowercase().ends_with(".git") {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot end with '.git'".into(),
            ));
        }

        Ok(())
    }

    /// Get the repository name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RepoName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepoName> for String {
    fn from(name: RepoName) -> Self {
        name.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A forge access token.
///
/// The value is only reachable through [`Token::expose`]; `Debug` and
/// `Display` print a placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the raw token value, for building request headers and URLs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Repository visibility on the forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Readable by anyone
    Public,
    /// Restricted to authorized accounts
    #[default]
    Private,
}

impl Visibility {
    /// Map the `--public` flag to a visibility.
    pub fn from_public_flag(public: bool) -> Self {
        if public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    /// Whether the forge should mark the repository private.
    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// How the local working copy is produced after the remote exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Let the forge create an initial commit, then clone it.
    #[default]
    Clone,
    /// Initialize locally, commit a README and push it to the empty remote.
    Push,
}

impl Mode {
    /// Whether the forge should create the initial commit itself.
    ///
    /// Pushing into a non-empty remote would be rejected, so only clone
    /// mode asks for it.
    pub fn auto_init(self) -> bool {
        self == Mode::Clone
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Clone => write!(f, "clone"),
            Mode::Push => write!(f, "push"),
        }
    }
}

impl FromStr for Mode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clone" => Ok(Mode::Clone),
            "push" => Ok(Mode::Push),
            other => Err(TypeError::InvalidMode(other.to_string())),
        }
    }
}

/// A fully resolved repository request.
///
/// Assembled once by the configuration resolver and passed to every
/// later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRequest {
    /// Repository name
    pub name: RepoName,
    /// Account that will own the repository
    pub owner: String,
    /// Token used for the API and for the clone URL
    pub token: Token,
    /// Directory the working copy is created under
    pub base_path: PathBuf,
    /// Repository visibility
    pub visibility: Visibility,
    /// Local workspace mode
    pub mode: Mode,
}

impl RepositoryRequest {
    /// Path of the local working copy: `base_path/name`.
    pub fn workspace_dir(&self) -> PathBuf {
        self.base_path.join(self.name.as_str())
    }
}
