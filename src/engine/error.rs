//! engine::error
//!
//! Error taxonomy for a single invocation.
//!
//! Every variant is fatal: the pipeline stops at the first one and nothing
//! already done is rolled back.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::forge::ForgeError;
use crate::git::GitError;

/// Errors that abort the pipeline.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required input missing or invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The identity lookup could not be completed.
    #[error("could not verify token: {0}")]
    Auth(#[source] ForgeError),

    /// A repository with this name already exists for the owner.
    #[error("\"{name}\" already exists on your GitHub profile ({full_name})")]
    AlreadyExists {
        /// Repository name
        name: String,
        /// `owner/name`
        full_name: String,
    },

    /// The forge rejected the existence check or the creation request.
    #[error("failed to create repository \"{name}\": {source}")]
    RemoteCreation {
        /// Repository name
        name: String,
        source: ForgeError,
    },

    /// The local working copy directory already exists.
    #[error("local directory {} already exists", .0.display())]
    LocalConflict(PathBuf),

    /// A git command failed.
    #[error(transparent)]
    VersionControl(#[from] GitError),

    /// A filesystem operation failed.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted, e.g. "create directory"
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl SeedError {
    /// Build an `Io` error for `path`.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SeedError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// A follow-up suggestion for the user, if there is an obvious one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SeedError::AlreadyExists { .. } => Some("choose a different repository name"),
            SeedError::LocalConflict(_) => {
                Some("remove or rename the directory, or pick another base path with -p")
            }
            SeedError::Auth(_) => Some("check that the token is valid and has the repo scope"),
            SeedError::RemoteCreation {
                source: ForgeError::AuthFailed(_),
                ..
            } => Some("the token needs permission to create repositories"),
            _ => None,
        }
    }
}
