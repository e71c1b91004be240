//! forge::traits
//!
//! Forge trait definition for interacting with remote hosting services.
//!
//! # Design
//!
//! The `Forge` trait is async because forge operations involve network I/O.
//! All methods return `Result` to handle API errors gracefully. Callers
//! drive it from a single-threaded runtime, so every call completes before
//! the next begins.
//!
//! # Example
//!
//! ```ignore
//! use ghinit::forge::{CreateRepoRequest, Forge};
//!
//! async fn bootstrap(forge: &dyn Forge) -> Result<(), ForgeError> {
//!     if !forge.repo_exists("alice", "demo").await? {
//!         let repo = forge
//!             .create_repo(CreateRepoRequest {
//!                 name: "demo".to_string(),
//!                 private: true,
//!                 auto_init: true,
//!             })
//!             .await?;
//!         println!("Created {}", repo.html_url);
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors from forge operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForgeError {
    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Request to create a repository owned by the authenticated user.
///
/// Serializes to the `POST /user/repos` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepoRequest {
    /// Repository name
    pub name: String,
    /// Restrict access to authorized accounts
    pub private: bool,
    /// Let the forge create an initial commit with a README
    pub auto_init: bool,
}

/// Repository information returned from the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    /// `owner/name`
    pub full_name: String,
    /// Web URL
    pub html_url: String,
    /// HTTPS clone URL, without credentials
    pub clone_url: String,
    /// Whether the repository is private
    pub private: bool,
    /// Default branch reported by the forge, if any
    pub default_branch: Option<String>,
}

/// The Forge trait for interacting with remote hosting services.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a `&dyn Forge` can cross await points.
///
/// # Error Handling
///
/// All methods return `Result<T, ForgeError>`. No method retries.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (e.g., "github").
    fn name(&self) -> &'static str;

    /// Login of the account the token authenticates as.
    ///
    /// # Errors
    ///
    /// - `AuthFailed` if the token is rejected
    /// - `NetworkError` if the request could not be sent
    async fn current_login(&self) -> Result<String, ForgeError>;

    /// Check whether `owner/name` exists and is visible to the token.
    ///
    /// Returns `Ok(false)` when the forge answers "not found".
    async fn repo_exists(&self, owner: &str, name: &str) -> Result<bool, ForgeError>;

    /// Create a repository for the authenticated user.
    ///
    /// # Errors
    ///
    /// - `ApiError` with status 422 if validation fails (e.g., name taken)
    /// - `AuthFailed` if the token lacks permission to create repositories
    async fn create_repo(&self, request: CreateRepoRequest) -> Result<RemoteRepo, ForgeError>;
}
