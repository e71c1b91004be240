//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock forge keeps the set of existing repositories in memory,
//! records every call in order, and can be configured to fail a specific
//! operation.
//!
//! # Example
//!
//! ```
//! use ghinit::forge::mock::{MockForge, MockOperation};
//! use ghinit::forge::{CreateRepoRequest, Forge};
//!
//! # tokio_test::block_on(async {
//! let forge = MockForge::new("alice");
//!
//! assert!(!forge.repo_exists("alice", "demo").await.unwrap());
//! let repo = forge.create_repo(CreateRepoRequest {
//!     name: "demo".to_string(),
//!     private: true,
//!     auto_init: true,
//! }).await.unwrap();
//!
//! assert_eq!(repo.full_name, "alice/demo");
//! assert!(forge.repo_exists("alice", "demo").await.unwrap());
//! assert_eq!(forge.operations().len(), 3);
//! # });
//! ```

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use super::traits::{CreateRepoRequest, Forge, ForgeError, RemoteRepo};

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping. Clones share state.
#[derive(Debug, Clone)]
pub struct MockForge {
    inner: Arc<Mutex<MockForgeInner>>,
}

#[derive(Debug)]
struct MockForgeInner {
    /// Login returned by `current_login`.
    login: String,
    /// Existing repositories as `owner/name`.
    repos: BTreeSet<String>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail current_login with the given error.
    CurrentLogin(ForgeError),
    /// Fail repo_exists with the given error.
    RepoExists(ForgeError),
    /// Fail create_repo with the given error.
    CreateRepo(ForgeError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    CurrentLogin,
    RepoExists { owner: String, name: String },
    CreateRepo(CreateRepoRequest),
}

impl MockForge {
    /// Create a mock forge whose token authenticates as `login`.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockForgeInner {
                login: login.into(),
                repos: BTreeSet::new(),
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Add a pre-existing repository.
    ///
    /// # Example
    ///
    /// ```
    /// use ghinit::forge::mock::MockForge;
    ///
    /// let forge = MockForge::new("alice").with_repo("alice", "dotfiles");
    /// assert!(forge.has_repo("alice", "dotfiles"));
    /// ```
    pub fn with_repo(self, owner: &str, name: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.repos.insert(format!("{}/{}", owner, name));
        }
        self
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use ghinit::forge::mock::{MockForge, FailOn};
    /// use ghinit::forge::ForgeError;
    ///
    /// let forge = MockForge::new("alice")
    ///     .fail_on(FailOn::CreateRepo(ForgeError::RateLimited));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Get all recorded operations, in call order.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Check whether `owner/name` exists (for test verification).
    pub fn has_repo(&self, owner: &str, name: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.repos.contains(&format!("{}/{}", owner, name))
    }

    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }

    fn check_fail(&self, op: &MockOperation) -> Option<ForgeError> {
        let inner = self.inner.lock().unwrap();
        match (&inner.fail_on, op) {
            (Some(FailOn::CurrentLogin(e)), MockOperation::CurrentLogin)
            | (Some(FailOn::RepoExists(e)), MockOperation::RepoExists { .. })
            | (Some(FailOn::CreateRepo(e)), MockOperation::CreateRepo(_)) => Some(e.clone()),
            _ => None,
        }
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn current_login(&self) -> Result<String, ForgeError> {
        let op = MockOperation::CurrentLogin;
        self.record(op.clone());
        if let Some(err) = self.check_fail(&op) {
            return Err(err);
        }

        let inner = self.inner.lock().unwrap();
        Ok(inner.login.clone())
    }

    async fn repo_exists(&self, owner: &str, name: &str) -> Result<bool, ForgeError> {
        let op = MockOperation::RepoExists {
            owner: owner.to_string(),
            name: name.to_string(),
        };
        self.record(op.clone());
        if let Some(err) = self.check_fail(&op) {
            return Err(err);
        }

        Ok(self.has_repo(owner, name))
    }

    async fn create_repo(&self, request: CreateRepoRequest) -> Result<RemoteRepo, ForgeError> {
        let op = MockOperation::CreateRepo(request.clone());
        self.record(op.clone());
        if let Some(err) = self.check_fail(&op) {
            return Err(err);
        }

        let mut inner = self.inner.lock().unwrap();
        let full_name = format!("{}/{}", inner.login, request.name);
        if !inner.repos.insert(full_name.clone()) {
            return Err(ForgeError::ApiError {
                status: 422,
                message: "Repository creation failed. (name already exists on this account)"
                    .into(),
            });
        }

        Ok(RemoteRepo {
            html_url: format!("https://github.com/{}", full_name),
            clone_url: format!("https://github.com/{}.git", full_name),
            full_name,
            private: request.private,
            default_branch: request.auto_init.then(|| "main".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> CreateRepoRequest {
        CreateRepoRequest {
            name: name.to_string(),
            private: true,
            auto_init: false,
        }
    }

    #[tokio::test]
    async fn current_login_returns_configured_login() {
        let forge = MockForge::new("alice");
        assert_eq!(forge.current_login().await.unwrap(), "alice");
        assert_eq!(forge.operations(), vec![MockOperation::CurrentLogin]);
    }

    #[tokio::test]
    async fn create_then_exists() {
        let forge = MockForge::new("alice");
        let repo = forge.create_repo(request("demo")).await.unwrap();

        assert_eq!(repo.full_name, "alice/demo");
        assert_eq!(repo.clone_url, "https://github.com/alice/demo.git");
        assert!(repo.private);
        assert_eq!(repo.default_branch, None);
        assert!(forge.repo_exists("alice", "demo").await.unwrap());
    }

    #[tokio::test]
    async fn create_duplicate_is_rejected() {
        let forge = MockForge::new("alice").with_repo("alice", "demo");
        let err = forge.create_repo(request("demo")).await.unwrap_err();
        assert!(matches!(err, ForgeError::ApiError { status: 422, .. }));
    }

    #[tokio::test]
    async fn fail_on_only_affects_target_operation() {
        let forge = MockForge::new("alice").fail_on(FailOn::CreateRepo(ForgeError::RateLimited));

        assert!(forge.current_login().await.is_ok());
        assert!(forge.repo_exists("alice", "demo").await.is_ok());
        assert_eq!(
            forge.create_repo(request("demo")).await,
            Err(ForgeError::RateLimited)
        );
        assert!(!forge.has_repo("alice", "demo"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let forge = MockForge::new("alice");
        let other = forge.clone();
        other.create_repo(request("demo")).await.unwrap();

        assert!(forge.has_repo("alice", "demo"));
        assert_eq!(forge.operations().len(), 1);
    }
}
