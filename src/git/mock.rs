//! git::mock
//!
//! Recording [`VersionControl`] implementation for tests.
//!
//! Calls are recorded in order and never touch a real repository. A clone
//! creates the destination directory so later filesystem checks behave as
//! they would after a real clone. Any single operation can be made to fail.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use super::interface::{GitError, VersionControl};

/// A recorded version control call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Clone {
        url: String,
        destination: PathBuf,
        /// Whether the destination's parent directory existed at call time
        parent_existed: bool,
    },
    Init {
        path: PathBuf,
        branch: String,
    },
    AddRemote {
        path: PathBuf,
        name: String,
        url: String,
    },
    CommitAll {
        path: PathBuf,
        message: String,
        /// Files present in the working tree at commit time
        files: Vec<String>,
    },
    Push {
        path: PathBuf,
        remote: String,
        branch: String,
    },
}

/// Which operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailVcsOn {
    Clone,
    Init,
    AddRemote,
    CommitAll,
    Push,
}

/// Recording mock.
#[derive(Debug, Default)]
pub struct MockVcs {
    calls: RefCell<Vec<VcsCall>>,
    fail_on: Option<FailVcsOn>,
}

impl MockVcs {
    /// Create a mock where every operation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `op` fail with a `CommandFailed` error.
    pub fn fail_on(mut self, op: FailVcsOn) -> Self {
        self.fail_on = Some(op);
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: FailVcsOn, call: VcsCall) -> Result<(), GitError> {
        let command = format!("git {:?}", op).to_lowercase();
        self.calls.borrow_mut().push(call);

        if self.fail_on == Some(op) {
            return Err(GitError::CommandFailed {
                command,
                status: "exit code 128".to_string(),
                stderr: "fatal: simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl VersionControl for MockVcs {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<(), GitError> {
        let parent_existed = destination.parent().map(Path::is_dir).unwrap_or(false);
        self.record(
            FailVcsOn::Clone,
            VcsCall::Clone {
                url: url.to_string(),
                destination: destination.to_path_buf(),
                parent_existed,
            },
        )?;

        fs::create_dir_all(destination).map_err(|e| GitError::Spawn {
            program: "mock".to_string(),
            source: e,
        })
    }

    fn init_repo(&self, path: &Path, branch: &str) -> Result<(), GitError> {
        self.record(
            FailVcsOn::Init,
            VcsCall::Init {
                path: path.to_path_buf(),
                branch: branch.to_string(),
            },
        )
    }

    fn add_remote(&self, path: &Path, name: &str, url: &str) -> Result<(), GitError> {
        self.record(
            FailVcsOn::AddRemote,
            VcsCall::AddRemote {
                path: path.to_path_buf(),
                name: name.to_string(),
                url: url.to_string(),
            },
        )
    }

    fn commit_all(&self, path: &Path, message: &str) -> Result<(), GitError> {
        let mut files: Vec<String> = fs::read_dir(path)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        files.sort();

        self.record(
            FailVcsOn::CommitAll,
            VcsCall::CommitAll {
                path: path.to_path_buf(),
                message: message.to_string(),
                files,
            },
        )
    }

    fn push(&self, path: &Path, remote: &str, branch: &str) -> Result<(), GitError> {
        self.record(
            FailVcsOn::Push,
            VcsCall::Push {
                path: path.to_path_buf(),
                remote: remote.to_string(),
                branch: branch.to_string(),
            },
        )
    }
}
