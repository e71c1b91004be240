//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. The workspace initializer
//! talks to a `&dyn VersionControl`; nothing else runs git.
//!
//! # Responsibilities
//!
//! - Cloning a remote into an explicit destination
//! - Initializing a repository, registering a remote, committing, pushing
//! - Redacting credentials from anything that is displayed
//!
//! # Invariants
//!
//! - Every command's exit status is checked
//! - No operation depends on or changes the process working directory

mod interface;
pub mod mock;

pub use interface::{redact_credentials, GitCli, GitError, VersionControl};
