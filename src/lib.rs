//! ghinit - Create a GitHub repository and its local working copy
//!
//! ghinit creates a repository through the GitHub REST API and then either
//! clones it into a base directory or initializes a local repository,
//! commits a README and pushes it to the new remote.
//!
//! # Architecture
//!
//! A single sequential pipeline, one module per concern:
//!
//! - [`cli`] - Argument parsing; wires concrete backends into the engine
//! - [`core`] - Domain types and configuration resolution
//! - [`engine`] - Identity check, remote creation, local setup
//! - [`forge`] - Forge trait, GitHub REST implementation and mock
//! - [`git`] - Version control trait, `git` CLI implementation and mock
//! - [`ui`] - User-facing output
//!
//! # Guarantees
//!
//! 1. Missing configuration is reported before any network call
//! 2. An existing remote repository is never overwritten
//! 3. An existing local directory is never reused
//! 4. Tokens never appear in output or error messages

pub mod cli;
pub mod core;
pub mod engine;
pub mod forge;
pub mod git;
pub mod ui;
