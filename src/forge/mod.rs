//! forge
//!
//! Abstraction for the remote forge (GitHub).
//!
//! # Architecture
//!
//! The `Forge` trait defines the three calls this tool makes against a
//! hosting service. The pipeline only sees `&dyn Forge`, so tests drive it
//! with [`mock::MockForge`] and the binary with [`github::GitHubForge`].
//!
//! # Modules
//!
//! - `traits`: Core `Forge` trait and request/response types
//! - [`github`]: GitHub implementation using the REST API
//! - [`mock`]: Mock implementation for deterministic testing

pub mod github;
pub mod mock;
mod traits;

pub use traits::*;
