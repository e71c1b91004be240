//! core
//!
//! Core domain types and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RepoName, Token, Visibility, Mode, RepositoryRequest
//! - [`config`] - Flag, environment and config file resolution
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Configuration is resolved once and passed explicitly

pub mod config;
pub mod types;
