//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing of progress, warnings and errors
//!
//! # Design
//!
//! All user-facing text goes through this module so quiet and debug modes
//! behave the same everywhere. Tokens are never passed to it.

pub mod output;
