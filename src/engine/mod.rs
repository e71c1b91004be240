//! engine
//!
//! Orchestrates one invocation: Identity -> Remote -> Local.
//!
//! # Architecture
//!
//! The engine receives a [`ResolvedConfig`](crate::core::config::ResolvedConfig)
//! and two collaborators, a `&dyn Forge` and a `&dyn VersionControl`. It
//! never reads the environment and never changes the working directory.
//!
//! # Invariants
//!
//! - The forge is contacted only after configuration resolved successfully
//! - No creation request is sent for a name that already exists
//! - The working copy directory is checked before the remote is created
//! - Every git command's result is checked
//!
//! # Example
//!
//! ```ignore
//! use ghinit::engine::{pipeline, Context};
//! use ghinit::forge::github::GitHubForge;
//! use ghinit::git::GitCli;
//!
//! let forge = GitHubForge::with_api_base(config.request.token.clone(), &config.api_url);
//! let report = pipeline::run(&config, &forge, &GitCli::new(), &Context::default()).await?;
//! println!("{}", report.workspace.display());
//! ```

pub mod error;
pub mod pipeline;

pub use error::SeedError;
pub use pipeline::{RunReport, Stage};

use crate::ui::output::Verbosity;

/// Execution context for a run.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_context() {
        assert_eq!(Context::default().verbosity(), Verbosity::Normal);
        assert_eq!(
            Context {
                debug: true,
                quiet: false
            }
            .verbosity(),
            Verbosity::Debug
        );
        assert_eq!(
            Context {
                debug: true,
                quiet: true
            }
            .verbosity(),
            Verbosity::Quiet
        );
    }
}
