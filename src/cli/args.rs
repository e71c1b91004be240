//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `-n/--repository-name <NAME>`: repository to create (required)
//! - `-u/--username`, `-t/--token`, `-p/--path`: fall back to
//!   `GITHUB_USERNAME`, `GITHUB_TOKEN`, `PROJECTS_BASE_PATH`
//! - `--public`: create a public repository (default private)
//! - `--mode clone|push`: how the local working copy is produced
//! - `--debug` / `-q, --quiet`: output verbosity

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::CliOverrides;
use crate::core::types::Mode;

/// ghinit - Create a GitHub repository and set up its local working copy
#[derive(Parser, Debug)]
#[command(name = "ghinit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT:
    GITHUB_USERNAME      used when -u/--username is not given
    GITHUB_TOKEN         used when -t/--token is not given
    PROJECTS_BASE_PATH   used when -p/--path is not given
    GHINIT_CONFIG        path of the config file

    Variables may also be set in a .env file in the current directory.

EXAMPLES:
    # Create a private repository and clone it into $PROJECTS_BASE_PATH/demo
    ghinit -n demo

    # Create a public repository, initialize locally, push a README
    ghinit -n demo --public --mode push -p ~/projects")]
pub struct Cli {
    /// Name of the repository to create
    #[arg(short = 'n', long = "repository-name", value_name = "NAME")]
    pub repository_name: String,

    /// GitHub username (default: $GITHUB_USERNAME)
    #[arg(short, long, value_name = "USER")]
    pub username: Option<String>,

    /// GitHub token with repository create permission (default: $GITHUB_TOKEN)
    #[arg(short, long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Base directory for the working copy (default: $PROJECTS_BASE_PATH)
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Create a public repository instead of a private one
    #[arg(long)]
    pub public: bool,

    /// Local setup: "clone" the new remote, or "push" a fresh local repository
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// GitHub REST API base URL (GitHub Enterprise: https://HOST/api/v3)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Git host used in clone and remote URLs
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// File with KEY=VALUE defaults
    #[arg(long, value_name = "FILE", default_value = ".env")]
    pub env_file: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The flag values relevant to configuration resolution.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            repository_name: self.repository_name.clone(),
            username: self.username.clone(),
            token: self.token.clone(),
            path: self.path.clone(),
            public: self.public,
            mode: self.mode,
            api_url: self.api_url.clone(),
            host: self.host.clone(),
        }
    }
}
