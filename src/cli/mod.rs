//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Capture the environment and `.env` file once
//! - Resolve configuration, then hand off to the [`crate::engine`]
//!
//! # Architecture
//!
//! The CLI layer is thin. It builds the concrete forge and git backends and
//! drives the async pipeline on a single-threaded runtime.

pub mod args;

pub use args::Cli;

use anyhow::{anyhow, Result};

use crate::core::config::{resolve, Config, Environment};
use crate::engine::{self, pipeline, SeedError};
use crate::forge::github::GitHubForge;
use crate::git::GitCli;
use crate::ui::output;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = engine::Context {
        debug: cli.debug,
        quiet: cli.quiet,
    };

    let env = Environment::capture(Some(cli.env_file.as_path())).map_err(SeedError::from)?;
    let home = dirs::home_dir();
    let file = Config::load(&env, home.as_deref()).map_err(SeedError::from)?;
    if let Some(path) = file.loaded_from() {
        output::debug(
            format!("loaded config from {}", path.display()),
            ctx.verbosity(),
        );
    }

    let config =
        resolve(&cli.overrides(), &env, &file.global, home.as_deref()).map_err(SeedError::from)?;

    let forge = GitHubForge::with_api_base(config.request.token.clone(), &config.api_url);
    let vcs = GitCli::new()
        .echo(ctx.verbosity().shows_debug())
        .show_output(ctx.verbosity().shows_progress());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("failed to start async runtime: {}", e))?;

    let report = runtime.block_on(pipeline::run(&config, &forge, &vcs, &ctx))?;

    output::print(
        format!(
            "Done: {} -> {}",
            report.remote.html_url,
            report.workspace.display()
        ),
        ctx.verbosity(),
    );

    Ok(())
}
