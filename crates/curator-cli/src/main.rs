//! Command line entry point for turning GitHub issue submissions into website content.
//!
//! The tool is meant to run once per issue event in CI. Its inputs are usually taken
//! from the environment:
//!
//! - `ISSUE_LABEL`: `add-seminar`, `add-publication` or `add-team-member`
//! - `ISSUE_BODY`: the raw issue form body
//! - `ISSUE_NUMBER`: the issue number, used for logging only
//!
//! # Usage
//!
//! ```bash
//! # Generate from the environment, writing under the current directory
//! ISSUE_LABEL=add-seminar ISSUE_BODY="$(cat body.md)" issue-to-content
//!
//! # Same, with explicit flags and without writing anything
//! issue-to-content --label add-publication --body-file body.md --dry-run
//!
//! # Check every content file against the collection schemas
//! issue-to-content validate
//! ```
//!
//! Stdout carries the machine-readable result (`Created: <path>` followed by
//! `Content:` and the file). Diagnostics go to stderr; use `-v` (repeatable) or
//! `RUST_LOG` for more detail. The process exits with status 1 on any failure.

#![warn(missing_docs)]

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use console::style;
use curator::{error::CuratorError, schema, Config, Fields, Kind};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Turn GitHub issue submissions into website content files")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Repository root that content paths are resolved against. Defaults to the current
  /// directory.
  #[arg(long, global = true, env = "CURATOR_ROOT")]
  root: Option<PathBuf>,

  /// Configuration file. Defaults to `curator.toml` in the root, if present.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Generation inputs, used when no subcommand is given
  #[command(flatten)]
  generate: GenerateArgs,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Option<Commands>,
}

impl Cli {
  /// Resolves the configuration from `--root` and `--config`.
  fn load_config(&self) -> Result<Config> {
    let root = match &self.root {
      Some(root) => root.clone(),
      None => std::env::current_dir()?,
    };
    let config = match &self.config {
      Some(path) => Config::from_path(path)?.with_root(&root),
      None => Config::load(&root)?,
    };
    debug!(?config, "resolved configuration");
    Ok(config)
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the `issue-to-content` binary.
fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let result = cli.load_config().and_then(|config| match &cli.command {
    None => generate(&config, &cli.generate),
    Some(Commands::Validate(args)) => validate(&config, args),
  });

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}{e}", style(ERROR_PREFIX).red());
      ExitCode::FAILURE
    },
  }
}
