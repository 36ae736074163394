//! Errors surfaced by the `issue-to-content` binary.

use thiserror::Error;

use super::*;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, CliError>;

/// Failures that end an invocation with a non-zero exit status.
#[derive(Error, Debug)]
pub enum CliError {
  /// Error from the `curator` library.
  #[error(transparent)]
  Curator(#[from] CuratorError),

  /// Reading an input file or the working directory failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A collection glob pattern was malformed.
  #[error(transparent)]
  Pattern(#[from] glob::PatternError),

  /// Walking a collection directory failed.
  #[error(transparent)]
  Glob(#[from] glob::GlobError),

  /// Rendering the parsed fields for the log failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A file passed to `validate` is not inside any collection and no `--kind` was given.
  #[error("Cannot tell the content kind of {}; pass --kind", .0.display())]
  UnknownKind(PathBuf),

  /// At least one file failed validation.
  #[error("{0} file(s) failed validation")]
  Invalid(usize),
}
