//! Error types for the curator library.
//!
//! Generation itself is infallible: missing or malformed issue fields are coerced and
//! left for schema validation. Errors come from the invocation boundary (no body, an
//! unrecognized label), from the filesystem, from configuration loading, and from
//! the strict schema checker.
//!
//! # Examples
//!
//! ```
//! use curator::{error::CuratorError, Config};
//!
//! let result = curator::process("add-project", "### Title\n\nX", "1", &Config::default());
//! match result {
//!   Err(CuratorError::UnknownLabel(label)) => println!("Unknown label: {label}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(_) => println!("Success!"),
//! }
//! ```

use thiserror::Error;

use crate::kind::Kind;

/// Error type alias used for the [`curator`](crate) crate.
pub type Result<T> = core::result::Result<T, CuratorError>;

/// Errors that can occur when turning an issue into a content file.
#[derive(Error, Debug)]
pub enum CuratorError {
  /// The issue body was empty, so there is nothing to parse.
  #[error("No issue body provided")]
  MissingBody,

  /// The classification label does not select any content kind.
  ///
  /// Recognized labels are `add-seminar`, `add-publication` and `add-team-member`.
  #[error("Unknown label: {0}")]
  UnknownLabel(String),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Creating the destination directory fails
  /// - Writing the content file fails
  /// - Reading a configuration or content file fails
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A TOML configuration file could not be deserialized.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The frontmatter block is not valid YAML, or does not match its collection's shape.
  #[error(transparent)]
  Yaml(#[from] serde_yaml::Error),

  /// The content has no `---` delimited frontmatter block.
  #[error("Content has no frontmatter block")]
  MissingFrontmatter,

  /// The frontmatter parsed but violates a constraint of its collection.
  #[error("Invalid {kind} frontmatter: {message}")]
  Schema {
    /// Collection the content was checked against
    kind:    Kind,
    /// What was wrong
    message: String,
  },

  /// The slug would place the file outside its collection directory.
  ///
  /// Seminar slugs start with the date exactly as entered, so a date containing path
  /// separators or `..` ends up here instead of on disk.
  #[error("Refusing to write {0:?}: slug must be a single file name")]
  UnsafeSlug(String),

  /// Configuration values are inconsistent or unusable.
  #[error("{0}")]
  Config(String),
}
