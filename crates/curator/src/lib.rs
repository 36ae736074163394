//! Issue submission to website content conversion.
//!
//! `curator` turns the body of a GitHub issue form submission into a markdown
//! content file for the group website, providing:
//!
//! - Parsing of issue form bodies (`### Header` blocks) into a field map
//! - URL-safe slug construction with diacritic stripping
//! - Generators for three content kinds: seminars, publications, team members
//! - A small, byte-stable frontmatter serializer
//! - A strict schema checker mirroring the site's content collections
//!
//! # Getting Started
//!
//! ```no_run
//! use curator::{prelude::*, Config};
//!
//! fn main() -> Result<(), CuratorError> {
//!   let body = "### Date\n\n2024-10-01\n\n### Speaker\n\nJan Kowalski\n\n### Title \
//!               (English)\n\nOn Graphs";
//!   let generated = curator::process("add-seminar", body, "42", &Config::default())?;
//!   generated.write()?;
//!   println!("{}", generated.content);
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`fields`]: Issue body parsing and alias lookup
//! - [`format`]: Slugs and lenient numeric parsing
//! - [`frontmatter`]: Frontmatter serialization
//! - [`content`]: Per-kind generators and the [`Generated`] output
//! - [`schema`]: Strict validation of generated frontmatter
//! - [`config`]: Output locations
//! - [`error`]: Error type and `Result` alias
//!
//! Generation never fails on missing or malformed fields. Missing required values
//! are emitted empty and left for [`schema::validate`] (or the site build) to reject.

#![warn(missing_docs)]

use std::{
  collections::BTreeMap,
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod content;
pub mod error;
pub mod fields;
pub mod format;
pub mod frontmatter;
pub mod kind;
pub mod schema;

pub use crate::{config::Config, content::Generated, fields::Fields, kind::Kind};
use crate::{error::*, frontmatter::Frontmatter};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use curator::prelude::*;
///
/// fn example(fields: &Fields) -> Result<(), CuratorError> {
///   let seminar = Seminar::from_fields(fields);
///   println!("{}", seminar.slug());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    content::{ContentGenerator, Publication, Seminar, TeamMember},
    error::CuratorError,
    fields::Fields,
    kind::Kind,
  };
}

/// Runs the whole transformation for one issue without touching the filesystem.
///
/// `label` selects the generator (see [`Kind`]), `body` is the raw issue body and
/// `issue` is only used for log context. The returned [`Generated`] carries the
/// destination path and the file content; call [`Generated::write`] to persist it.
///
/// # Errors
///
/// - [`CuratorError::MissingBody`] if `body` is empty
/// - [`CuratorError::UnknownLabel`] if `label` is not a recognized kind
pub fn process(label: &str, body: &str, issue: &str, config: &Config) -> Result<Generated> {
  if body.is_empty() {
    return Err(CuratorError::MissingBody);
  }

  let kind = Kind::from_str(label)?;
  let fields = Fields::parse(body);
  debug!(issue, %kind, fields = fields.len(), "parsed issue body");

  Ok(content::generate(kind, &fields, config))
}
