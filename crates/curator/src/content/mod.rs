//! Content generators, one per [`Kind`].
//!
//! Each generator reads its logical fields out of [`Fields`] (trying alias keys in
//! priority order), normalizes them, and renders a frontmatter-only markdown file. A
//! generator never fails: required values that are missing are written empty, and
//! unparseable numbers fall back to a default or are left out.
//!
//! # Examples
//!
//! ```
//! use curator::{content::generate, Config, Fields, Kind};
//!
//! let fields = Fields::parse("### Full Name\n\nAnna Nowak\n\n### Role (English)\n\nPostdoc");
//! let generated = generate(Kind::TeamMember, &fields, &Config::default());
//! assert!(generated.path.ends_with("team/anna-nowak.md"));
//! assert!(generated.content.contains("active: true"));
//! ```

use std::path::Component;

use super::*;

mod publication;
mod seminar;
mod team;

pub use publication::*;
pub use seminar::*;
pub use team::*;

/// Alias keys for the Polish affiliation, shared by seminars and team members.
const AFFILIATION_PL: &[&str] = &["affiliation_(polish)", "affiliation_pl"];
/// Alias keys for the English affiliation, shared by seminars and team members.
const AFFILIATION_EN: &[&str] = &["affiliation_(english)", "affiliation_en"];

/// A content record that can be built from issue fields and rendered to a file.
pub trait ContentGenerator: Sized {
  /// The kind this record belongs to.
  const KIND: Kind;

  /// Builds the record, normalizing and defaulting fields.
  fn from_fields(fields: &Fields) -> Self;

  /// File stem identifying this record within its collection.
  fn slug(&self) -> String;

  /// The frontmatter entries, in output order.
  fn frontmatter(&self) -> Frontmatter;

  /// Renders the record into its destination path and file content.
  fn render(&self, config: &Config) -> Generated {
    let slug = self.slug();
    Generated {
      kind:    Self::KIND,
      path:    config.content_path(Self::KIND, &slug),
      slug,
      content: self.frontmatter().finish(),
    }
  }
}

/// A rendered content file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
  /// Kind of the record
  pub kind:    Kind,
  /// File stem within the collection
  pub slug:    String,
  /// Destination path
  pub path:    PathBuf,
  /// Full file content
  pub content: String,
}

impl Generated {
  /// Writes the content to [`Generated::path`], creating parent directories as needed.
  ///
  /// An existing file at the same path is replaced.
  ///
  /// # Errors
  ///
  /// - [`CuratorError::UnsafeSlug`] if the slug is not a plain file name
  /// - [`CuratorError::Io`] if the directory or file cannot be written
  pub fn write(&self) -> Result<&Path> {
    let mut components = Path::new(&self.slug).components();
    let contained = match (components.next(), components.next()) {
      (None, _) => true,
      (Some(Component::Normal(_)), None) => !self.slug.contains('\\'),
      _ => false,
    };
    if !contained {
      return Err(CuratorError::UnsafeSlug(self.slug.clone()));
    }
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    if self.path.exists() {
      debug!("Overwriting existing file at {}", self.path.display());
    }
    std::fs::write(&self.path, &self.content)?;
    info!(kind = %self.kind, path = %self.path.display(), "wrote content file");
    Ok(&self.path)
  }
}

/// Runs the generator for `kind`.
pub fn generate(kind: Kind, fields: &Fields, config: &Config) -> Generated {
  match kind {
    Kind::Seminar => Seminar::from_fields(fields).render(config),
    Kind::Publication => Publication::from_fields(fields).render(config),
    Kind::TeamMember => TeamMember::from_fields(fields).render(config),
  }
}

/// Owned value of the first present alias.
fn lookup(fields: &Fields, candidates: &[&str]) -> Option<String> {
  fields.first_of(candidates).map(str::to_owned)
}

/// Splits `raw` on `separator`, trimming items and dropping empty ones.
fn split_list(raw: &str, separator: char) -> Vec<String> {
  raw.split(separator).map(str::trim).filter(|item| !item.is_empty()).map(str::to_owned).collect()
}
