//! Strict validation of content frontmatter.
//!
//! The site build rejects any content file whose frontmatter has unknown keys,
//! misses required keys, or has values of the wrong type. This module checks the same
//! rules so generated (or hand-edited) files can be verified without the site
//! toolchain.
//!
//! # Examples
//!
//! ```
//! use curator::{schema, Kind};
//!
//! let content = "---\ndate: \"2024-01-01\"\nspeaker: \"A\"\ntitle: \"T\"\n---\n";
//! assert!(schema::validate(Kind::Seminar, content).is_ok());
//!
//! let content = "---\ndate: \"2024-01-01\"\nspeaker: \"A\"\ntitle: \"T\"\nroom: \"101\"\n---\n";
//! assert!(schema::validate(Kind::Seminar, content).is_err());
//! ```

use serde::de::DeserializeOwned;

use crate::content::PublicationType;

use super::*;

lazy_static! {
  static ref FRONTMATTER: Regex = Regex::new(r"^---\r?\n((?s:.*?))\r?\n---").unwrap();
}

/// Frontmatter of a seminar file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct SeminarFrontmatter {
  pub date:           String,
  pub speaker:        String,
  pub affiliation_pl: Option<String>,
  pub affiliation_en: Option<String>,
  pub title:          String,
  pub title_pl:       Option<String>,
  #[serde(rename = "abstract")]
  pub abstract_en:    Option<String>,
  pub abstract_pl:    Option<String>,
  pub slides:         Option<String>,
}

/// Frontmatter of a publication file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct PublicationFrontmatter {
  pub authors:          Vec<String>,
  pub title:            String,
  pub journal:          Option<String>,
  pub booktitle:        Option<String>,
  pub year:             f64,
  pub doi:              Option<String>,
  pub url:              Option<String>,
  pub impact_factor:    Option<f64>,
  #[serde(rename = "type")]
  pub publication_type: PublicationType,
}

/// Frontmatter of a team member file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct TeamFrontmatter {
  pub name:           String,
  pub role:           String,
  pub role_pl:        Option<String>,
  pub affiliation_pl: Option<String>,
  pub affiliation_en: Option<String>,
  pub email:          Option<String>,
  pub linkedin:       Option<String>,
  pub github:         Option<String>,
  pub picture:        Option<String>,
  pub research_areas: Option<Vec<String>>,
  #[serde(default = "default_active")]
  pub active:         bool,
  pub order:          Option<f64>,
}

/// Members are active unless a file says otherwise.
fn default_active() -> bool { true }

/// A frontmatter block that passed validation.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ValidFrontmatter {
  Seminar(SeminarFrontmatter),
  Publication(PublicationFrontmatter),
  TeamMember(TeamFrontmatter),
}

/// Returns the text between the opening and closing `---` lines of `content`.
pub fn extract_frontmatter(content: &str) -> Result<&str> {
  FRONTMATTER
    .captures(content)
    .and_then(|captures| captures.get(1))
    .map(|m| m.as_str())
    .ok_or(CuratorError::MissingFrontmatter)
}

/// Checks `content` against the strict schema of `kind`'s collection.
///
/// # Errors
///
/// - [`CuratorError::MissingFrontmatter`] if there is no `---` block
/// - [`CuratorError::Yaml`] if the block is not valid YAML
/// - [`CuratorError::Schema`] for unknown keys, missing required keys, wrong value types,
///   or a `linkedin`/`github` value that is not an absolute URL
pub fn validate(kind: Kind, content: &str) -> Result<ValidFrontmatter> {
  let block = extract_frontmatter(content)?;
  let value: serde_yaml::Value = serde_yaml::from_str(block)?;
  trace!(%kind, "checking frontmatter against schema");

  match kind {
    Kind::Seminar => typed(kind, value).map(ValidFrontmatter::Seminar),
    Kind::Publication => typed(kind, value).map(ValidFrontmatter::Publication),
    Kind::TeamMember => {
      let team: TeamFrontmatter = typed(kind, value)?;
      for (key, value) in [("linkedin", &team.linkedin), ("github", &team.github)] {
        if let Some(value) = value {
          url::Url::parse(value).map_err(|e| CuratorError::Schema {
            kind,
            message: format!("{key} is not a valid URL ({value:?}): {e}"),
          })?;
        }
      }
      Ok(ValidFrontmatter::TeamMember(team))
    },
  }
}

/// Deserializes a YAML value into a schema struct, reporting failures against `kind`.
fn typed<T: DeserializeOwned>(kind: Kind, value: serde_yaml::Value) -> Result<T> {
  serde_yaml::from_value(value)
    .map_err(|e| CuratorError::Schema { kind, message: e.to_string() })
}
