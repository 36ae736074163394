//! Content kinds and the issue labels that select them.

use super::*;

/// The classification of a content record.
///
/// Each kind is selected by one issue label, has its own generator and lands in its
/// own collection directory.
///
/// ```
/// use std::str::FromStr;
///
/// use curator::Kind;
///
/// assert_eq!(Kind::from_str("add-seminar").unwrap(), Kind::Seminar);
/// assert!(Kind::from_str("add-project").is_err());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Kind {
  /// A talk given at the group seminar
  Seminar,
  /// A journal article, book chapter or conference paper
  Publication,
  /// A person in the group
  TeamMember,
}

impl Kind {
  /// All kinds, in the order the site lists them.
  pub const ALL: [Kind; 3] = [Kind::Seminar, Kind::Publication, Kind::TeamMember];

  /// The issue label that requests this kind.
  pub fn label(self) -> &'static str {
    match self {
      Kind::Seminar => "add-seminar",
      Kind::Publication => "add-publication",
      Kind::TeamMember => "add-team-member",
    }
  }
}

impl Display for Kind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Kind::Seminar => write!(f, "seminar"),
      Kind::Publication => write!(f, "publication"),
      Kind::TeamMember => write!(f, "team member"),
    }
  }
}

impl FromStr for Kind {
  type Err = CuratorError;

  /// Parses an issue label. Matching is exact; labels are machine-set by the issue
  /// templates.
  fn from_str(s: &str) -> Result<Self> {
    Kind::ALL
      .into_iter()
      .find(|kind| kind.label() == s)
      .ok_or_else(|| CuratorError::UnknownLabel(s.to_owned()))
  }
}
