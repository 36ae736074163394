use super::*;

pub mod generate;
pub mod validate;

pub use generate::{generate, GenerateArgs};
pub use validate::{validate, ValidateArgs};

/// Available subcommands. Without one, the tool generates a content file.
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Check content files against their collection's schema
  Validate(ValidateArgs),
}

/// Content kind selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
  /// Seminar talks
  Seminar,
  /// Publications
  Publication,
  /// Team members
  Team,
}

impl From<KindArg> for Kind {
  fn from(kind: KindArg) -> Self {
    match kind {
      KindArg::Seminar => Kind::Seminar,
      KindArg::Publication => Kind::Publication,
      KindArg::Team => Kind::TeamMember,
    }
  }
}
