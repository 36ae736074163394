use super::*;

/// A member of the group.
///
/// Members created from issues are always active; retiring someone is a manual edit
/// of the generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMember {
  /// Full name, also the source of the slug
  pub name:           String,
  /// Role in English
  pub role:           String,
  /// Role in Polish
  pub role_pl:        Option<String>,
  /// Affiliation in Polish
  pub affiliation_pl: Option<String>,
  /// Affiliation in English
  pub affiliation_en: Option<String>,
  /// Contact email
  pub email:          Option<String>,
  /// LinkedIn profile URL
  pub linkedin:       Option<String>,
  /// GitHub profile URL
  pub github:         Option<String>,
  /// Picture file name or URL
  pub picture:        Option<String>,
  /// Research areas, in the order given
  pub research_areas: Vec<String>,
  /// Position in the team listing
  pub order:          Option<i64>,
}

impl TeamMember {
  /// Whether the member is listed as active. Always `true` for generated records.
  pub fn active(&self) -> bool { true }
}

impl ContentGenerator for TeamMember {
  const KIND: Kind = Kind::TeamMember;

  fn from_fields(fields: &Fields) -> Self {
    let order = fields.get("order").and_then(|raw| {
      let parsed = format::parse_int(raw);
      if parsed.is_none() {
        debug!(%raw, "order is not numeric, leaving it out");
      }
      parsed
    });

    Self {
      name: lookup(fields, &["full_name"]).unwrap_or_default(),
      role: lookup(fields, &["role_(english)", "role_en"]).unwrap_or_default(),
      role_pl: lookup(fields, &["role_(polish)", "role_pl"]),
      affiliation_pl: lookup(fields, AFFILIATION_PL),
      affiliation_en: lookup(fields, AFFILIATION_EN),
      email: lookup(fields, &["email"]),
      linkedin: lookup(fields, &["linkedin"]),
      github: lookup(fields, &["github_url", "github"]),
      picture: lookup(fields, &["picture"]),
      research_areas: fields
        .get("research_areas")
        .map(|raw| split_list(raw, ','))
        .unwrap_or_default(),
      order,
    }
  }

  fn slug(&self) -> String { format::slugify(&self.name) }

  fn frontmatter(&self) -> Frontmatter {
    Frontmatter::new()
      .string("name", &self.name)
      .string("role", &self.role)
      .optional_string("role_pl", self.role_pl.as_deref())
      .optional_string("affiliation_pl", self.affiliation_pl.as_deref())
      .optional_string("affiliation_en", self.affiliation_en.as_deref())
      .optional_string("email", self.email.as_deref())
      .optional_string("linkedin", self.linkedin.as_deref())
      .optional_string("github", self.github.as_deref())
      .optional_string("picture", self.picture.as_deref())
      .optional_sequence("research_areas", &self.research_areas)
      .boolean("active", self.active())
      .optional_integer("order", self.order)
  }
}
