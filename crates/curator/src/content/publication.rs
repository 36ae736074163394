use super::*;

/// Number of title slug characters used in a publication slug.
const TITLE_SLUG_LENGTH: usize = 30;

/// Publication categories the site knows how to list.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationType {
  /// Journal article; the venue is written as `journal`
  Journal,
  /// Chapter in an edited book; the venue is written as `booktitle`
  BookChapter,
  /// Conference paper; the venue is written as `booktitle`
  Conference,
}

impl Display for PublicationType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PublicationType::Journal => write!(f, "journal"),
      PublicationType::BookChapter => write!(f, "book_chapter"),
      PublicationType::Conference => write!(f, "conference"),
    }
  }
}

impl FromStr for PublicationType {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s {
      "journal" => Ok(PublicationType::Journal),
      "book_chapter" => Ok(PublicationType::BookChapter),
      "conference" => Ok(PublicationType::Conference),
      other => Err(other.to_owned()),
    }
  }
}

/// A published paper.
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
  /// Authors in citation order
  pub authors:          Vec<String>,
  /// Paper title
  pub title:            String,
  /// Journal, book or conference name
  pub venue:            String,
  /// Publication year, `0` when missing or unparseable
  pub year:             i64,
  /// Category as entered; defaults to `journal`
  ///
  /// Kept verbatim so an unexpected value reaches the schema check instead of being
  /// silently remapped.
  pub publication_type: String,
  /// Digital Object Identifier
  pub doi:              Option<String>,
  /// Link to the paper
  pub url:              Option<String>,
  /// Journal impact factor
  pub impact_factor:    Option<f64>,
}

impl Publication {
  /// The recognized category, if the entered one is known.
  pub fn kind(&self) -> Option<PublicationType> { self.publication_type.parse().ok() }

  /// Key the venue is written under: `journal` for journal articles, `booktitle`
  /// otherwise.
  pub fn venue_key(&self) -> &'static str {
    match self.kind() {
      Some(PublicationType::Journal) => "journal",
      _ => "booktitle",
    }
  }
}

impl ContentGenerator for Publication {
  const KIND: Kind = Kind::Publication;

  fn from_fields(fields: &Fields) -> Self {
    // Semicolons, so that "Smith Jr., John" stays one author.
    let authors = fields.get("authors").map(|raw| split_list(raw, ';')).unwrap_or_default();

    let year = fields.get("year").and_then(format::parse_int).unwrap_or_else(|| {
      debug!(raw = ?fields.get("year"), "year missing or not numeric, using 0");
      0
    });

    let impact_factor = fields
      .get("impact_factor")
      .and_then(format::parse_float)
      .filter(|value| value.is_finite() && *value != 0.0);

    Self {
      authors,
      title: lookup(fields, &["title"]).unwrap_or_default(),
      venue: lookup(fields, &["journal_or_venue"]).unwrap_or_default(),
      year,
      publication_type: lookup(fields, &["publication_type"])
        .unwrap_or_else(|| PublicationType::Journal.to_string()),
      doi: lookup(fields, &["doi"]),
      url: lookup(fields, &["url"]),
      impact_factor,
    }
  }

  /// `<year>-<first author surname>-<title prefix>`.
  fn slug(&self) -> String {
    let first_author = self
      .authors
      .first()
      .map(|author| format::slugify(format::last_token(author)))
      .unwrap_or_else(|| "unknown".to_string());
    let title: String = format::slugify(&self.title).chars().take(TITLE_SLUG_LENGTH).collect();
    format!("{}-{first_author}-{title}", self.year)
  }

  fn frontmatter(&self) -> Frontmatter {
    Frontmatter::new()
      .sequence("authors", &self.authors)
      .string("title", &self.title)
      .string(self.venue_key(), &self.venue)
      .integer("year", self.year)
      .optional_string("doi", self.doi.as_deref())
      .optional_string("url", self.url.as_deref())
      .optional_float("impact_factor", self.impact_factor)
      .string("type", &self.publication_type)
  }
}
