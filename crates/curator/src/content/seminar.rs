use super::*;

/// A seminar talk.
///
/// Polish and English variants are independent: supplying only one of them never
/// fills in or suppresses the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seminar {
  /// Date of the talk as entered, usually `YYYY-MM-DD`
  pub date:           String,
  /// Speaker's full name
  pub speaker:        String,
  /// Speaker's affiliation in Polish
  pub affiliation_pl: Option<String>,
  /// Speaker's affiliation in English
  pub affiliation_en: Option<String>,
  /// English title
  pub title:          String,
  /// Polish title
  pub title_pl:       Option<String>,
  /// English abstract
  pub abstract_en:    Option<String>,
  /// Polish abstract
  pub abstract_pl:    Option<String>,
  /// Link to the slides
  pub slides:         Option<String>,
}

impl ContentGenerator for Seminar {
  const KIND: Kind = Kind::Seminar;

  fn from_fields(fields: &Fields) -> Self {
    Self {
      date:           lookup(fields, &["date"]).unwrap_or_default(),
      speaker:        lookup(fields, &["speaker"]).unwrap_or_default(),
      affiliation_pl: lookup(fields, AFFILIATION_PL),
      affiliation_en: lookup(fields, AFFILIATION_EN),
      title:          lookup(fields, &["title_(english)", "title_en"]).unwrap_or_default(),
      title_pl:       lookup(fields, &["title_(polish)", "title_pl"]),
      abstract_en:    lookup(fields, &["abstract_(english)", "abstract_en"]),
      abstract_pl:    lookup(fields, &["abstract_(polish)", "abstract_pl"]),
      slides:         lookup(fields, &["slides_url", "slides"]),
    }
  }

  /// `<date>-<speaker surname>`, e.g. `2024-03-14-holynski`.
  fn slug(&self) -> String {
    format!("{}-{}", self.date, format::slugify(format::last_token(&self.speaker)))
  }

  fn frontmatter(&self) -> Frontmatter {
    Frontmatter::new()
      .string("date", &self.date)
      .string("speaker", &self.speaker)
      .optional_string("affiliation_pl", self.affiliation_pl.as_deref())
      .optional_string("affiliation_en", self.affiliation_en.as_deref())
      .string("title", &self.title)
      .optional_string("title_pl", self.title_pl.as_deref())
      .optional_string("abstract", self.abstract_en.as_deref())
      .optional_string("abstract_pl", self.abstract_pl.as_deref())
      .optional_string("slides", self.slides.as_deref())
  }
}
