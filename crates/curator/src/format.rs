//! Text helpers shared by the generators: slugs and lenient number parsing.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use super::*;

/// Maximum length of a slug, in characters.
pub const MAX_SLUG_LENGTH: usize = 60;

lazy_static! {
  static ref LEADING_INT: Regex = Regex::new(r"^[+-]?\d+").unwrap();
  static ref LEADING_FLOAT: Regex =
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Creates a URL-safe slug from free text.
///
/// The text is lowercased and stripped of diacritics (`Hołyński` → `holynski`),
/// everything outside `[a-z0-9]`, whitespace and `-` is dropped, whitespace runs
/// become a single `-`, and the result is cut to [`MAX_SLUG_LENGTH`] characters.
///
/// ```
/// use curator::format::slugify;
///
/// assert_eq!(slugify("Jan Hołyński"), "jan-holynski");
/// assert_eq!(slugify("  Deep -- Learning!  "), "deep-learning");
/// ```
pub fn slugify(text: &str) -> String {
  let mut ascii = String::with_capacity(text.len());
  for c in text.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
    match transliterate(c) {
      Some(spelled) => ascii.push_str(spelled),
      None => ascii.push(c),
    }
  }
  ascii.retain(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-');

  let mut slug = String::with_capacity(ascii.len());
  for c in ascii.trim().chars() {
    let c = if c.is_whitespace() { '-' } else { c };
    if c == '-' && slug.ends_with('-') {
      continue;
    }
    slug.push(c);
  }

  let slug = slug.trim_matches('-');
  match slug.char_indices().nth(MAX_SLUG_LENGTH) {
    Some((end, _)) => slug[..end].to_owned(),
    None => slug.to_owned(),
  }
}

/// ASCII spelling of Latin letters that have no canonical decomposition.
fn transliterate(c: char) -> Option<&'static str> {
  let spelled = match c {
    'ł' => "l",
    'đ' => "d",
    'ø' => "o",
    'ß' => "ss",
    'æ' => "ae",
    'œ' => "oe",
    'þ' => "th",
    'ħ' => "h",
    'ı' => "i",
    _ => return None,
  };
  Some(spelled)
}

/// The last whitespace-delimited word of `text`, or `text` itself if it has none.
///
/// Used to pick a surname out of a full name.
pub fn last_token(text: &str) -> &str { text.split_whitespace().last().unwrap_or(text) }

/// Parses the leading base-10 integer of `raw`, ignoring anything after it.
///
/// `"42"` and `"42nd"` both give `Some(42)`; `"n/a"` gives `None`. Leading whitespace
/// is skipped.
///
/// Digits that overflow `i64` give `None`, the same as non-numeric input, so an absurd
/// year is written as `0` like any other unreadable one.
pub fn parse_int(raw: &str) -> Option<i64> {
  LEADING_INT.find(raw.trim_start()).and_then(|m| m.as_str().parse().ok())
}

/// Parses the leading decimal number of `raw`, ignoring anything after it.
///
/// ```
/// use curator::format::parse_float;
///
/// assert_eq!(parse_float("2.5"), Some(2.5));
/// assert_eq!(parse_float("3.1 (2023)"), Some(3.1));
/// assert_eq!(parse_float("unknown"), None);
/// ```
pub fn parse_float(raw: &str) -> Option<f64> {
  LEADING_FLOAT.find(raw.trim_start()).and_then(|m| m.as_str().parse().ok())
}
