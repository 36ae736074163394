//! Parsing of GitHub issue form bodies.
//!
//! Issue forms render every input as a level-three heading followed by the answer:
//!
//! ```text
//! ### Affiliation (Polish)
//!
//! Wydział MiNI PW
//!
//! ### Slides URL
//!
//! _No response_
//! ```
//!
//! [`Fields::parse`] turns that into a flat map keyed by the normalized heading
//! (`affiliation_(polish)`, `slides_url`). Unanswered inputs are absent from the map.

use super::*;

/// The placeholder GitHub writes for an optional input left blank.
pub const NO_RESPONSE: &str = "_No response_";

/// Marker that starts a new block in an issue form body.
const HEADER_PREFIX: &str = "### ";

lazy_static! {
  static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalized issue form answers, keyed by heading.
///
/// Keys are lowercase with whitespace runs replaced by `_`; punctuation such as
/// parentheses is kept, so `Title (English)` becomes `title_(english)`. Values are
/// trimmed and never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, String>);

impl Fields {
  /// Parses an issue form body.
  ///
  /// A later block with the same heading replaces an earlier one.
  ///
  /// ```
  /// use curator::Fields;
  ///
  /// let fields = Fields::parse("### Speaker\n\nAda Lovelace\n\n### Slides URL\n\n_No response_");
  /// assert_eq!(fields.get("speaker"), Some("Ada Lovelace"));
  /// assert_eq!(fields.get("slides_url"), None);
  /// ```
  pub fn parse(body: &str) -> Self {
    let mut fields = BTreeMap::new();

    for block in split_blocks(body) {
      let mut lines = block.iter().copied();
      let Some(header) = lines.next() else { continue };

      let key = normalize_key(header);
      let value = strip_placeholder(&lines.collect::<Vec<_>>().join("\n"));

      if key.is_empty() || value.is_empty() {
        trace!(%key, "skipping block without a usable key or value");
        continue;
      }
      if let Some(previous) = fields.insert(key.clone(), value) {
        debug!(%key, %previous, "duplicate heading, keeping the later answer");
      }
    }

    Self(fields)
  }

  /// Value stored under `key`, if the question was answered.
  pub fn get(&self, key: &str) -> Option<&str> { self.0.get(key).map(String::as_str) }

  /// Value of the first key in `candidates` that is present.
  ///
  /// Issue templates have changed wording over time, so most logical fields are
  /// looked up under several keys, most specific first.
  pub fn first_of(&self, candidates: &[&str]) -> Option<&str> {
    candidates.iter().find_map(|key| self.get(key))
  }

  /// Number of answered fields.
  pub fn len(&self) -> usize { self.0.len() }

  /// Whether no field was answered.
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Iterates the answered fields in key order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl FromIterator<(String, String)> for Fields {
  fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
    Self(iter.into_iter().filter(|(k, v)| !k.is_empty() && !v.is_empty()).collect())
  }
}

/// Splits `body` into blocks of lines, starting a new block at every `### ` line.
///
/// The `### ` marker is removed from the first line of each block. Text before the
/// first heading forms a block of its own. Blocks with no non-blank content are
/// dropped.
fn split_blocks(body: &str) -> Vec<Vec<&str>> {
  let mut blocks = Vec::new();
  let mut current: Vec<&str> = Vec::new();

  for line in body.split('\n') {
    let line = line.strip_suffix('\r').unwrap_or(line);
    match line.strip_prefix(HEADER_PREFIX) {
      Some(header) => blocks.push(std::mem::replace(&mut current, vec![header])),
      None => current.push(line),
    }
  }
  blocks.push(current);

  blocks
    .into_iter()
    .map(|block| {
      // Leading blank lines belong to no heading; the first real line is the key.
      let start = block.iter().position(|line| !line.trim().is_empty()).unwrap_or(block.len());
      block[start..].to_vec()
    })
    .filter(|block| !block.is_empty())
    .collect()
}

/// Lowercases a heading and joins its words with `_`.
fn normalize_key(header: &str) -> String {
  WHITESPACE.replace_all(&header.trim().to_lowercase(), "_").into_owned()
}

/// Trims `value` and blanks out the first line that is exactly the no-response
/// placeholder.
fn strip_placeholder(value: &str) -> String {
  let value = value.trim();
  let mut replaced = false;
  let lines: Vec<&str> = value
    .split('\n')
    .map(|line| {
      if !replaced && line == NO_RESPONSE {
        replaced = true;
        ""
      } else {
        line
      }
    })
    .collect();
  lines.join("\n").trim().to_owned()
}
