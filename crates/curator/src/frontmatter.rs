//! Serialization of content frontmatter.
//!
//! The site's generated files are reviewed in pull requests and compared in golden
//! tests, so output is produced line by line in a fixed order rather than through a
//! general-purpose YAML serializer.
//!
//! Rules:
//! - strings are always wrapped in double quotes; `\` becomes `\\`, `"` becomes `\"` and
//!   a line break becomes `\n`, and an empty string is written as `""`
//! - sequences are written as a `key:` line followed by one `  - "item"` line per item
//! - integers, floats and booleans are written bare; floats use the shortest form
//!   that reads back to the same value (`3`, `2.5`)
//! - the block is wrapped in `---` lines and ends with a newline

/// Line delimiting the frontmatter block.
pub const DELIMITER: &str = "---";

/// Builder for a frontmatter block.
///
/// ```
/// use curator::frontmatter::Frontmatter;
///
/// let content = Frontmatter::new()
///   .string("title", "Graphs: a survey")
///   .optional_string("doi", None)
///   .integer("year", 2024)
///   .finish();
/// assert_eq!(content, "---\ntitle: \"Graphs: a survey\"\nyear: 2024\n---\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
  lines: Vec<String>,
}

impl Frontmatter {
  /// Starts an empty block.
  pub fn new() -> Self { Self::default() }

  /// Appends a quoted string entry.
  pub fn string(mut self, key: &str, value: &str) -> Self {
    self.lines.push(format!("{key}: {}", quote(value)));
    self
  }

  /// Appends a quoted string entry when `value` is present and non-empty.
  pub fn optional_string(self, key: &str, value: Option<&str>) -> Self {
    match value.filter(|v| !v.is_empty()) {
      Some(value) => self.string(key, value),
      None => self,
    }
  }

  /// Appends a sequence of quoted strings.
  ///
  /// An empty sequence leaves only the `key:` line.
  pub fn sequence<S: AsRef<str>>(mut self, key: &str, items: &[S]) -> Self {
    self.lines.push(format!("{key}:"));
    self.lines.extend(items.iter().map(|item| format!("  - {}", quote(item.as_ref()))));
    self
  }

  /// Appends a sequence only when it has items.
  pub fn optional_sequence<S: AsRef<str>>(self, key: &str, items: &[S]) -> Self {
    if items.is_empty() {
      self
    } else {
      self.sequence(key, items)
    }
  }

  /// Appends a bare integer entry.
  pub fn integer(mut self, key: &str, value: i64) -> Self {
    self.lines.push(format!("{key}: {value}"));
    self
  }

  /// Appends a bare integer entry when present.
  pub fn optional_integer(self, key: &str, value: Option<i64>) -> Self {
    match value {
      Some(value) => self.integer(key, value),
      None => self,
    }
  }

  /// Appends a bare float entry when present.
  pub fn optional_float(mut self, key: &str, value: Option<f64>) -> Self {
    if let Some(value) = value {
      self.lines.push(format!("{key}: {value}"));
    }
    self
  }

  /// Appends a bare boolean entry.
  pub fn boolean(mut self, key: &str, value: bool) -> Self {
    self.lines.push(format!("{key}: {value}"));
    self
  }

  /// Renders the delimited block.
  pub fn finish(self) -> String {
    let mut out = String::from(DELIMITER);
    out.push('\n');
    for line in self.lines {
      out.push_str(&line);
      out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out
  }
}

/// Quotes a string value for the frontmatter.
///
/// ```
/// use curator::frontmatter::quote;
///
/// assert_eq!(quote(""), "\"\"");
/// assert_eq!(quote("Smith Jr., John"), "\"Smith Jr., John\"");
/// assert_eq!(quote("The \"best\" paper"), "\"The \\\"best\\\" paper\"");
/// assert_eq!(quote("C:\\dir"), "\"C:\\\\dir\"");
/// assert_eq!(quote("one\ntwo"), "\"one\\ntwo\"");
/// ```
pub fn quote(value: &str) -> String {
  let mut quoted = String::with_capacity(value.len() + 2);
  quoted.push('"');
  for c in value.chars() {
    match c {
      '\\' => quoted.push_str("\\\\"),
      '"' => quoted.push_str("\\\""),
      '\n' => quoted.push_str("\\n"),
      c => quoted.push(c),
    }
  }
  quoted.push('"');
  quoted
}
