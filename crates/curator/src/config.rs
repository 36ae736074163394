//! Output locations for generated content.
//!
//! Files land at `<root>/<content_dir>/<collection>/<slug>.md`. The defaults match the
//! site layout (`src/content/seminars`, `src/content/publications`,
//! `src/content/team`); a `curator.toml` at the repository root can override them:
//!
//! ```toml
//! content_dir = "site/content"
//!
//! [collections]
//! team = "people"
//! ```

use super::*;

/// Name of the optional configuration file looked up in the repository root.
pub const CONFIG_FILE: &str = "curator.toml";

/// Where generated files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Repository root; relative paths resolve against the working directory
  #[serde(skip)]
  pub root:        PathBuf,
  /// Content directory, relative to `root`
  pub content_dir: PathBuf,
  /// Collection directory names, relative to `content_dir`
  pub collections: Collections,
}

/// Directory name of each collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collections {
  /// Seminar collection
  pub seminars:     String,
  /// Publication collection
  pub publications: String,
  /// Team member collection
  pub team:         String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      root:        PathBuf::new(),
      content_dir: PathBuf::from("src").join("content"),
      collections: Collections::default(),
    }
  }
}

impl Default for Collections {
  fn default() -> Self {
    Self {
      seminars:     "seminars".to_string(),
      publications: "publications".to_string(),
      team:         "team".to_string(),
    }
  }
}

impl Config {
  /// Reads a TOML configuration file. The root is left empty; set it with
  /// [`Config::with_root`].
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Reading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.check()?;
    Ok(config)
  }

  /// Loads `<root>/curator.toml` if it exists, otherwise the defaults, rooted at `root`.
  pub fn load(root: impl AsRef<Path>) -> Result<Self> {
    let root = root.as_ref();
    let path = root.join(CONFIG_FILE);
    let config = if path.is_file() { Self::from_path(&path)? } else { Self::default() };
    Ok(config.with_root(root))
  }

  /// Sets the repository root.
  pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
    self.root = root.as_ref().to_path_buf();
    self
  }

  /// Sets the content directory, relative to the root.
  pub fn with_content_dir(mut self, content_dir: impl AsRef<Path>) -> Self {
    self.content_dir = content_dir.as_ref().to_path_buf();
    self
  }

  /// Directory holding files of the given kind.
  pub fn collection_dir(&self, kind: Kind) -> PathBuf {
    let collection = match kind {
      Kind::Seminar => &self.collections.seminars,
      Kind::Publication => &self.collections.publications,
      Kind::TeamMember => &self.collections.team,
    };
    self.root.join(&self.content_dir).join(collection)
  }

  /// Path of the content file for `slug` in the given kind's collection.
  pub fn content_path(&self, kind: Kind, slug: &str) -> PathBuf {
    self.collection_dir(kind).join(format!("{slug}.md"))
  }

  /// Collection names must be single, non-empty path components.
  fn check(&self) -> Result<()> {
    let Collections { seminars, publications, team } = &self.collections;
    for name in [seminars, publications, team] {
      if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CuratorError::Config(format!("Invalid collection directory name: {name:?}")));
      }
    }
    Ok(())
  }
}
