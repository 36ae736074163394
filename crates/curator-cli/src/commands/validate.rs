//! Module for checking content files against their collection schemas.

use super::*;

/// Arguments for [`Commands::Validate`].
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
  /// Schema to check against. Inferred from the parent directory when omitted.
  #[arg(long, value_enum)]
  pub kind: Option<KindArg>,

  /// Files to check. Defaults to every `*.md` file in the configured collections.
  pub paths: Vec<PathBuf>,
}

/// Validates the requested files, reporting each one, and fails if any is invalid.
pub fn validate(config: &Config, args: &ValidateArgs) -> Result<()> {
  let targets = if args.paths.is_empty() {
    collection_files(config)?
  } else {
    args
      .paths
      .iter()
      .map(|path| {
        let kind = match args.kind {
          Some(kind) => Kind::from(kind),
          None => infer_kind(config, path).ok_or_else(|| CliError::UnknownKind(path.clone()))?,
        };
        Ok((kind, path.clone()))
      })
      .collect::<Result<Vec<_>>>()?
  };

  if targets.is_empty() {
    eprintln!("{}No content files found", style(INFO_PREFIX).cyan());
    return Ok(());
  }

  let mut failures = 0;
  for (kind, path) in &targets {
    let outcome =
      std::fs::read_to_string(path).map_err(CuratorError::from).and_then(|content| {
        schema::validate(*kind, &content)
      });
    match outcome {
      Ok(_) => println!("{}{}", style(SUCCESS_PREFIX).green(), path.display()),
      Err(e) => {
        failures += 1;
        println!("{}{}: {e}", style(ERROR_PREFIX).red(), path.display());
      },
    }
  }

  println!("Checked {} file(s), {failures} invalid", targets.len());
  if failures > 0 {
    return Err(CliError::Invalid(failures));
  }
  Ok(())
}

/// Every markdown file in every collection, paired with its kind.
fn collection_files(config: &Config) -> Result<Vec<(Kind, PathBuf)>> {
  let mut files = Vec::new();
  for kind in Kind::ALL {
    let pattern = config.collection_dir(kind).join("*.md");
    debug!(%kind, pattern = %pattern.display(), "collecting content files");
    for entry in glob::glob(&pattern.to_string_lossy())? {
      files.push((kind, entry?));
    }
  }
  Ok(files)
}

/// The kind whose collection directory contains `path`.
fn infer_kind(config: &Config, path: &Path) -> Option<Kind> {
  let parent = path.parent()?.file_name()?;
  Kind::ALL.into_iter().find(|kind| config.collection_dir(*kind).file_name() == Some(parent))
}
