//! Module for the default action: turning one issue into a content file.

use super::*;

/// Inputs of a single generation run.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
  /// Issue label selecting the content kind (add-seminar, add-publication, add-team-member)
  #[arg(long, env = "ISSUE_LABEL")]
  pub label: Option<String>,

  /// Raw issue form body
  #[arg(long, env = "ISSUE_BODY", conflicts_with = "body_file", hide_env_values = true)]
  pub body: Option<String>,

  /// Read the issue body from a file instead
  #[arg(long)]
  pub body_file: Option<PathBuf>,

  /// Issue number, only used in log output
  #[arg(long, env = "ISSUE_NUMBER", default_value = "?")]
  pub issue: String,

  /// Print the content without writing it
  #[arg(long)]
  pub dry_run: bool,
}

impl GenerateArgs {
  /// The issue body from `--body-file`, `--body` or `ISSUE_BODY`, empty if none was given.
  fn read_body(&self) -> Result<String> {
    match &self.body_file {
      Some(path) => Ok(std::fs::read_to_string(path)?),
      None => Ok(self.body.clone().unwrap_or_default()),
    }
  }
}

/// Generates and writes the content file for one issue.
///
/// Prints the progress lines CI logs and tests rely on:
/// `Processing issue #<n> with label: <label>`, `Parsed fields: <json>`,
/// `Created: <path>`, then `Content:` followed by the file.
pub fn generate(config: &Config, args: &GenerateArgs) -> Result<()> {
  let body = args.read_body()?;
  if body.is_empty() {
    return Err(CuratorError::MissingBody.into());
  }
  let label = args.label.as_deref().unwrap_or_default();

  println!("Processing issue #{} with label: {label}", args.issue);
  println!("Parsed fields: {}", serde_json::to_string_pretty(&Fields::parse(&body))?);

  let generated = curator::process(label, &body, &args.issue, config)?;
  trace!(slug = %generated.slug, "generated content");

  if args.dry_run {
    println!("Would create: {}", generated.path.display());
  } else {
    let path = generated.write()?;
    println!("Created: {}", path.display());
  }
  println!("Content:");
  print!("{}", generated.content);

  eprintln!(
    "{}{} {}",
    style(SUCCESS_PREFIX).green(),
    generated.kind,
    style(&generated.slug).bold()
  );
  Ok(())
}
