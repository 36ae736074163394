use super::*;

fn complete_body() -> String {
  issue_body(&[
    ("Date", Some("9999-01-01")),
    ("Speaker", Some("Test Speaker")),
    ("Affiliation (Polish)", Some("Wydział MiNI PW")),
    ("Affiliation (English)", Some("Faculty of MiNI, WUT")),
    ("Title (English)", Some("Test Seminar Title")),
    ("Title (Polish)", Some("Testowy tytuł seminarium")),
    ("Abstract (English)", Some("Test abstract in English.")),
    ("Abstract (Polish)", Some("Testowe streszczenie po polsku.")),
    ("Slides URL", Some("https://example.com/slides.pdf")),
  ])
}

fn required_only_body() -> String {
  issue_body(&[
    ("Date", Some("9999-01-01")),
    ("Speaker", Some("Test Speaker")),
    ("Affiliation (Polish)", None),
    ("Affiliation (English)", None),
    ("Title (English)", Some("Test Seminar Title")),
    ("Title (Polish)", None),
    ("Abstract (English)", None),
    ("Abstract (Polish)", None),
    ("Slides URL", None),
  ])
}

#[traced_test]
#[test]
fn test_complete_issue_passes_schema() -> TestResult<()> {
  let (config, dir) = temp_config();
  let (generated, valid) = run("add-seminar", &complete_body(), &config)?;

  assert_eq!(generated.path, dir.path().join("src/content/seminars/9999-01-01-speaker.md"));
  let ValidFrontmatter::Seminar(seminar) = valid else { panic!("expected a seminar") };
  assert_eq!(seminar.affiliation_pl.as_deref(), Some("Wydział MiNI PW"));
  assert_eq!(seminar.affiliation_en.as_deref(), Some("Faculty of MiNI, WUT"));
  assert_eq!(seminar.title_pl.as_deref(), Some("Testowy tytuł seminarium"));
  assert_eq!(seminar.slides.as_deref(), Some("https://example.com/slides.pdf"));
  Ok(())
}

#[traced_test]
#[test]
fn test_required_only_has_exactly_required_keys() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let (generated, _) = run("add-seminar", &required_only_body(), &config)?;

  assert!(generated.path.ends_with("9999-01-01-speaker.md"));
  assert_eq!(top_level_keys(&generated.content), vec!["date", "speaker", "title"]);
  Ok(())
}

#[traced_test]
#[test]
fn test_placeholder_equals_absent() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let without_optional = issue_body(&[
    ("Date", Some("9999-01-01")),
    ("Speaker", Some("Test Speaker")),
    ("Title (English)", Some("Test Seminar Title")),
  ]);

  let with_placeholders = curator::process("add-seminar", &required_only_body(), "0", &config)?;
  let omitted = curator::process("add-seminar", &without_optional, "0", &config)?;
  assert_eq!(with_placeholders, omitted);
  Ok(())
}

#[traced_test]
#[test]
fn test_only_polish_affiliation() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let body = issue_body(&[
    ("Date", Some("2024-05-01")),
    ("Speaker", Some("Jan Hołyński")),
    ("Affiliation (Polish)", Some("Instytut Matematyki PAN")),
    ("Affiliation (English)", None),
    ("Title (English)", Some("Random walks")),
  ]);
  let (generated, valid) = run("add-seminar", &body, &config)?;

  assert!(generated.path.ends_with("2024-05-01-holynski.md"));
  let ValidFrontmatter::Seminar(seminar) = valid else { panic!("expected a seminar") };
  assert_eq!(seminar.affiliation_pl.as_deref(), Some("Instytut Matematyki PAN"));
  assert_eq!(seminar.affiliation_en, None);
  Ok(())
}

#[traced_test]
#[test]
fn test_quotes_and_colons_survive_round_trip() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let body = issue_body(&[
    ("Date", Some("2024-05-01")),
    ("Speaker", Some("Ada Lovelace")),
    ("Title (English)", Some("Engines: the \"analytical\" kind")),
  ]);
  let (_, valid) = run("add-seminar", &body, &config)?;

  let ValidFrontmatter::Seminar(seminar) = valid else { panic!("expected a seminar") };
  assert_eq!(seminar.title, "Engines: the \"analytical\" kind");
  Ok(())
}

#[traced_test]
#[test]
fn test_backslashes_survive_round_trip() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let body = issue_body(&[
    ("Date", Some("2024-05-01")),
    ("Speaker", Some("Donald Knuth")),
    ("Title (English)", Some(r"Using \LaTeX and C:\dir")),
  ]);
  let (generated, valid) = run("add-seminar", &body, &config)?;

  assert!(generated.content.contains(r#"title: "Using \\LaTeX and C:\\dir""#));
  let ValidFrontmatter::Seminar(seminar) = valid else { panic!("expected a seminar") };
  assert_eq!(seminar.title, r"Using \LaTeX and C:\dir");
  Ok(())
}

#[traced_test]
#[test]
fn test_abstract_paragraphs_survive_round_trip() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let abstract_en = "First paragraph.\n\nSecond paragraph.\n- bullet: one # heading";
  let body = issue_body(&[
    ("Date", Some("2024-05-01")),
    ("Speaker", Some("Ada Lovelace")),
    ("Title (English)", Some("Notes")),
    ("Abstract (English)", Some(abstract_en)),
  ]);
  let (generated, valid) = run("add-seminar", &body, &config)?;

  assert!(generated.content.contains("abstract: \"First paragraph.\\n\\nSecond paragraph.\\n- bullet"));
  let ValidFrontmatter::Seminar(seminar) = valid else { panic!("expected a seminar") };
  assert_eq!(seminar.abstract_en.as_deref(), Some(abstract_en));
  Ok(())
}
