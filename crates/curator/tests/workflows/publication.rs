use super::*;

fn complete_body() -> String {
  issue_body(&[
    ("Authors", Some("Test Speaker; Smith Jr., John")),
    ("Title", Some("Test Publication Title")),
    ("Journal or Venue", Some("Test Journal")),
    ("Year", Some("9999")),
    ("Publication Type", Some("journal")),
    ("DOI", Some("10.1234/test")),
    ("URL", Some("https://example.com/paper")),
    ("Impact Factor", Some("2.5")),
  ])
}

#[traced_test]
#[test]
fn test_complete_issue_passes_schema() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let (generated, valid) = run("add-publication", &complete_body(), &config)?;

  assert!(generated.path.ends_with("publications/9999-speaker-test-publication-title.md"));
  let ValidFrontmatter::Publication(publication) = valid else {
    panic!("expected a publication")
  };
  assert_eq!(publication.authors, vec!["Test Speaker", "Smith Jr., John"]);
  assert_eq!(publication.journal.as_deref(), Some("Test Journal"));
  assert_eq!(publication.booktitle, None);
  assert_eq!(publication.year, 9999.0);
  assert_eq!(publication.doi.as_deref(), Some("10.1234/test"));
  assert_eq!(publication.url.as_deref(), Some("https://example.com/paper"));
  assert_eq!(publication.impact_factor, Some(2.5));
  Ok(())
}

#[traced_test]
#[test]
fn test_required_only_passes_schema() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let body = issue_body(&[
    ("Authors", Some("Test Speaker")),
    ("Title", Some("Test Publication Title")),
    ("Journal or Venue", Some("Test Journal")),
    ("Year", Some("9999")),
    ("Publication Type", Some("journal")),
    ("DOI", None),
    ("URL", None),
    ("Impact Factor", None),
  ]);
  let (generated, _) = run("add-publication", &body, &config)?;

  assert_eq!(top_level_keys(&generated.content), vec!["authors", "title", "journal", "year", "type"]);
  Ok(())
}

#[traced_test]
#[test]
fn test_only_url() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let body = issue_body(&[
    ("Authors", Some("Anna Nowak")),
    ("Title", Some("Preprint")),
    ("Journal or Venue", Some("ICML")),
    ("Year", Some("2024")),
    ("Publication Type", Some("conference")),
    ("DOI", None),
    ("URL", Some("https://example.com/p")),
  ]);
  let (_, valid) = run("add-publication", &body, &config)?;

  let ValidFrontmatter::Publication(publication) = valid else {
    panic!("expected a publication")
  };
  assert_eq!(publication.doi, None);
  assert_eq!(publication.url.as_deref(), Some("https://example.com/p"));
  assert_eq!(publication.booktitle.as_deref(), Some("ICML"));
  assert_eq!(publication.journal, None);
  Ok(())
}

#[traced_test]
#[test]
fn test_unknown_type_fails_schema_not_generation() {
  let (config, _dir) = temp_config();
  let body = issue_body(&[
    ("Authors", Some("Anna Nowak")),
    ("Title", Some("Notes")),
    ("Year", Some("2024")),
    ("Publication Type", Some("preprint")),
  ]);

  let generated = curator::process("add-publication", &body, "0", &config).unwrap();
  assert!(generated.content.contains("booktitle: \"\"\n"));
  assert!(generated.content.contains("type: \"preprint\"\n"));
  assert!(matches!(
    schema::validate(Kind::Publication, &generated.content),
    Err(CuratorError::Schema { kind: Kind::Publication, .. })
  ));
}
