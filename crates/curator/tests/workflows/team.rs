use super::*;

fn body(order: Option<&str>) -> String {
  issue_body(&[
    ("Full Name", Some("Test Speaker")),
    ("Role (English)", Some("PhD Student")),
    ("Role (Polish)", Some("Doktorant")),
    ("Affiliation (Polish)", Some("Wydział MiNI PW")),
    ("Affiliation (English)", Some("Faculty of MiNI, WUT")),
    ("Email", Some("test@example.com")),
    ("LinkedIn", Some("https://www.linkedin.com/in/test-speaker")),
    ("GitHub URL", Some("https://github.com/test-speaker")),
    ("Picture", Some("test-speaker.jpg")),
    ("Research Areas", Some("Medical imaging, Deep learning")),
    ("Order", order),
  ])
}

#[traced_test]
#[test]
fn test_complete_issue_passes_schema() -> TestResult<()> {
  let (config, dir) = temp_config();
  let (generated, valid) = run("add-team-member", &body(Some("42")), &config)?;

  assert_eq!(generated.path, dir.path().join("src/content/team/test-speaker.md"));
  assert!(generated.content.contains("\norder: 42\n"));
  let ValidFrontmatter::TeamMember(member) = valid else { panic!("expected a team member") };
  assert_eq!(member.affiliation_pl.as_deref(), Some("Wydział MiNI PW"));
  assert_eq!(member.affiliation_en.as_deref(), Some("Faculty of MiNI, WUT"));
  assert_eq!(member.linkedin.as_deref(), Some("https://www.linkedin.com/in/test-speaker"));
  assert_eq!(member.github.as_deref(), Some("https://github.com/test-speaker"));
  assert_eq!(member.picture.as_deref(), Some("test-speaker.jpg"));
  assert_eq!(
    member.research_areas,
    Some(vec!["Medical imaging".to_string(), "Deep learning".to_string()])
  );
  assert!(member.active);
  assert_eq!(member.order, Some(42.0));
  Ok(())
}

#[traced_test]
#[test]
fn test_order_placeholder_is_absent() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let (generated, valid) = run("add-team-member", &body(None), &config)?;

  assert!(!top_level_keys(&generated.content).contains(&"order".to_string()));
  let ValidFrontmatter::TeamMember(member) = valid else { panic!("expected a team member") };
  assert_eq!(member.order, None);
  Ok(())
}

#[traced_test]
#[test]
fn test_required_only_passes_schema() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let body = issue_body(&[
    ("Full Name", Some("Test Speaker")),
    ("Role (English)", Some("PhD Student")),
    ("Role (Polish)", None),
    ("Affiliation (Polish)", None),
    ("Affiliation (English)", None),
    ("Email", None),
    ("LinkedIn", None),
    ("GitHub URL", None),
    ("Picture", None),
    ("Research Areas", None),
    ("Order", None),
  ]);
  let (generated, _) = run("add-team-member", &body, &config)?;

  assert_eq!(top_level_keys(&generated.content), vec!["name", "role", "active"]);
  Ok(())
}

#[traced_test]
#[test]
fn test_same_name_overwrites() -> TestResult<()> {
  let (config, _dir) = temp_config();
  let (first, _) = run("add-team-member", &body(Some("1")), &config)?;
  let (second, _) = run("add-team-member", &body(Some("2")), &config)?;

  assert_eq!(first.path, second.path);
  assert!(std::fs::read_to_string(&second.path)?.contains("order: 2\n"));
  Ok(())
}
