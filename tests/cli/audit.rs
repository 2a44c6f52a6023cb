use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run_with_stdin, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_catalog(
        r#"{
	"$schema": "https://inlang.com/schema/inlang-message-format",
	"common_email": "Email",
	"errors_auth_password_invalid": "Invalid password",
	"groups_editGroup": "Edit {name}",
	"hosts_oldTitle": "Old hosts",
	"tags_editTag": "Edit {name}",
	"users_name": "Name"
}
"#,
    )?;
    test.write_file(
        "src/routes/groups/+page.svelte",
        "<h1>{m.groups_editGroup({ name })}</h1><p>{m.common_email()}</p>",
    )?;
    test.write_file(
        "src/lib/tags.ts",
        "export const title = m.tags_editTag({ name }); m.users_name();",
    )?;
    Ok(test)
}

#[test]
fn test_audit_unused() -> Result<()> {
    let test = project()?;

    let output = test.audit_command().arg("unused").output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
    ✘ unused

    Found 1 unused translation keys in en.json:

      - hosts_oldTitle

    Remove these keys from en.json or use them in the codebase.

    0 of 1 check passed
    ");

    Ok(())
}

#[test]
fn test_audit_duplicates_and_naming() -> Result<()> {
    let test = project()?;

    let output = test.audit_command().args(["duplicates", "naming"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @r#"
    ✘ duplicates

    Found 1 duplicate translation values in en.json:

      "Edit {name}":
        - groups_editGroup
        - tags_editTag

    Consolidate these into common_ keys.

    ✘ naming

    Found 1 single-word translations without common_ prefix:

      - users_name: "Name"

    Rename these keys to use the common_ prefix (e.g., common_name).

    0 of 2 checks passed
    "#);

    Ok(())
}

#[test]
fn test_audit_allow_list_exempts_group() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".msgtidyrc.json",
        r#"{"allowedDuplicates": ["tags_editTag"]}"#,
    )?;

    let output = test.audit_command().arg("duplicates").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("1 of 1 check passed"));

    Ok(())
}

#[test]
fn test_audit_unused_report_pipes_into_delete() -> Result<()> {
    let test = project()?;

    let audit = test.audit_command().arg("unused").output()?;
    let output = run_with_stdin(
        {
            let mut cmd = test.delete_command();
            cmd.arg("--stdin");
            cmd
        },
        &stdout(&audit),
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Deleted 1 key."));
    assert!(!test.catalog()?.contains("hosts_oldTitle"));

    let again = test.audit_command().arg("unused").output()?;
    assert_eq!(again.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_audit_key_format() -> Result<()> {
    let test = CliTest::with_catalog(r#"{"groups.edit": "Edit group", "groups_title": "Groups"}"#)?;

    let output = test.audit_command().arg("key-format").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("  - groups.edit\n"));
    assert!(!stdout(&output).contains("groups_title"));

    Ok(())
}

#[test]
fn test_audit_custom_accessor() -> Result<()> {
    let test = CliTest::with_catalog(r#"{"hosts_title": "Host list"}"#)?;
    test.write_file(".msgtidyrc.json", r#"{"accessor": "messages"}"#)?;
    test.write_file("src/a.ts", "messages.hosts_title()")?;

    let output = test.audit_command().arg("unused").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    Ok(())
}
