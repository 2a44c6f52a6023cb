use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_stdin, stderr, stdout};

fn ten_key_catalog() -> String {
    let entries: Vec<String> = (0..10)
        .map(|i| format!("\t\"k_{}\": \"Value {}\"", i, i))
        .collect();
    format!("{{\n{}\n}}\n", entries.join(",\n"))
}

#[test]
fn test_delete_keys_preserves_order() -> Result<()> {
    let test = CliTest::with_catalog(&ten_key_catalog())?;

    let output = test
        .delete_command()
        .args(["k_7", "gone_a", "k_1", "gone_b", "k_4"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Total keys in file: 10"));
    assert!(out.contains("Keys requested for deletion: 5"));
    assert!(out.contains("Keys found and will be deleted: 3"));
    assert!(out.contains("Keys not found (skipped): 2"));
    assert!(out.contains("Deleted 3 keys."));
    assert!(out.contains("Keys remaining: 7"));

    let expected: Vec<String> = [0, 2, 3, 5, 6, 8, 9]
        .iter()
        .map(|i| format!("\t\"k_{}\": \"Value {}\"", i, i))
        .collect();
    assert_eq!(test.catalog()?, format!("{{\n{}\n}}\n", expected.join(",\n")));

    Ok(())
}

#[test]
fn test_delete_refuses_more_than_half() -> Result<()> {
    let catalog = ten_key_catalog();
    let test = CliTest::with_catalog(&catalog)?;

    let output = test
        .delete_command()
        .args(["k_0", "k_1", "k_2", "k_3", "k_4", "k_5"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("SAFETY CHECK FAILED"));
    assert!(stderr(&output).contains("60.0%"));
    assert_eq!(test.catalog()?, catalog);

    Ok(())
}

#[test]
fn test_delete_dry_run() -> Result<()> {
    let catalog = ten_key_catalog();
    let test = CliTest::with_catalog(&catalog)?;

    let output = test
        .delete_command()
        .args(["--dry-run", "k_3", "k_4"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("[DRY RUN] No changes made."));
    assert!(out.contains("Would delete 2 keys, leaving 8 keys."));
    assert_eq!(test.catalog()?, catalog);

    Ok(())
}

#[test]
fn test_delete_without_keys_prints_usage() -> Result<()> {
    let test = CliTest::with_catalog(&ten_key_catalog())?;

    let output = test.delete_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No keys provided. Usage:"));

    Ok(())
}

#[test]
fn test_delete_no_matching_keys_succeeds() -> Result<()> {
    let catalog = ten_key_catalog();
    let test = CliTest::with_catalog(&catalog)?;

    let output = test.delete_command().arg("gone_a").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No keys to delete."));
    assert_eq!(test.catalog()?, catalog);

    Ok(())
}

#[test]
fn test_delete_reads_unused_report_from_stdin() -> Result<()> {
    let test = CliTest::with_catalog(&ten_key_catalog())?;
    let report = "\
Found 2 unused translation keys in en.json:

  - k_2
  - k_8

Remove these keys from en.json or use them in the codebase.
";

    let mut cmd = test.delete_command();
    cmd.arg("--stdin");
    let output = run_with_stdin(cmd, report)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Keys requested for deletion: 2"));
    let catalog = test.catalog()?;
    assert!(!catalog.contains("\"k_2\""));
    assert!(!catalog.contains("\"k_8\""));
    assert!(catalog.contains("\"k_3\""));

    Ok(())
}

#[test]
fn test_delete_empty_stdin_prints_usage() -> Result<()> {
    let test = CliTest::with_catalog(&ten_key_catalog())?;

    let mut cmd = test.delete_command();
    cmd.arg("--stdin");
    let output = run_with_stdin(cmd, "Found 0 unused translation keys in en.json:\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No keys provided."));

    Ok(())
}

#[test]
fn test_delete_never_removes_metadata_key() -> Result<()> {
    let test = CliTest::with_catalog(
        "{\n\t\"$schema\": \"https://inlang.com/schema/inlang-message-format\",\n\t\"a_x\": \"A\",\n\t\"b_y\": \"B\"\n}\n",
    )?;

    let output = test.delete_command().args(["$schema", "a_x"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Keys not found (skipped): 1"));
    assert_eq!(
        test.catalog()?,
        "{\n\t\"$schema\": \"https://inlang.com/schema/inlang-message-format\",\n\t\"b_y\": \"B\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_delete_missing_catalog_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.delete_command().arg("a_x").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));

    Ok(())
}
