use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const HELLO_RULES: &str = r#"{
    "consolidations": [
        { "newKey": "common_hello", "value": "Hello", "oldKeys": ["a_x", "b_y"] }
    ]
}"#;

fn hello_project() -> Result<CliTest> {
    let test = CliTest::with_catalog(r#"{"a_x": "Hello", "b_y": "Hello"}"#)?;
    test.write_file(".msgtidyrc.json", HELLO_RULES)?;
    test.write_file("src/routes/App.svelte", "{m.a_x()} {m.b_y()} {m.b_y()}")?;
    Ok(test)
}

#[test]
fn test_consolidate_rewrites_call_sites_and_catalog() -> Result<()> {
    let test = hello_project()?;

    let output = test.consolidate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Adding new key: common_hello = \"Hello\""));
    assert!(out.contains("Replacing a_x -> common_hello in routes/App.svelte (1 occurrence)"));
    assert!(out.contains("Replacing b_y -> common_hello in routes/App.svelte (2 occurrences)"));
    assert!(out.contains("Total replacements: 3"));
    assert!(out.contains("Keys deleted: 2"));
    assert!(out.contains("Keys remaining: 1"));

    assert_eq!(
        test.read_file("src/routes/App.svelte")?,
        "{m.common_hello()} {m.common_hello()} {m.common_hello()}"
    );
    assert_eq!(test.catalog()?, "{\n\t\"common_hello\": \"Hello\"\n}\n");

    Ok(())
}

#[test]
fn test_consolidate_twice_is_a_no_op() -> Result<()> {
    let test = hello_project()?;

    test.consolidate_command().output()?;
    let catalog = test.catalog()?;
    let source = test.read_file("src/routes/App.svelte")?;

    let output = test.consolidate_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Total replacements: 0"));
    assert!(out.contains("Keys deleted: 0"));
    assert!(!out.contains("Adding new key"));
    assert_eq!(test.catalog()?, catalog);
    assert_eq!(test.read_file("src/routes/App.svelte")?, source);

    Ok(())
}

#[test]
fn test_consolidate_dry_run_writes_nothing() -> Result<()> {
    let test = hello_project()?;
    let catalog = test.catalog()?;

    let output = test.consolidate_command().arg("--dry-run").output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("[DRY RUN] Summary:"));
    assert!(out.contains("Total replacements: 3"));
    assert!(out.contains("Keys remaining: 1"));
    assert_eq!(test.catalog()?, catalog);
    assert_eq!(
        test.read_file("src/routes/App.svelte")?,
        "{m.a_x()} {m.b_y()} {m.b_y()}"
    );

    Ok(())
}

#[test]
fn test_consolidate_keeps_existing_new_key_value() -> Result<()> {
    let test = CliTest::with_catalog(r#"{"common_hello": "Hi there", "a_x": "Hello"}"#)?;
    test.write_file(
        ".msgtidyrc.json",
        r#"{"consolidations": [{"newKey": "common_hello", "value": "Hello", "oldKeys": ["a_x"]}]}"#,
    )?;
    test.write_file("src/lib/a.ts", "export const t = m.a_x();")?;

    let output = test.consolidate_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Keeping existing common_hello = \"Hi there\""));
    assert_eq!(test.catalog()?, "{\n\t\"common_hello\": \"Hi there\"\n}\n");
    assert_eq!(
        test.read_file("src/lib/a.ts")?,
        "export const t = m.common_hello();"
    );

    Ok(())
}

#[test]
fn test_consolidate_skips_excluded_directories() -> Result<()> {
    let test = hello_project()?;
    test.write_file("src/node_modules/pkg/index.ts", "m.a_x()")?;
    test.write_file("src/.svelte-kit/generated.ts", "m.b_y()")?;

    test.consolidate_command().output()?;

    assert_eq!(test.read_file("src/node_modules/pkg/index.ts")?, "m.a_x()");
    assert_eq!(test.read_file("src/.svelte-kit/generated.ts")?, "m.b_y()");

    Ok(())
}

#[test]
fn test_consolidate_warns_about_overlapping_rules() -> Result<()> {
    let test = CliTest::with_catalog(r#"{"a_x": "Hello"}"#)?;
    test.write_file(
        ".msgtidyrc.json",
        r#"{"consolidations": [
            {"newKey": "common_one", "value": "Hello", "oldKeys": ["a_x"]},
            {"newKey": "common_two", "value": "Hello", "oldKeys": ["a_x"]}
        ]}"#,
    )?;
    test.write_file("src/a.ts", "m.a_x()")?;

    let output = test.consolidate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains(
        "warning: a_x is superseded by several rules (common_one, common_two); the first one wins"
    ));
    assert_eq!(test.read_file("src/a.ts")?, "m.common_one()");

    Ok(())
}

#[test]
fn test_consolidate_rejects_self_referencing_rule() -> Result<()> {
    let test = CliTest::with_catalog(r#"{"a_x": "Hello"}"#)?;
    test.write_file(
        ".msgtidyrc.json",
        r#"{"consolidations": [{"newKey": "a_x", "value": "Hello", "oldKeys": ["a_x"]}]}"#,
    )?;
    test.write_file("src/a.ts", "m.a_x()")?;

    let output = test.consolidate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid 'consolidations' table"));
    assert_eq!(test.catalog()?, r#"{"a_x": "Hello"}"#);

    Ok(())
}

#[test]
fn test_consolidate_malformed_catalog_is_an_error() -> Result<()> {
    let test = CliTest::with_catalog(r#"["not", "an", "object"]"#)?;
    test.write_file(".msgtidyrc.json", HELLO_RULES)?;
    test.write_file("src/a.ts", "m.a_x()")?;

    let output = test.consolidate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    assert_eq!(test.read_file("src/a.ts")?, "m.a_x()");

    Ok(())
}
