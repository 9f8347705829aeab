use std::fs;

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const OUTPUT: &str = "output/lang.js";

/// Parse the messages object embedded in a generated script.
fn payload(script: &str) -> Result<Value> {
    let line = script
        .lines()
        .find_map(|l| l.trim().strip_prefix("var messages = "))
        .context("script should assign the messages object")?;
    let json = line.strip_suffix(';').unwrap_or(line);
    serde_json::from_str(json).context("messages should be valid JSON")
}

fn keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

fn assert_no_placeholders(content: &str) {
    assert!(!content.contains("'{ messages }'"), "messages placeholder left");
    assert!(!content.contains("'{ langjs }';"), "library placeholder left");
}

#[test]
fn test_generate_all_files() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().arg(OUTPUT).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Created output/lang.js (8 messages from 7 files)\n"
    );

    let content = test.read_file(OUTPUT)?;
    assert_no_placeholders(&content);
    assert!(content.contains("gm8ft2hrrlq1u6m54we9udi"));
    assert!(content.contains("var Lang = (function () {"));

    let messages = payload(&content)?;
    assert_eq!(
        keys(&messages),
        vec![
            "en.forum.thread.title",
            "en.messages.home.title",
            "en.messages.welcome",
            "en.nonameinc::messages.hello",
            "en.validation.required",
            "es.messages.welcome",
            "es.nonameinc::messages.hello",
            "ht.messages.welcome",
        ]
    );
    assert_eq!(messages["en.messages.welcome"], "Welcome");
    assert_eq!(messages["es.nonameinc::messages.hello"], "Hola desde el paquete");
    assert_eq!(messages["ht.messages.welcome"], "Byenvini");

    Ok(())
}

#[test]
fn test_vendor_files_are_namespaced() -> Result<()> {
    let test = CliTest::with_translations()?;

    test.command().arg(OUTPUT).output()?;
    let content = test.read_file(OUTPUT)?;

    assert!(!content.contains("vendor.nonameinc"));
    assert!(!content.contains("en.vendor"));
    assert!(content.contains("en.nonameinc::messages"));
    assert!(content.contains("es.nonameinc::messages"));

    Ok(())
}

#[test]
fn test_single_file_scenario() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en/messages.json", r#"{"welcome":"Hi"}"#)?;

    let output = test.command().args([OUTPUT, "--no-lib"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_file(OUTPUT)?;
    assert!(content.contains(r#"var messages = {"en.messages.welcome":"Hi"};"#));

    Ok(())
}

#[test]
fn test_nested_directories_become_dotted_groups() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("lang/en/admin/users/edit.json", r#"{"save": "Save"}"#)?;

    test.command().arg(OUTPUT).output()?;
    let messages = payload(&test.read_file(OUTPUT)?)?;

    assert_eq!(messages["en.forum.thread.title"], "T");
    assert_eq!(messages["en.admin.users.edit.save"], "Save");

    Ok(())
}

#[test]
fn test_group_filter_from_cli() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args([OUTPUT, "-m", "messages", "-m", "nonameinc::messages"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let messages = payload(&test.read_file(OUTPUT)?)?;
    let keys = keys(&messages);
    assert!(keys.iter().all(|k| !k.contains("validation")));
    assert!(keys.iter().all(|k| !k.contains("forum")));
    assert!(keys.contains(&"en.messages.welcome".to_string()));
    assert!(keys.contains(&"es.nonameinc::messages.hello".to_string()));

    Ok(())
}

#[test]
fn test_group_filter_nested_group() -> Result<()> {
    let test = CliTest::with_translations()?;

    test.command()
        .args([OUTPUT, "--messages", "forum/thread"])
        .output()?;

    let messages = payload(&test.read_file(OUTPUT)?)?;
    assert_eq!(keys(&messages), vec!["en.forum.thread.title"]);

    Ok(())
}

#[test]
fn test_group_filter_from_config() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".langjsrc.json", r#"{ "messages": ["validation"] }"#)?;

    test.command().arg(OUTPUT).output()?;

    let messages = payload(&test.read_file(OUTPUT)?)?;
    assert_eq!(keys(&messages), vec!["en.validation.required"]);

    Ok(())
}

#[test]
fn test_no_lib_excludes_runtime() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().args([OUTPUT, "--no-lib"]).output()?;
    assert!(output.status.success());

    let content = test.read_file(OUTPUT)?;
    assert_no_placeholders(&content);
    assert!(!content.contains("var Lang = (function () {"));
    assert!(content.contains("root.Lang.setMessages(messages);"));
    assert_eq!(keys(&payload(&content)?).len(), 8);

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args(["output/messages.json", "--json", "-m", "messages"])
        .output()?;
    assert!(output.status.success());

    let content = test.read_file("output/messages.json")?;
    let messages: Value = serde_json::from_str(&content)?;
    assert_eq!(
        keys(&messages),
        vec!["en.messages.home.title", "en.messages.welcome", "es.messages.welcome", "ht.messages.welcome"]
    );
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_no_sort_keeps_scan_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lang/en/messages.json", r#"{"zeta": "Z", "alpha": "A"}"#)?;

    test.command().args([OUTPUT, "--no-sort"]).output()?;
    let messages = payload(&test.read_file(OUTPUT)?)?;
    assert_eq!(keys(&messages), vec!["en.messages.zeta", "en.messages.alpha"]);

    test.command().arg(OUTPUT).output()?;
    let messages = payload(&test.read_file(OUTPUT)?)?;
    assert_eq!(keys(&messages), vec!["en.messages.alpha", "en.messages.zeta"]);

    Ok(())
}

#[test]
fn test_custom_source_directory() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("theme/lang/en/page.json", r#"{"title": "Theme page"}"#)?;

    let output = test
        .command()
        .args([OUTPUT, "-s", "theme/lang"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let messages = payload(&test.read_file(OUTPUT)?)?;
    assert_eq!(keys(&messages), vec!["en.page.title"]);

    Ok(())
}

#[test]
fn test_missing_source_directory_fails() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args([OUTPUT, "-s", "lang/non-exist"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: Translations directory 'lang/non-exist' does not exist\n"
    );
    assert!(!test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_invalid_translation_file_fails_without_output() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("lang/en/broken.json", "{ invalid json }")?;

    let output = test.command().arg(OUTPUT).output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: Failed to parse '"), "stderr: {}", err);
    assert!(err.contains("broken.json"));
    assert!(!test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_failed_run_keeps_previous_output() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(OUTPUT, "previous")?;
    test.write_file("lang/en/broken.json", "[1, 2")?;

    let output = test.command().arg(OUTPUT).output()?;

    assert!(!output.status.success());
    assert_eq!(test.read_file(OUTPUT)?, "previous");

    Ok(())
}

#[test]
fn test_target_argument_overrides_config() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(
        ".langjsrc.json",
        r#"{ "target": "./output/lang-with-custom-path.js" }"#,
    )?;

    test.command().arg(OUTPUT).output()?;

    assert!(test.root().join(OUTPUT).exists());
    assert!(!test.root().join("output/lang-with-custom-path.js").exists());

    Ok(())
}

#[test]
fn test_target_from_config() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(
        ".langjsrc.json",
        r#"{ "target": "./output/lang-with-custom-path.js" }"#,
    )?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("output/lang-with-custom-path.js").exists());

    Ok(())
}

#[test]
fn test_config_paths_resolve_from_config_directory() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(
        ".langjsrc.json",
        r#"{ "sourceRoot": "./lang", "target": "./output/from-subdir.js" }"#,
    )?;
    fs::create_dir_all(test.root().join("resources/js"))?;

    let output = test
        .command()
        .current_dir(test.root().join("resources/js"))
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("output/from-subdir.js").exists());
    assert!(!test.root().join("resources/js/output").exists());
    let messages = payload(&test.read_file("output/from-subdir.js")?)?;
    assert_eq!(messages["en.messages.welcome"], "Welcome");

    Ok(())
}

#[test]
fn test_cli_target_stays_relative_to_working_directory() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file(".langjsrc.json", r#"{ "sourceRoot": "./lang" }"#)?;
    fs::create_dir_all(test.root().join("resources/js"))?;

    let output = test
        .command()
        .current_dir(test.root().join("resources/js"))
        .arg("bundle.js")
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("resources/js/bundle.js").exists());

    Ok(())
}

#[test]
fn test_default_target() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("public/js/messages.js").exists());

    Ok(())
}

#[test]
fn test_generation_is_idempotent() -> Result<()> {
    let test = CliTest::with_translations()?;

    test.command().arg(OUTPUT).output()?;
    let first = test.read_file(OUTPUT)?;
    test.command().arg(OUTPUT).output()?;
    let second = test.read_file(OUTPUT)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_verbose_lists_files() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args([OUTPUT, "-v", "-m", "messages"])
        .output()?;
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("info: scanning ./lang (config: defaults)"));
    assert!(err.contains("[en.messages] (2 keys)"));
    assert!(err.contains("(not in group filter)"));
    assert!(err.contains("README.md (not a translation file)"));

    Ok(())
}

#[test]
fn test_empty_result_warns() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args([OUTPUT, "-m", "does-not-exist"])
        .output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: no messages found"));
    assert!(test.read_file(OUTPUT)?.contains("var messages = {};"));

    Ok(())
}
