use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const CONTENTS: &str = "// a\nimport { a } from './a';\n";

fn setup(toml_name: &str, toml: &str) -> anyhow::Result<TempDir> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join(toml_name), toml)?;
    std::fs::write(directory.path().join("test.ts"), CONTENTS)?;
    Ok(directory)
}

#[test]
fn test_toml_select() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nselect = [\"no-relative-imports\"]\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("test.ts [2:19] no-relative-imports"), "{output}");
    assert!(!stdout.contains("no-non-jsdoc-comments"), "{output}");
    // The config file is in the current directory, so it is not mentioned.
    assert!(!stdout.contains("Used '"), "{output}");
    Ok(())
}

#[test]
fn test_toml_ignore() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nignore = [\"no-relative-imports\"]\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("test.ts [1:1] no-non-jsdoc-comments"), "{output}");
    assert!(!stdout.contains("no-relative-imports"), "{output}");
    Ok(())
}

#[test]
fn test_cli_select_overrides_toml_select() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nselect = [\"no-relative-imports\"]\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--select")
        .arg("no-non-jsdoc-comments")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("no-non-jsdoc-comments"), "{output}");
    assert!(!stdout.contains("no-relative-imports"), "{output}");
    Ok(())
}

#[test]
fn test_toml_ignore_combines_with_cli_ignore() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nignore = [\"no-relative-imports\"]\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--ignore")
        .arg("no-non-jsdoc-comments")
        .run();

    assert_eq!(output.code(), 0, "{output}");
    assert!(output.clean_stdout().contains("All checks passed!"), "{output}");
    Ok(())
}

#[test]
fn test_toml_exclude() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nexclude = [\"legacy/\", \"/test.ts\"]\n")?;
    std::fs::create_dir_all(directory.path().join("legacy"))?;
    std::fs::create_dir_all(directory.path().join("src"))?;
    std::fs::write(directory.path().join("legacy/old.ts"), CONTENTS)?;
    std::fs::write(directory.path().join("src/test.ts"), CONTENTS)?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("src/test.ts"), "{output}");
    assert!(!stdout.contains("legacy/old.ts"), "{output}");
    assert!(!stdout.contains("\ntest.ts"), "{output}");
    assert!(!stdout.starts_with("test.ts"), "{output}");
    assert!(stdout.contains("Found 2 errors."), "{output}");
    Ok(())
}

#[test]
fn test_hidden_toml_is_used() -> anyhow::Result<()> {
    let directory = setup(".muster.toml", "[lint]\nselect = [\"no-relative-imports\"]\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    assert!(!output.clean_stdout().contains("no-non-jsdoc-comments"), "{output}");
    Ok(())
}

#[test]
fn test_visible_toml_wins_over_hidden_toml() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nselect = [\"no-relative-imports\"]\n")?;
    std::fs::write(
        directory.path().join(".muster.toml"),
        "[lint]\nselect = [\"no-non-jsdoc-comments\"]\n",
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("no-relative-imports"), "{output}");
    assert!(!stdout.contains("no-non-jsdoc-comments"), "{output}");
    Ok(())
}

#[test]
fn test_parent_toml_is_mentioned() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nselect = [\"no-relative-imports\"]\n")?;
    let subdir = directory.path().join("sub");
    std::fs::create_dir_all(&subdir)?;
    std::fs::write(subdir.join("test.ts"), CONTENTS)?;

    let output = Command::new(binary_path())
        .current_dir(&subdir)
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("test.ts [2:19] no-relative-imports"), "{output}");
    assert!(!stdout.contains("no-non-jsdoc-comments"), "{output}");
    assert!(stdout.contains("Used '"), "{output}");
    assert!(stdout.contains("muster.toml'"), "{output}");
    Ok(())
}

#[test]
fn test_unknown_toml_field() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nselects = [\"no-relative-imports\"]\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .run();

    assert_eq!(output.code(), 2, "{output}");
    let stderr = output.clean_stderr();
    assert!(stderr.contains("muster failed"), "{output}");
    assert!(stderr.contains("Failed to parse"), "{output}");
    assert!(stderr.contains("unknown field `selects`"), "{output}");
    Ok(())
}

#[test]
fn test_unknown_rule_in_toml() -> anyhow::Result<()> {
    let directory = setup("muster.toml", "[lint]\nselect = [\"no-box-flex\", \"foo\"]\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .run();

    assert_eq!(output.code(), 2, "{output}");
    assert!(
        output
            .clean_stderr()
            .contains("Unknown rules in field `select` in 'muster.toml': foo"),
        "{output}"
    );
    Ok(())
}
