use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

// One violation of each rule.
const APP: &str = "import { Box } from '@mui/material';\n\
import { Header } from './Header';\n\
// layout\n\
const style = {\n  p: 1,\n\n  m: 2,\n};\n\
export const App = () => (\n  <Box\n    display=\"flex\"\n    sx={{ [theme.breakpoints.up('md')]: { p: 2 } }}\n  >\n    <Header sx={{}} />\n  </Box>\n);\n";

fn setup() -> anyhow::Result<TempDir> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("App.tsx"), APP)?;
    Ok(directory)
}

#[test]
fn test_all_rules_by_default() -> anyhow::Result<()> {
    let directory = setup()?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    for rule in [
        "no-box-flex",
        "no-empty-lines-in-objects",
        "no-empty-sx",
        "no-non-jsdoc-comments",
        "no-relative-imports",
        "no-theme-breakpoints-in-sx",
    ] {
        assert!(stdout.contains(&format!("] {rule} ")), "{rule} missing in {output}");
    }
    assert!(stdout.contains("Found 6 errors."), "{output}");
    assert!(
        stdout.contains(
            "1 fixable with the `--fix` option (1 hidden fix can be enabled with the `--unsafe-fixes` option)."
        ),
        "{output}"
    );
    Ok(())
}

#[test]
fn test_select_rules() -> anyhow::Result<()> {
    let directory = setup()?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--select")
        .arg("no-box-flex,no-empty-sx")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("App.tsx [11:5] no-box-flex"), "{output}");
    assert!(stdout.contains("App.tsx [14:13] no-empty-sx"), "{output}");
    assert!(stdout.contains("Found 2 errors."), "{output}");
    Ok(())
}

#[test]
fn test_select_group() -> anyhow::Result<()> {
    let directory = setup()?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("-s")
        .arg("LAYOUT")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("App.tsx [7:3] no-empty-lines-in-objects"), "{output}");
    assert!(stdout.contains("Found 1 error."), "{output}");
    Ok(())
}

#[test]
fn test_ignore_rules() -> anyhow::Result<()> {
    let directory = setup()?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--ignore")
        .arg("SUGG,no-empty-lines-in-objects")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("no-box-flex"), "{output}");
    assert!(stdout.contains("Found 1 error."), "{output}");
    Ok(())
}

#[test]
fn test_unknown_rules() -> anyhow::Result<()> {
    let directory = setup()?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--select")
        .arg("no-box-flex,foo,bar")
        .run();

    assert_eq!(output.code(), 2, "{output}");
    let stderr = output.clean_stderr();
    assert!(stderr.contains("muster failed"), "{output}");
    assert!(stderr.contains("Unknown rules in `--select`: foo, bar"), "{output}");
    Ok(())
}

#[test]
fn test_empty_rule_name() -> anyhow::Result<()> {
    let directory = setup()?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("check")
        .arg(".")
        .arg("--ignore")
        .arg("no-box-flex,")
        .run();

    assert_eq!(output.code(), 2, "{output}");
    assert!(
        output
            .clean_stderr()
            .contains("Unknown rules in `--ignore`: \"\" (empty or whitespace-only not allowed)"),
        "{output}"
    );
    Ok(())
}
