use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const APP: &str = "import { Box } from '@mui/material';\n\
export const App = () => <Box display=\"flex\" />;\n";

fn run_with_format(format: &str) -> anyhow::Result<crate::helpers::Output> {
    let directory = TempDir::new()?;
    let directory = directory.path();
    std::fs::write(directory.join("App.tsx"), APP)?;

    Ok(Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg(format!("--output-format={format}"))
        .run())
}

#[test]
fn test_output_concise() -> anyhow::Result<()> {
    let output = run_with_format("concise")?;

    assert_eq!(output.code(), 1, "{output}");
    insta::assert_snapshot!(output.clean_stdout(), @r#"
App.tsx [2:31] no-box-flex Avoid using display: "flex" in Box sx prop or as direct prop. Use Stack component from @mui/material instead.

Found 1 error.
"#);
    Ok(())
}

#[test]
fn test_output_full() -> anyhow::Result<()> {
    let output = run_with_format("full")?;

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("warning: no-box-flex"), "{output}");
    assert!(stdout.contains("--> App.tsx:2:31"), "{output}");
    assert!(
        stdout.contains("Avoid using display: \"flex\" in Box sx prop or as direct prop."),
        "{output}"
    );
    assert!(
        stdout.contains("help: Use Stack component from @mui/material instead."),
        "{output}"
    );
    assert!(stdout.trim_end().ends_with("Found 1 error."), "{output}");
    Ok(())
}

#[test]
fn test_output_github() -> anyhow::Result<()> {
    let output = run_with_format("github")?;

    assert_eq!(output.code(), 1, "{output}");
    assert_eq!(
        output.clean_stdout(),
        "::warning title=Muster (no-box-flex),file=App.tsx,line=2,col=31::App.tsx:2:31 [no-box-flex] Avoid using display: \"flex\" in Box sx prop or as direct prop. Use Stack component from @mui/material instead.\n"
    );
    Ok(())
}

#[test]
fn test_output_json() -> anyhow::Result<()> {
    let output = run_with_format("json")?;

    assert_eq!(output.code(), 1, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.starts_with('{'), "{output}");
    assert!(stdout.contains("\"name\": \"no-box-flex\""), "{output}");
    assert!(
        stdout.contains("\"suggestion\": \"Use Stack component from @mui/material instead.\""),
        "{output}"
    );
    assert!(stdout.contains("\"filename\": \"App.tsx\""), "{output}");
    assert!(stdout.contains("\"row\": 2"), "{output}");
    assert!(stdout.contains("\"column\": 30"), "{output}");
    assert!(stdout.contains("\"fix\": null"), "{output}");
    assert!(stdout.contains("\"errors\": []"), "{output}");
    // Structured output is not followed by a summary.
    assert!(!stdout.contains("Found 1 error."), "{output}");
    Ok(())
}

#[test]
fn test_output_json_with_parse_error() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();
    std::fs::write(directory.join("broken.ts"), "const = ;\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format=json")
        .run();

    assert_eq!(output.code(), 2, "{output}");
    let stdout = output.clean_stdout();
    assert!(stdout.contains("\"diagnostics\": []"), "{output}");
    assert!(stdout.contains("\"file\": \"broken.ts\""), "{output}");
    assert!(stdout.contains("Failed to parse broken.ts"), "{output}");
    Ok(())
}

#[test]
fn test_clean_project() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();
    std::fs::write(
        directory.join("App.tsx"),
        "import { Stack } from '@mui/material';\nexport const App = () => <Stack sx={{ p: 1 }} />;\n",
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .run();

    assert_eq!(output.code(), 0, "{output}");
    assert_eq!(output.clean_stdout(), "All checks passed!\n");
    Ok(())
}
