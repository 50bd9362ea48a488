use std::process::Command;
use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

const CONTENTS: &str = "const a = {\n  x: 1,\n\n  y: 2,\n};\n";
const FIXED: &str = "const a = {\n  x: 1,\n  y: 2,\n};\n";

#[test]
fn test_no_git_repo_does_not_block_lint() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir_all(directory.join("src"))?;
    std::fs::write(directory.join("src/test.ts"), CONTENTS)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--output-format=concise")
        .run();

    assert_eq!(output.code(), 1, "{output}");
    assert!(
        output
            .clean_stdout()
            .contains("src/test.ts [4:3] no-empty-lines-in-objects"),
        "{output}"
    );
    Ok(())
}

#[test]
fn test_no_git_repo_blocks_fix() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir_all(directory.join("src"))?;
    std::fs::write(directory.join("src/test.ts"), CONTENTS)?;
    std::fs::write(directory.join("src/test_2.ts"), CONTENTS)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .run();

    assert_eq!(output.code(), 2, "{output}");

    // The message is printed once, not once per file.
    let stderr = output.clean_stderr();
    assert_eq!(stderr.matches("--allow-no-vcs").count(), 1, "{output}");
    assert!(stderr.contains("no Version Control System"), "{output}");

    assert_eq!(std::fs::read_to_string(directory.join("src/test.ts"))?, CONTENTS);
    assert_eq!(std::fs::read_to_string(directory.join("src/test_2.ts"))?, CONTENTS);
    Ok(())
}

#[test]
fn test_no_git_repo_allow_no_vcs() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir_all(directory.join("src"))?;
    std::fs::write(directory.join("src/test.ts"), CONTENTS)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--fix")
        .arg("--allow-no-vcs")
        .run()
        .normalize_os_executable_name();

    assert_eq!(output.code(), 0, "{output}");
    assert!(output.clean_stdout().contains("All checks passed!"), "{output}");
    assert_eq!(std::fs::read_to_string(directory.join("src/test.ts"))?, FIXED);
    Ok(())
}

#[test]
fn test_mixed_vcs_coverage_blocks_fix() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // One file in a repository, one outside of it.
    let repo_dir = directory.join("repo");
    std::fs::create_dir_all(&repo_dir)?;
    let repo = git2::Repository::init(&repo_dir)?;
    std::fs::write(repo_dir.join("test.ts"), CONTENTS)?;
    crate::helpers::create_commit(&["test.ts"], &repo)?;

    std::fs::create_dir_all(directory.join("outside"))?;
    std::fs::write(directory.join("outside/test.ts"), CONTENTS)?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg("repo")
        .arg("outside")
        .arg("--fix")
        .run();

    assert_eq!(output.code(), 2, "{output}");
    assert!(output.clean_stderr().contains("--allow-no-vcs"), "{output}");
    assert_eq!(std::fs::read_to_string(repo_dir.join("test.ts"))?, CONTENTS);
    Ok(())
}
