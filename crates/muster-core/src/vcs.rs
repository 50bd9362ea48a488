use crate::config::Config;
use anyhow::{Result, bail};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Check version control status once for multiple paths.
///
/// Paths can belong to several repositories (or to none), so they are grouped
/// by repository root first and the statuses of each repository are only
/// queried once.
pub fn check_version_control(paths: &[String], config: &Config) -> Result<()> {
    if config.allow_no_vcs {
        return Ok(());
    }

    let mut repo_to_paths: FxHashMap<PathBuf, Vec<&str>> = FxHashMap::default();
    let mut paths_without_repo: Vec<&str> = Vec::new();

    for path in paths {
        match git2::Repository::discover(Path::new(path)) {
            Ok(repo) => {
                let Some(workdir) = repo.workdir() else {
                    // Bare repositories have nothing to compare against.
                    paths_without_repo.push(path);
                    continue;
                };
                repo_to_paths
                    .entry(workdir.to_path_buf())
                    .or_default()
                    .push(path);
            }
            Err(_) => {
                paths_without_repo.push(path);
            }
        }
    }

    if !paths_without_repo.is_empty() {
        bail!(
            "`muster check --fix` can potentially perform destructive changes but no \
            Version Control System (e.g. Git) was found on this project, so no fixes \
            were applied. \n\
            Add `--allow-no-vcs` to the call to apply the fixes."
        )
    }

    if config.allow_dirty {
        return Ok(());
    }

    let mut all_dirty_files = Vec::new();

    for repo_path in repo_to_paths.keys() {
        let repo = git2::Repository::discover(repo_path)?;

        let mut repo_opts = git2::StatusOptions::new();
        repo_opts.include_ignored(false);
        repo_opts.include_untracked(true);

        for status in repo.statuses(Some(&mut repo_opts))?.iter() {
            if let Some(path) = status.path()
                && status.status() != git2::Status::CURRENT
            {
                all_dirty_files.push(path.to_string());
            }
        }
    }

    if !all_dirty_files.is_empty() {
        all_dirty_files.sort();
        let files_list: String = all_dirty_files
            .iter()
            .map(|file| format!("  * {file} (dirty)\n"))
            .collect();

        bail!(
            "`muster check --fix` can potentially perform destructive changes but the working \
            directory of this project has uncommitted changes, so no fixes were applied. \n\
            To apply the fixes, either add `--allow-dirty` to the call, or commit the changes \
            to these files:\n\
             \n\
             {}",
            files_list
        );
    }

    Ok(())
}
