use git2::{Repository, Signature};
use std::path::Path;

/// Add `file_paths` (relative to the root of `repo`) to the index and commit
/// them.
pub fn create_commit(file_paths: &[&str], repo: &Repository) -> anyhow::Result<()> {
    // 1. Add the files to the index
    let mut index = repo.index()?;
    for file_path in file_paths {
        index.add_path(Path::new(file_path))?;
    }
    index.write()?; // Write the index to disk

    // 2. Write the index to a tree
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    // 3. Create a signature
    let sig = Signature::now("Your Name", "your@example.com")?;

    // 4. Commit on top of HEAD if there is one
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let _ = repo.commit(
        Some("HEAD"), // Point HEAD to this commit
        &sig,         // Author
        &sig,         // Committer
        "Commit",     // Commit message
        &tree,        // Tree
        &parents,     // Parents
    )?;

    Ok(())
}
