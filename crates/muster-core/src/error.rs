use std::path::PathBuf;

use thiserror::Error;

/// A file could not be parsed, so no rule was run on it.
#[derive(Debug, Error)]
#[error("Failed to parse {}. Check that the file is valid JavaScript or TypeScript.", filename.display())]
pub struct ParseError {
    pub filename: PathBuf,
}
