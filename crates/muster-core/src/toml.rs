//
// Adapted from Ark
// https://github.com/posit-dev/air/blob/affa92cd514525c4bab6c8c2ca251ea19414b89f/crates/workspace/src/toml.rs
// and
// https://github.com/posit-dev/air/blob/affa92cd514525c4bab6c8c2ca251ea19414b89f/crates/workspace/src/toml_options.rs
//
// MIT License - Posit PBC

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::settings::LinterSettings;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum ParseTomlError {
    // It's nicer if we don't make these paths relative, so we can quickly
    // jump to the TOML file to see what is wrong
    #[error("Failed to read {}:\n{}", .0.display(), .1)]
    Read(PathBuf, io::Error),
    #[error("Failed to parse {}:\n{}", .0.display(), .1)]
    Deserialize(PathBuf, toml::de::Error),
}

pub fn parse_muster_toml(path: &Path) -> Result<TomlOptions, ParseTomlError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ParseTomlError::Read(path.to_path_buf(), err))?;
    toml::from_str(&contents).map_err(|err| ParseTomlError::Deserialize(path.to_path_buf(), err))
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    pub lint: Option<LinterTomlOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LinterTomlOptions {
    /// # Rules to select
    ///
    /// If this is empty, then all rules that are provided by `muster` are
    /// used. Group names such as `"SUGG"` are expanded to their rules.
    pub select: Option<Vec<String>>,

    /// # Rules to ignore
    ///
    /// If this is empty, then no rules are excluded. This field has higher
    /// importance than `select`, so if a rule name appears by mistake in both
    /// `select` and `ignore`, it is ignored.
    pub ignore: Option<Vec<String>>,

    /// # Patterns to exclude from checking
    ///
    /// Patterns follow `.gitignore` syntax and are resolved relative to the
    /// directory containing `muster.toml`. For example `legacy/` skips the
    /// `legacy` folder anywhere below the root, and `/src/gen.ts` skips only
    /// that file.
    pub exclude: Option<Vec<String>>,

    /// # Whether or not to use default exclude patterns
    ///
    /// The defaults are listed in
    /// [`DEFAULT_EXCLUDE_PATTERNS`](crate::discovery::DEFAULT_EXCLUDE_PATTERNS).
    pub default_exclude: Option<bool>,
}

/// Return the path to the `muster.toml` or `.muster.toml` file in a given directory.
pub fn find_muster_toml_in_directory<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    // Check for `muster.toml` first, as we prioritize the "visible" one.
    let toml = path.as_ref().join("muster.toml");
    if toml.is_file() {
        return Some(toml);
    }

    let toml = path.as_ref().join(".muster.toml");
    if toml.is_file() {
        return Some(toml);
    }

    None
}

impl TomlOptions {
    pub fn into_settings(self) -> Settings {
        let linter = self.lint.unwrap_or_default();

        let linter = LinterSettings {
            select: linter.select,
            ignore: linter.ignore,
            exclude: linter.exclude,
            default_exclude: linter.default_exclude,
        };

        Settings { linter }
    }
}
