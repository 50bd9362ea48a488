//
// Adapted from Ark
// https://github.com/posit-dev/air/blob/main/crates/workspace/src/settings.rs
//
// MIT License - Posit PBC

/// Resolved configuration settings used within muster
#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub linter: LinterSettings,
}

/// `None` means the field was not set, which is different from an empty list.
#[derive(Debug, Default, Clone)]
pub struct LinterSettings {
    pub select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub default_exclude: Option<bool>,
}
