use path_absolutize::Absolutize;
use std::env;
use std::path::{Path, PathBuf};

/// Extensions of the files that are linted when walking a directory.
pub const JS_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

pub fn has_js_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JS_EXTENSIONS.contains(&ext))
}

/// Make `path` absolute and remove `.` and `..` components, without touching
/// the filesystem.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.absolutize() {
        Ok(absolute) => absolute.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

/// Express `path` relative to the current directory when it lives below it,
/// for display.
pub fn relativize_path<P: AsRef<Path>>(path: P) -> String {
    let path = normalize_path(path);

    let relative = env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or(path);

    relative.to_string_lossy().into_owned()
}
