use crate::diagnostic::*;

/// Apply the fixes of `diagnostics` to `contents`.
///
/// Fixes are applied from left to right. A fix that starts before the end of
/// the previously applied one overlaps it and is skipped; the returned boolean
/// tells the caller to lint the new contents again so that skipped fixes get
/// another chance.
pub fn apply_fixes(diagnostics: &[Diagnostic], contents: &str) -> (bool, String) {
    let mut fixes = diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fix.as_ref())
        .filter(|fix| fix.start <= fix.end && fix.end <= contents.len())
        .collect::<Vec<_>>();
    fixes.sort_by_key(|fix| (fix.start, fix.end));

    let mut new_content = String::with_capacity(contents.len());
    let mut last_modified_pos = 0;
    let mut has_skipped_fixes = false;

    for fix in fixes {
        if fix.start < last_modified_pos {
            has_skipped_fixes = true;
            continue;
        }

        new_content.push_str(&contents[last_modified_pos..fix.start]);
        new_content.push_str(&fix.content);
        last_modified_pos = fix.end;
    }

    new_content.push_str(&contents[last_modified_pos..]);

    (has_skipped_fixes, new_content)
}
