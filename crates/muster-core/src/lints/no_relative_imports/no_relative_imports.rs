use crate::diagnostic::*;
use oxc_ast::ast::ImportDeclaration;

pub struct NoRelativeImports;

/// ## What it does
///
/// Checks for import paths starting with `./` or `../`.
///
/// There is no automatic fix: rewriting the path needs to know how the `@/`
/// alias is mapped in the project.
///
/// ## Why is this bad?
///
/// Relative paths depend on where the importing file lives. Moving a file
/// breaks its imports, and `../../../` chains are hard to read. Absolute
/// imports through the `@/` alias stay the same wherever they are written.
///
/// ## Example
///
/// ```js
/// import { Button } from '../components/Button';
/// ```
///
/// Use instead:
/// ```js
/// import { Button } from '@/components/Button';
/// ```
impl Violation for NoRelativeImports {
    fn name(&self) -> String {
        "no-relative-imports".to_string()
    }
    fn body(&self) -> String {
        "Avoid using relative imports (\"./\" or \"../\").".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some(
            "Use absolute imports with @/ prefix instead (e.g., \"@/components/...\" instead of \"./components/...\" or \"../components/...\")."
                .to_string(),
        )
    }
}

/// Whether an import path is relative to the importing file.
///
/// `.` and `..` alone are not matched, neither is `.config`.
pub fn is_relative_import(source: &str) -> bool {
    source.starts_with("./") || source.starts_with("../")
}

pub fn no_relative_imports(decl: &ImportDeclaration) -> Option<Diagnostic> {
    if !is_relative_import(decl.source.value.as_str()) {
        return None;
    }

    Some(Diagnostic::new(NoRelativeImports, decl.source.span.into(), None))
}
