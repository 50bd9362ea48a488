use crate::check::Checker;
use crate::rule_set::Rule;
use oxc_ast::ast::ImportDeclaration;

use crate::lints::no_relative_imports::no_relative_imports::no_relative_imports;

pub fn import_declaration(decl: &ImportDeclaration, checker: &mut Checker) {
    if checker.is_rule_enabled(Rule::NoRelativeImports) {
        checker.report_diagnostic(no_relative_imports(decl));
    }
}
