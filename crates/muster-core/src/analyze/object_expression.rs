use crate::check::Checker;
use crate::rule_set::Rule;
use oxc_ast::ast::ObjectExpression;

use crate::lints::no_empty_lines_in_objects::no_empty_lines_in_objects::no_empty_lines_in_objects;

pub fn object_expression(obj: &ObjectExpression, checker: &mut Checker) {
    if checker.is_rule_enabled(Rule::NoEmptyLinesInObjects) {
        let diagnostics = no_empty_lines_in_objects(obj, checker.source_text);
        checker.report_diagnostics(diagnostics);
    }
}
