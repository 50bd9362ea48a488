use crate::check::Checker;
use crate::rule_set::Rule;
use oxc_ast::Comment;

use crate::lints::no_non_jsdoc_comments::no_non_jsdoc_comments::no_non_jsdoc_comments;

// Comments are not part of the tree that `Visit` walks: the parser collects
// them in a flat list, in source order, that is scanned once per file.
pub fn comments(comments: &[Comment], checker: &mut Checker) {
    if checker.is_rule_enabled(Rule::NoNonJsdocComments) {
        let diagnostics = comments
            .iter()
            .filter_map(|comment| no_non_jsdoc_comments(comment, checker.source_text))
            .collect::<Vec<_>>();
        checker.report_diagnostics(diagnostics);
    }
}
