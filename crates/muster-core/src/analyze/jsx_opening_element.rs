use crate::check::Checker;
use crate::rule_set::Rule;
use oxc_ast::ast::JSXOpeningElement;

use crate::lints::no_box_flex::no_box_flex::{no_box_flex_prop, no_box_flex_sx};
use crate::lints::no_empty_sx::no_empty_sx::no_empty_sx;
use crate::lints::no_theme_breakpoints_in_sx::no_theme_breakpoints_in_sx::no_theme_breakpoints_in_sx;

pub fn jsx_opening_element(element: &JSXOpeningElement, checker: &mut Checker) {
    if checker.is_rule_enabled(Rule::NoBoxFlex) && checker.imports.is_tracked_component(&element.name)
    {
        checker.report_diagnostic(no_box_flex_prop(element));
        checker.report_diagnostic(no_box_flex_sx(element));
    }
    if checker.is_rule_enabled(Rule::NoEmptySx) {
        checker.report_diagnostic(no_empty_sx(element));
    }
    if checker.is_rule_enabled(Rule::NoThemeBreakpointsInSx) {
        checker.report_diagnostic(no_theme_breakpoints_in_sx(element));
    }
}
