use crate::diagnostic::*;
use crate::shape::{has_breakpoint_call, matches};
use crate::utils_ast::attribute_value;
use oxc_ast::ast::JSXOpeningElement;

pub struct NoThemeBreakpointsInSx;

/// ## What it does
///
/// Checks for computed keys calling `theme.breakpoints.up()` or
/// `theme.breakpoints.down()` inside an `sx` prop, at any nesting depth.
///
/// ## Why is this bad?
///
/// `sx` understands responsive values natively. Media queries built by hand
/// are longer, are easy to get out of order, and hide the values of every
/// breakpoint in different places of the object.
///
/// ## Example
///
/// ```jsx
/// <Box
///   sx={(theme) => ({
///     p: 1,
///     [theme.breakpoints.up('md')]: { p: 3 },
///   })}
/// />
/// ```
///
/// Use instead:
/// ```jsx
/// <Box sx={{ p: { xs: 1, md: 3 } }} />
/// ```
impl Violation for NoThemeBreakpointsInSx {
    fn name(&self) -> String {
        "no-theme-breakpoints-in-sx".to_string()
    }
    fn body(&self) -> String {
        "Avoid using theme.breakpoints.down() or theme.breakpoints.up() in sx prop.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Use responsive object syntax instead (e.g., { lg: value, xs: value })".to_string())
    }
}

pub fn no_theme_breakpoints_in_sx(element: &JSXOpeningElement) -> Option<Diagnostic> {
    let (attr, value) = attribute_value(element, "sx")?;
    let expr = value.as_expression()?;

    if !matches(expr, has_breakpoint_call) {
        return None;
    }

    Some(Diagnostic::new(NoThemeBreakpointsInSx, attr.span.into(), None))
}
